use crate::{GridError, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Toroidal Game of Life field with aging cells.
///
/// Each cell is a single byte: 0 is dead, 1 is newly born, 2..=255 encode
/// how many consecutive generations the cell has been alive (saturating at
/// 255). The field is double-buffered; [`LifeGrid::step`] writes the next
/// generation into the scratch buffer and swaps it in.
#[derive(Clone)]
pub struct LifeGrid {
    cells_curr: Vec<u8>,
    cells_next: Vec<u8>,
    width: usize,
    height: usize,
}

impl LifeGrid {
    /// Creates a field of the given dimensions filled with dead cells.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::ZeroDimension { width, height });
        }
        let size = width
            .checked_mul(height)
            .ok_or(GridError::Allocation { width, height })?;
        Ok(Self {
            cells_curr: zeroed(size, width, height)?,
            cells_next: zeroed(size, width, height)?,
            width,
            height,
        })
    }

    /// `(width, height)` of the field
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get_cell(&self, x: usize, y: usize) -> u8 {
        self.cells_curr[x + y * self.width]
    }

    pub fn set_cell(&mut self, x: usize, y: usize, value: u8) {
        self.cells_curr[x + y * self.width] = value;
    }

    /// Row-major view of the current generation.
    ///
    /// The borrow stays valid until the next [`LifeGrid::step`]; after that
    /// the slice must be re-fetched because the buffers have been swapped.
    pub fn cells(&self) -> &[u8] {
        &self.cells_curr
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells_curr.iter().filter(|&&v| v > 0).count()
    }

    /// Fills the field with random cells drawn from `rng`.
    ///
    /// Consumes exactly one draw per cell in row-major order, so a seeded
    /// generator reproduces the same pattern. Each cell becomes a newborn
    /// (1) with probability `fill_rate`, otherwise dead.
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R, fill_rate: f64) {
        for y in 0..self.height {
            for x in 0..self.width {
                let state = if rng.gen_bool(fill_rate) { 1 } else { 0 };
                self.cells_curr[x + y * self.width] = state;
            }
        }
    }

    /// Fills the field with random cells
    pub fn randomize(&mut self, seed: Option<u64>, fill_rate: f64) {
        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        self.randomize_with(&mut rng, fill_rate);
    }

    fn count_neibs(&self, x: usize, y: usize) -> usize {
        let x1 = if x == 0 { self.width - 1 } else { x - 1 };
        let x2 = if x == self.width - 1 { 0 } else { x + 1 };
        let y1 = if y == 0 { self.height - 1 } else { y - 1 };
        let y2 = if y == self.height - 1 { 0 } else { y + 1 };
        (self.get_cell(x1, y1) > 0) as usize
            + (self.get_cell(x, y1) > 0) as usize
            + (self.get_cell(x2, y1) > 0) as usize
            + (self.get_cell(x1, y) > 0) as usize
            + (self.get_cell(x2, y) > 0) as usize
            + (self.get_cell(x1, y2) > 0) as usize
            + (self.get_cell(x, y2) > 0) as usize
            + (self.get_cell(x2, y2) > 0) as usize
    }

    /// Advances the field by one generation.
    ///
    /// Standard rule (birth on 3 neighbors, survival on 2 or 3) with a
    /// saturating age bump for every cell that lives: a newborn gets 1 and a
    /// survivor gets `min(age, 254) + 1`, so stored ages never wrap past 255.
    pub fn step(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                let neibs = self.count_neibs(x, y);
                let curr = self.cells_curr[x + y * self.width];
                // births land on 1 since curr == 0
                let aged = curr.min(u8::MAX - 1) + 1;
                let next = match neibs {
                    2 if curr > 0 => aged,
                    3 => aged,
                    _ => 0,
                };
                self.cells_next[x + y * self.width] = next;
            }
        }
        std::mem::swap(&mut self.cells_next, &mut self.cells_curr);
    }

    /// Advances the field by `iters_cnt` generations
    pub fn update(&mut self, iters_cnt: usize) {
        for _ in 0..iters_cnt {
            self.step();
        }
    }

    /// Prints the field to the stdout
    pub fn println(&self) {
        for y in 0..self.height {
            for x in 0..self.width {
                print!("{}", if self.get_cell(x, y) > 0 { '#' } else { '.' });
                if x + 1 == self.width {
                    println!();
                }
            }
        }
        println!();
    }
}

impl Default for LifeGrid {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT).expect("default-sized buffers always fit")
    }
}

fn zeroed(size: usize, width: usize, height: usize) -> Result<Vec<u8>, GridError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(size)
        .map_err(|_| GridError::Allocation { width, height })?;
    buf.resize(size, 0);
    Ok(buf)
}
