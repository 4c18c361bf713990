use life_grid::{GridError, LifeGrid};
use std::time::Duration;

const WIDTH: usize = 64;
const HEIGHT: usize = 24;
const GENERATIONS: usize = 400;
const TICK: Duration = Duration::from_millis(50);

fn main() -> Result<(), GridError> {
    let mut grid = LifeGrid::new(WIDTH, HEIGHT)?;
    grid.randomize(None, 0.5);

    for generation in 0..GENERATIONS {
        // clear the terminal and home the cursor
        print!("\x1b[2J\x1b[H");
        grid.println();
        println!("generation {}, population {}", generation, grid.population());
        grid.step();
        std::thread::sleep(TICK);
    }
    Ok(())
}
