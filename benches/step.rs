use criterion::{criterion_group, criterion_main, Criterion};
use life_grid::LifeGrid;

const SEED: u64 = 42;
const FILL_RATE: f64 = 0.5;

fn step_default(c: &mut Criterion) {
    let mut grid = LifeGrid::default();
    grid.randomize(Some(SEED), FILL_RATE);
    c.bench_function("step_256x256", |b| b.iter(|| grid.step()));
}

fn step_1024(c: &mut Criterion) {
    let mut grid = LifeGrid::new(1024, 1024).unwrap();
    grid.randomize(Some(SEED), FILL_RATE);
    c.bench_function("step_1024x1024", |b| b.iter(|| grid.step()));
}

criterion_group!(benches, step_default, step_1024);
criterion_main!(benches);
