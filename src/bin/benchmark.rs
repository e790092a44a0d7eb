//! Step engine benchmark: serial vs rayon-parallel generations

use std::time::Instant;

use duel_of_life::domain::{step, CellState, Grid};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

/// Random two-species soup, about 30% alive split evenly between players
fn random_grid(size: usize, seed: u64) -> Grid {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut grid = Grid::new(size, size).expect("benchmark sizes are non-zero");
    for y in 0..size {
        for x in 0..size {
            let roll: f32 = rng.random();
            let state = if roll < 0.15 {
                CellState::P1
            } else if roll < 0.3 {
                CellState::P2
            } else {
                continue;
            };
            grid.set_current(x, y, state).expect("loop stays in bounds");
        }
    }
    grid
}

fn benchmark(
    size: usize,
    iterations: u32,
    engine: fn(&mut Grid) -> step::StepReport,
) -> (f64, u64) {
    let mut grid = random_grid(size, 0x5eed);
    let mut births = 0u64;

    let start = Instant::now();
    for _ in 0..iterations {
        let report = engine(&mut grid);
        births += u64::from(report.p1_births + report.p2_births);
    }
    (start.elapsed().as_secs_f64() * 1000.0 / iterations as f64, births)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .init();

    println!("=== Duel of Life Step Benchmark ===\n");

    let sizes = [50, 100, 250, 500, 1000, 2000];
    let iterations = 20;

    println!(
        "{:>10} {:>12} {:>12} {:>10} {:>12}",
        "Size", "Serial", "Parallel", "Speedup", "Births"
    );
    println!("{:-<60}", "");

    for size in sizes {
        let (serial_ms, serial_births) = benchmark(size, iterations, step::step);
        let (parallel_ms, parallel_births) = benchmark(size, iterations, step::step_parallel);
        assert_eq!(serial_births, parallel_births, "engines diverged at {size}x{size}");
        info!(size, serial_ms, parallel_ms, births = serial_births, "size benchmarked");

        println!(
            "{:>10} {:>10.2}ms {:>10.2}ms {:>9.1}x {:>12}",
            format!("{size}x{size}"),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms,
            serial_births
        );
    }
}
