//! Timing of the sparse stepper on the built-in patterns.
//! Work per generation follows the bounding-box area, which can grow by
//! one cell on each side per generation for expanding patterns.

use std::time::Instant;
use sparse_life::domain::{BoundingBox, LiveSet, presets, simulate, soup};

/// Run `iterations` generations and return (ms per generation, final box area, final population)
fn benchmark(seed: &LiveSet, iterations: i64) -> (f64, u64, usize) {
    let start = Instant::now();
    let history = match simulate(seed, iterations) {
        Ok(history) => history,
        Err(err) => {
            eprintln!("skipping: {err}");
            return (0.0, 0, 0);
        }
    };
    let ms = start.elapsed().as_secs_f64() * 1000.0 / iterations.max(1) as f64;

    let last = history.last().cloned().unwrap_or_default();
    (ms, BoundingBox::of(&last).area(), last.len())
}

fn main() {
    println!("=== Sparse Life Benchmark ===\n");

    let iteration_counts = [10, 50, 100, 200];

    println!("{:>12} {:>8} {:>12} {:>12} {:>10}",
        "Pattern", "Gens", "ms/gen", "Box area", "Alive");
    println!("{:-<58}", "");

    let mut seeds: Vec<(String, LiveSet)> = presets::all_patterns()
        .into_iter()
        .map(|p| (p.name.to_string(), p.cells))
        .collect();
    seeds.push(("soup 32x32".to_string(), soup(32, 32, 0.35, 1)));

    for (name, cells) in &seeds {
        for iterations in iteration_counts {
            let (ms, area, alive) = benchmark(cells, iterations);
            println!("{:>12} {:>8} {:>12.3} {:>12} {:>10}", name, iterations, ms, area, alive);
        }
    }
}
