//! Example: counting ordered step compositions with the table and the ring.
//!
//! Run with:
//! `cargo run --example stairs`

use bounded_dp::problems::step_count::{count, count_windowed_with, Arithmetic, StepCount};
use bounded_dp::{SolveConfig, SweepEngine};

fn main() {
    let steps = [2, 3, 4];
    for total in [7, 10, 30] {
        match count(total, &steps) {
            Ok(ways) => println!("{total} stairs with steps {steps:?}: {ways} ways"),
            Err(err) => println!("{total}: {err}"),
        }
    }

    // Prefix counts per block come for free from the engine.
    if let Ok(problem) = StepCount::new(12, &steps) {
        if let Ok((_, blocks)) = SweepEngine::with_block_size(problem, 4).run_with_summaries() {
            for b in blocks {
                println!("ways[{}] = {}", b.end, b.summary);
            }
        }
    }

    let big = count_windowed_with(
        1_000_000,
        &[1, 2],
        Arithmetic::Modulo(1_000_000_007),
        &SolveConfig::default(),
    );
    println!("1e6 stairs with steps 1,2 (mod 1e9+7): {big:?}");
}
