//! Example: subset-sum with reconstruction, first-found vs. fewest items.
//!
//! Run with:
//! `cargo run --example subset_sum`

use bounded_dp::problems::{min_subset::solve_min, subset_sum::solve};
use bounded_dp::SubsetOutcome;

fn main() {
    let weights = [1, 1, 2, 4, 3, 2];
    let target = 4;

    for (label, outcome) in [
        ("first-found", solve(&weights, target)),
        ("fewest items", solve_min(&weights, target)),
    ] {
        match outcome {
            Ok(SubsetOutcome::Found(sel)) => {
                let values: Vec<i64> = sel.indices.iter().map(|&i| weights[i - 1]).collect();
                println!("{label}: indices {:?} -> values {values:?}", sel.indices);
            }
            Ok(SubsetOutcome::NoSolution) => println!("{label}: no selection sums to {target}"),
            Err(err) => println!("{label}: {err}"),
        }
    }
}
