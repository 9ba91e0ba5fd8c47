use bounded_dp::problems::step_count::{
    count, count_windowed, Arithmetic, StepCount, WindowedStepCount,
};
use bounded_dp::SweepEngine;
use proptest::prelude::*;

const MODULUS: u64 = 998_244_353;

/// All subsets of {1..=10} with 2 or 3 elements.
fn small_step_sets() -> Vec<Vec<i64>> {
    let mut sets = Vec::new();
    for a in 1..=10 {
        for b in a + 1..=10 {
            sets.push(vec![a, b]);
            for c in b + 1..=10 {
                sets.push(vec![a, b, c]);
            }
        }
    }
    sets
}

/// Count for every total 0..=target, read from per-layer block summaries.
fn prefix_counts_full(target: i64, steps: &[i64]) -> Vec<u128> {
    let p = StepCount::new(target, steps)
        .unwrap()
        .with_arithmetic(Arithmetic::Modulo(MODULUS))
        .unwrap();
    let (_, blocks) = SweepEngine::with_block_size(p, 1).run_with_summaries().unwrap();
    std::iter::once(1).chain(blocks.iter().map(|b| b.summary)).collect()
}

fn prefix_counts_window(target: i64, steps: &[i64]) -> Vec<u128> {
    let p = WindowedStepCount::new(target, steps)
        .unwrap()
        .with_arithmetic(Arithmetic::Modulo(MODULUS))
        .unwrap();
    let (_, blocks) = SweepEngine::with_block_size(p, 1).run_with_summaries().unwrap();
    std::iter::once(1).chain(blocks.iter().map(|b| b.summary)).collect()
}

#[test]
fn window_matches_table_for_every_total_up_to_1000() {
    let sets = small_step_sets();
    assert_eq!(sets.len(), 165);
    for steps in &sets {
        let full = prefix_counts_full(1000, steps);
        let ring = prefix_counts_window(1000, steps);
        assert_eq!(full.len(), 1001);
        assert_eq!(full, ring, "steps {steps:?}");
    }
}

#[test]
fn exact_results_agree_including_overflow() {
    for steps in small_step_sets() {
        for target in (0..=60).chain((61..=1000).step_by(53)) {
            assert_eq!(
                count(target, &steps),
                count_windowed(target, &steps),
                "target {target}, steps {steps:?}"
            );
        }
    }
}

#[test]
fn zero_total_has_one_composition() {
    for steps in small_step_sets() {
        assert_eq!(count(0, &steps).unwrap(), 1);
        assert_eq!(count_windowed(0, &steps).unwrap(), 1);
    }
}

/// Enumerate compositions directly.
fn brute_compositions(target: i64, steps: &[i64]) -> u128 {
    if target == 0 {
        return 1;
    }
    steps
        .iter()
        .filter(|&&k| k <= target)
        .map(|&k| brute_compositions(target - k, steps))
        .sum()
}

proptest! {
    #[test]
    fn matches_enumeration(
        target in 0i64..18,
        steps in prop::collection::btree_set(1i64..8, 0usize..4),
    ) {
        let steps: Vec<i64> = steps.into_iter().collect();
        let expected = brute_compositions(target, &steps);
        prop_assert_eq!(count(target, &steps).unwrap(), expected);
        prop_assert_eq!(count_windowed(target, &steps).unwrap(), expected);
    }

    #[test]
    fn step_order_is_irrelevant(target in 0i64..200, steps in prop::collection::vec(1i64..10, 2..4)) {
        let mut steps = steps;
        steps.sort_unstable();
        steps.dedup();
        let reversed: Vec<i64> = steps.iter().rev().copied().collect();
        prop_assert_eq!(count(target, &steps), count(target, &reversed));
    }
}
