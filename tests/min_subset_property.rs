use bounded_dp::problems::{
    min_subset::solve_min,
    subset_sum::{solve, SubsetOutcome},
};
use proptest::prelude::*;

/// Fewest items summing to `target`, by exhaustive search.
fn brute_force_min(weights: &[i64], target: i64) -> Option<u32> {
    let n = weights.len();
    (0u32..(1 << n))
        .filter(|&mask| {
            (0..n)
                .filter(|&i| mask & (1 << i) != 0)
                .map(|i| weights[i])
                .sum::<i64>()
                == target
        })
        .map(u32::count_ones)
        .min()
}

proptest! {
    #[test]
    fn cardinality_is_minimal(
        weights in prop::collection::vec(1i64..15, 0usize..12),
        target in 0i64..60,
    ) {
        let outcome = solve_min(&weights, target).unwrap();
        match (brute_force_min(&weights, target), outcome) {
            (None, SubsetOutcome::NoSolution) => {}
            (Some(k), SubsetOutcome::Found(sel)) => {
                prop_assert_eq!(sel.len(), k as usize);
                prop_assert!(sel.indices.windows(2).all(|w| w[0] < w[1]));
                let sum: i64 = sel.indices.iter().map(|&i| weights[i - 1]).sum();
                prop_assert_eq!(sum, target);
            }
            (expected, got) => prop_assert!(false, "expected {:?}, got {:?}", expected, got),
        }
    }

    #[test]
    fn never_larger_than_first_found(
        weights in prop::collection::vec(1i64..10, 0usize..16),
        target in 0i64..80,
    ) {
        let first = solve(&weights, target).unwrap();
        let min = solve_min(&weights, target).unwrap();
        prop_assert_eq!(first.is_found(), min.is_found());
        if let (Some(a), Some(b)) = (first.selection(), min.selection()) {
            prop_assert!(b.len() <= a.len());
        }
    }
}
