#![cfg(feature = "heavy")]
use bounded_dp::problems::{
    min_subset::solve_min,
    step_count::{count_windowed_with, count_with, Arithmetic},
    subset_sum::solve,
};
use bounded_dp::SolveConfig;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_weights(rng: &mut StdRng, n: usize, max: i64) -> Vec<i64> {
    (0..n).map(|_| rng.gen_range(1..=max)).collect()
}

#[test]
fn heavy_stress_subset_large_target() {
    let mut rng = StdRng::seed_from_u64(123);
    let weights = random_weights(&mut rng, 500, 2_000);
    let target: i64 = weights.iter().take(150).sum();
    let sel = solve(&weights, target).unwrap().into_selection().unwrap();
    let sum: i64 = sel.indices.iter().map(|&i| weights[i - 1]).sum();
    assert_eq!(sum, target);
}

#[test]
fn heavy_stress_min_subset() {
    let mut rng = StdRng::seed_from_u64(7);
    let weights = random_weights(&mut rng, 300, 1_000);
    let target: i64 = weights.iter().step_by(3).sum();
    let min = solve_min(&weights, target).unwrap().into_selection().unwrap();
    let first = solve(&weights, target).unwrap().into_selection().unwrap();
    assert!(min.len() <= first.len());
}

#[test]
fn heavy_stress_ring_matches_table() {
    let config = SolveConfig::default();
    let modulus = Arithmetic::Modulo(1_000_000_007);
    for steps in [[1, 2, 3], [3, 7, 10], [2, 9, 10]] {
        let full = count_with(5_000_000, &steps, modulus, &config).unwrap();
        let ring = count_windowed_with(5_000_000, &steps, modulus, &config).unwrap();
        assert_eq!(full, ring);
    }
}
