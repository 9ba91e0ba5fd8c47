use bounded_dp::problems::{min_subset::solve_min, subset_sum::solve};
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_instance(rng: &mut StdRng, n: usize, max: i64) -> (Vec<i64>, i64) {
    let weights: Vec<i64> = (0..n).map(|_| rng.gen_range(1..=max)).collect();
    let target = weights.iter().step_by(2).sum();
    (weights, target)
}

fn bench_subset_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("subset_sum");
    for &n in &[60usize, 200, 500] {
        group.bench_function(format!("first_found_n{n}"), |b| {
            b.iter_batched(
                || random_instance(&mut StdRng::seed_from_u64(42), n, 300),
                |(weights, target)| {
                    let outcome = solve(&weights, target).unwrap();
                    criterion::black_box(outcome);
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("min_count_n{n}"), |b| {
            b.iter_batched(
                || random_instance(&mut StdRng::seed_from_u64(42), n, 300),
                |(weights, target)| {
                    let outcome = solve_min(&weights, target).unwrap();
                    criterion::black_box(outcome);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_subset_sum);
criterion_main!(benches);
