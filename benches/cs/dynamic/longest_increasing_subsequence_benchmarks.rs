use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lg::cs::dynamic::{
    longest_increasing_subsequence_length, longest_increasing_subsequence_length_memoized,
    longest_increasing_subsequence_length_patience,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn generate_random_sequence(size: usize) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(300);
    (0..size).map(|_| rng.gen_range(-10_000..10_000)).collect()
}

fn bench_lis_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("lis_length");

    for size in [100, 1_000, 2_000] {
        let data = generate_random_sequence(size);

        group.bench_with_input(BenchmarkId::new("dp", size), &data, |b, data| {
            b.iter(|| longest_increasing_subsequence_length(black_box(data)))
        });
        group.bench_with_input(BenchmarkId::new("memoized", size), &data, |b, data| {
            b.iter(|| longest_increasing_subsequence_length_memoized(black_box(data)))
        });
        group.bench_with_input(BenchmarkId::new("patience", size), &data, |b, data| {
            b.iter(|| longest_increasing_subsequence_length_patience(black_box(data)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_lis_length);
criterion_main!(benches);
