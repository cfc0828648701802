use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use randselect::sort::randomized_quicksort_with_rng;

fn bench_randomized_quicksort(c: &mut Criterion) {
    let mut group = c.benchmark_group("randomized_quicksort");
    let mut rng = ChaCha8Rng::seed_from_u64(0xbe7c);

    for size in [100usize, 1_000, 10_000, 100_000] {
        let input: Vec<i64> = (0..size).map(|_| rng.gen()).collect();

        group.bench_with_input(BenchmarkId::new("random", size), &input, |b, input| {
            let mut pivots = ChaCha8Rng::seed_from_u64(1);
            b.iter(|| {
                let mut v = input.clone();
                randomized_quicksort_with_rng(black_box(&mut v), &mut pivots);
                v
            })
        });

        let sorted: Vec<i64> = (0..size as i64).collect();
        group.bench_with_input(BenchmarkId::new("sorted", size), &sorted, |b, input| {
            let mut pivots = ChaCha8Rng::seed_from_u64(2);
            b.iter(|| {
                let mut v = input.clone();
                randomized_quicksort_with_rng(black_box(&mut v), &mut pivots);
                v
            })
        });
    }
    group.finish();
}

fn bench_std_sort_unstable(c: &mut Criterion) {
    let mut group = c.benchmark_group("std_sort_unstable");
    let mut rng = ChaCha8Rng::seed_from_u64(0xbe7c);

    for size in [100usize, 1_000, 10_000, 100_000] {
        let input: Vec<i64> = (0..size).map(|_| rng.gen()).collect();
        group.bench_with_input(BenchmarkId::new("random", size), &input, |b, input| {
            b.iter(|| {
                let mut v = input.clone();
                black_box(&mut v).sort_unstable();
                v
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_randomized_quicksort, bench_std_sort_unstable);
criterion_main!(benches);
