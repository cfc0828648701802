use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use randselect::sort::{randomized_quickselect_with_rng, randomized_quicksort_with_rng};

fn bench_median(c: &mut Criterion) {
    let mut group = c.benchmark_group("median");
    let mut rng = ChaCha8Rng::seed_from_u64(0x5e1e);

    for size in [1_000usize, 10_000, 100_000] {
        let input: Vec<i64> = (0..size).map(|_| rng.gen()).collect();
        let rank = size / 2;

        group.bench_with_input(BenchmarkId::new("quickselect", size), &input, |b, input| {
            let mut pivots = ChaCha8Rng::seed_from_u64(1);
            b.iter(|| {
                let mut v = input.clone();
                randomized_quickselect_with_rng(black_box(&mut v), rank, &mut pivots)
            })
        });

        group.bench_with_input(BenchmarkId::new("sort_then_index", size), &input, |b, input| {
            let mut pivots = ChaCha8Rng::seed_from_u64(1);
            b.iter(|| {
                let mut v = input.clone();
                randomized_quicksort_with_rng(black_box(&mut v), &mut pivots);
                v[rank - 1]
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_median);
criterion_main!(benches);
