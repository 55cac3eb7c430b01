use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use daa::sort::{par_quicksort, quicksort_deterministic, quicksort_randomized};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

fn random_input(len: usize) -> Vec<i64> {
    let mut rng = ChaCha20Rng::seed_from_u64(0x5eed);
    (0..len).map(|_| rng.gen_range(-1_000_000..1_000_000)).collect()
}

fn bench_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("quicksort_random");
    for &len in &[1_000usize, 10_000, 100_000] {
        let input = random_input(len);
        group.bench_with_input(BenchmarkId::new("deterministic", len), &input, |b, input| {
            b.iter(|| {
                let mut data = input.clone();
                quicksort_deterministic(black_box(&mut data));
            })
        });
        group.bench_with_input(BenchmarkId::new("randomized", len), &input, |b, input| {
            b.iter(|| {
                let mut data = input.clone();
                quicksort_randomized(black_box(&mut data));
            })
        });
        group.bench_with_input(BenchmarkId::new("parallel", len), &input, |b, input| {
            b.iter(|| {
                let mut data = input.clone();
                par_quicksort(black_box(&mut data));
            })
        });
    }
    group.finish();
}

// Sorted input is the fixed pivot's worst case.
fn bench_sorted(c: &mut Criterion) {
    let mut group = c.benchmark_group("quicksort_sorted");
    for &len in &[1_000usize, 5_000] {
        let input: Vec<i64> = (0..len as i64).collect();
        group.bench_with_input(BenchmarkId::new("deterministic", len), &input, |b, input| {
            b.iter(|| {
                let mut data = input.clone();
                quicksort_deterministic(black_box(&mut data));
            })
        });
        group.bench_with_input(BenchmarkId::new("randomized", len), &input, |b, input| {
            b.iter(|| {
                let mut data = input.clone();
                quicksort_randomized(black_box(&mut data));
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_random, bench_sorted);
criterion_main!(benches);
