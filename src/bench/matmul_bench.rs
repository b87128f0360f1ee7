//! Compares the serial baselines against the threaded multiplier.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use matmul::{Matrix, ParallelMultiplier, multiply_ijk, multiply_ikj};
use std::hint::black_box;

fn square(size: usize) -> Matrix {
    Matrix::from_values((0..size * size).map(|i| (i % 100) as f64), size, size)
        .expect("valid shape")
}

fn bench_matmul(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul");
    group.sample_size(10);

    let parallel = ParallelMultiplier::new();

    for size in [64, 256, 512] {
        let a = square(size);
        let b = square(size);
        group.throughput(Throughput::Elements((2 * size * size * size) as u64));

        if size <= 256 {
            group.bench_with_input(BenchmarkId::new("naive_ijk", size), &size, |bench, _| {
                bench.iter(|| multiply_ijk(black_box(&a), black_box(&b)))
            });
        }
        group.bench_with_input(BenchmarkId::new("serial_ikj", size), &size, |bench, _| {
            bench.iter(|| multiply_ikj(black_box(&a), black_box(&b)))
        });
        group.bench_with_input(BenchmarkId::new("parallel", size), &size, |bench, _| {
            bench.iter(|| parallel.multiply(black_box(&a), black_box(&b)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_matmul);
criterion_main!(benches);
