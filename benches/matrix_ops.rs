//! Benchmarks for matrix construction and algebra.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use matriz::prelude::*;

fn square(n: usize) -> Matrix {
    let data: Vec<f64> = (0..n * n).map(|i| (i as f64 * 0.37).sin()).collect();
    Matrix::from_vec(n, n, data).expect("data length matches n * n")
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for size in [8, 32, 128].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &n| {
            b.iter(|| {
                Matrix::build(|builder| {
                    for y in 0..n {
                        builder.row((0..n).map(|x| (x + y) as f64))?;
                    }
                    Ok(())
                })
                .expect("rows share one length")
            });
        });
    }

    group.finish();
}

fn bench_transpose(c: &mut Criterion) {
    let mut group = c.benchmark_group("transpose");

    for size in [8, 32, 128].iter() {
        let m = square(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(&m).transpose());
        });
    }

    group.finish();
}

fn bench_matmul(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul");

    for size in [8, 32, 64].iter() {
        let a = square(*size);
        let b_m = square(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                black_box(&a)
                    .matmul(black_box(&b_m))
                    .expect("square operands are compatible")
            });
        });
    }

    group.finish();
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");

    for size in [8, 32, 128].iter() {
        let a = square(*size);
        let b_m = square(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                black_box(&a)
                    .add(black_box(&b_m))
                    .expect("same-shape operands")
            });
        });
    }

    group.finish();
}

fn bench_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum");

    for size in [8, 32, 128].iter() {
        let m = square(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(&m).sum());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_build,
    bench_transpose,
    bench_matmul,
    bench_add,
    bench_sum
);
criterion_main!(benches);
