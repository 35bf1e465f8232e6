// Fibonacci and array-sum benchmarks
// Run: cargo bench -p experiment-core

use criterion::{Criterion, criterion_group, criterion_main};
use experiment_core::{fibonacci, sum_array};
use std::hint::black_box;

fn bench_fibonacci(c: &mut Criterion) {
    c.bench_function("fib-naive-10", |b| b.iter(|| fibonacci(black_box(10))));
    c.bench_function("fib-naive-20", |b| b.iter(|| fibonacci(black_box(20))));
}

fn bench_sum(c: &mut Criterion) {
    let values: Vec<i64> = (1..=10).collect();
    c.bench_function("sum-array-10", |b| {
        b.iter(|| sum_array(black_box(&values), black_box(10)))
    });

    let large: Vec<i64> = (1..=100_000).collect();
    c.bench_function("sum-array-100k", |b| {
        b.iter(|| sum_array(black_box(&large), black_box(large.len())))
    });
}

criterion_group!(benches, bench_fibonacci, bench_sum);
criterion_main!(benches);
