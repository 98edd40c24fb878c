use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use cipher_tool::analyzer::analyze;

fn create_sample(size: usize) -> String {
    let line = "We are met on a great battlefield of that war, testing that nation. ";
    let mut sample = String::with_capacity(size + line.len());
    while sample.len() < size {
        sample.push_str(line);
    }
    sample.truncate(size);
    sample
}

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");
    for size in [1024, 64 * 1024, 1024 * 1024] {
        let sample = create_sample(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &sample, |b, s| {
            b.iter(|| analyze(black_box(s)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_analyze);
criterion_main!(benches);
