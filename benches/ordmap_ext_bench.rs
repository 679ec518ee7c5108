//! Benchmark for the extension operations.
//!
//! Compares `delete_if` against `IndexMap::retain`, and measures merge with
//! and without a resolver.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ordmap_ext::prelude::*;
use std::hint::black_box;

fn build(size: i64) -> OrderedHash<i64, i64> {
    (0..size).map(|index| (index, index * 2)).collect()
}

// =============================================================================
// delete_if Benchmark
// =============================================================================

fn benchmark_delete_if(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("delete_if");

    for size in [100, 1_000, 10_000] {
        let hash = build(size);

        group.bench_with_input(BenchmarkId::new("delete_if", size), &size, |bencher, _| {
            bencher.iter(|| {
                let mut hash = hash.clone();
                hash.delete_if(|key, _| black_box(*key) % 3 == 0);
                black_box(hash)
            });
        });

        // IndexMap::retain
        group.bench_with_input(BenchmarkId::new("retain", size), &size, |bencher, _| {
            bencher.iter(|| {
                let mut hash = hash.clone();
                hash.retain(|key, _| black_box(*key) % 3 != 0);
                black_box(hash)
            });
        });
    }

    group.finish();
}

// =============================================================================
// merge Benchmark
// =============================================================================

fn benchmark_merge(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("merge");

    for size in [100, 1_000, 10_000] {
        let target = build(size);
        let source: OrderedHash<i64, i64> = (size / 2..size + size / 2).map(|index| (index, index)).collect();

        group.bench_with_input(BenchmarkId::new("overwrite", size), &size, |bencher, _| {
            bencher.iter(|| {
                let mut target = target.clone();
                target.merge_into(&source).map(|merged| merged.len()).ok();
                black_box(target)
            });
        });

        group.bench_with_input(BenchmarkId::new("resolver", size), &size, |bencher, _| {
            bencher.iter(|| {
                let mut target = target.clone();
                target
                    .merge_into_with(&source, |_, current, incoming| current + incoming)
                    .map(|merged| merged.len())
                    .ok();
                black_box(target)
            });
        });
    }

    group.finish();
}

// =============================================================================
// invert / key_of Benchmark
// =============================================================================

fn benchmark_lookup(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("lookup");

    for size in [100, 1_000, 10_000] {
        let hash = build(size);

        group.bench_with_input(BenchmarkId::new("invert", size), &size, |bencher, _| {
            bencher.iter(|| black_box(hash.invert()));
        });

        group.bench_with_input(BenchmarkId::new("key_of_last", size), &size, |bencher, &size| {
            bencher.iter(|| black_box(hash.key_of(&((size - 1) * 2))));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_delete_if, benchmark_merge, benchmark_lookup);
criterion_main!(benches);
