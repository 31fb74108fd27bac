//! Criterion benchmarks for diagonal index construction.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use vicinity_bench::{reference_profile, stress_profile};
use vicinity_index::DiagonalIndex;

/// Benchmark: rebuild the index of the 21x21 reference grid.
fn bench_build_reference(c: &mut Criterion) {
    let world = reference_profile(42);
    let origin = world.config().origin;

    c.bench_function("build_index_reference", |b| {
        b.iter(|| black_box(DiagonalIndex::build(world.grid(), origin)));
    });
}

/// Benchmark: rebuild the index of the 2001x2001 stress grid.
///
/// Dominated by the row-major walk over ~4M cells.
fn bench_build_stress(c: &mut Criterion) {
    let world = stress_profile(42);
    let origin = world.config().origin;

    let mut group = c.benchmark_group("build_index_stress");
    group.sample_size(10);
    group.bench_function("diagonal", |b| {
        b.iter(|| black_box(DiagonalIndex::build(world.grid(), origin)));
    });
    group.finish();
}

criterion_group!(benches, bench_build_reference, bench_build_stress);
criterion_main!(benches);
