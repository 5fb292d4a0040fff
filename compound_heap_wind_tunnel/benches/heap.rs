// Copyright 2026 the Compound Heap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use compound_heap::heap::ObjectHeap;
use compound_heap::value::{ObjHandle, Slot, Tag};

/// Entry point for `compound_heap` wind-tunnel benchmarks.
///
/// The scenarios cover the shapes generated code produces in practice: wide flat arrays
/// (element-wise scans and bulk fills) and deep tagged-object chains (recursive structural
/// equality).
fn bench_heap(c: &mut Criterion) {
    bench_array_eq(c);
    bench_array_fill(c);
    bench_object_eq_deep(c);
    bench_object_clone_wide(c);
}

fn build_twin_arrays(len: usize) -> (ObjectHeap, ObjHandle, ObjHandle) {
    let mut h = ObjectHeap::new();
    let words: Vec<i64> = (0..len as i64).collect();
    let a = h.array_new(words.clone());
    let b = h.array_new(words);
    (h, a, b)
}

fn build_twin_chains(depth: usize) -> (ObjectHeap, ObjHandle, ObjHandle) {
    let mut h = ObjectHeap::new();
    let tag = Tag::new(1).unwrap();
    let build = |h: &mut ObjectHeap| {
        let mut top = h.object_new(vec![Slot::Scalar(7)]);
        for _ in 0..depth {
            top = h.object_new(vec![Slot::Ref { tag, target: top }]);
        }
        top
    };
    let a = build(&mut h);
    let b = build(&mut h);
    (h, a, b)
}

fn bench_array_eq(c: &mut Criterion) {
    let mut group = c.benchmark_group("array_eq");
    for len in [16, 256, 4096] {
        let (h, a, b) = build_twin_arrays(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |bencher, _| {
            bencher.iter(|| h.array_eq(black_box(a), black_box(b)).unwrap());
        });
    }
    group.finish();
}

fn bench_array_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("array_fill");
    for len in [16, 256, 4096] {
        let (mut h, a, _) = build_twin_arrays(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |bencher, _| {
            bencher.iter(|| h.array_fill(black_box(a), black_box(-1)).unwrap());
        });
    }
    group.finish();
}

fn bench_object_eq_deep(c: &mut Criterion) {
    let mut group = c.benchmark_group("object_eq_deep");
    for depth in [8, 64, 512] {
        let (h, a, b) = build_twin_chains(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |bencher, _| {
            bencher.iter(|| h.object_eq(black_box(a), black_box(b)).unwrap());
        });
    }
    group.finish();
}

fn bench_object_clone_wide(c: &mut Criterion) {
    let mut group = c.benchmark_group("object_clone_wide");
    for len in [16, 256, 4096] {
        let mut h = ObjectHeap::new();
        let slots: Vec<Slot> = (0..len as i64).map(Slot::Scalar).collect();
        let o = h.object_new(slots);
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |bencher, _| {
            bencher.iter(|| h.object_clone(black_box(o)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_heap);
criterion_main!(benches);
