// Copyright 2026 the Compound Heap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared builders for the `compound_heap` conformance suite.
//!
//! The integration tests in `tests/` run the cross-cutting properties (reflexivity, symmetry,
//! clone fidelity) over the sample populations built here.

use compound_heap::heap::ObjectHeap;
use compound_heap::value::{ObjHandle, Slot, Tag};

/// Builds a tag from a nonzero wire value.
///
/// # Panics
///
/// Panics when `value` is `0` (the scalar marker).
#[must_use]
pub fn tag(value: i64) -> Tag {
    Tag::new(value).expect("nonzero wire tag")
}

/// Builds a reference slot.
#[must_use]
pub fn ref_slot(tag_value: i64, target: ObjHandle) -> Slot {
    Slot::Ref {
        tag: tag(tag_value),
        target,
    }
}

/// Builds all-scalar pairs from payload words.
#[must_use]
pub fn scalars(values: &[i64]) -> Vec<Slot> {
    values.iter().copied().map(Slot::Scalar).collect()
}

/// Allocates an assortment of flat-array shapes: empty, singleton, wide, and negative words.
pub fn sample_arrays(heap: &mut ObjectHeap) -> Vec<ObjHandle> {
    vec![
        heap.array_new(vec![]),
        heap.array_new(vec![0]),
        heap.array_new(vec![1, 2, 3]),
        heap.array_new((0..64).collect()),
        heap.array_new(vec![i64::MIN, -1, i64::MAX]),
    ]
}

/// Allocates an assortment of tagged-object shapes, including nested and shared references.
pub fn sample_objects(heap: &mut ObjectHeap) -> Vec<ObjHandle> {
    let leaf = heap.object_new(scalars(&[5]));
    let wide = heap.object_new(scalars(&[1, 2, 3, 4]));
    let nested = heap.object_new(vec![ref_slot(2, leaf), Slot::Scalar(9)]);
    let shared = heap.object_new(vec![ref_slot(2, leaf), ref_slot(3, leaf)]);
    let deep = heap.object_new(vec![ref_slot(1, nested)]);
    vec![
        heap.object_new(vec![]),
        leaf,
        wide,
        nested,
        shared,
        deep,
    ]
}

/// Builds a chain of nested tagged objects `depth` levels deep, leaf first.
pub fn nested_chain(heap: &mut ObjectHeap, depth: usize, leaf_value: i64) -> ObjHandle {
    let mut h = heap.object_new(scalars(&[leaf_value]));
    for _ in 0..depth {
        h = heap.object_new(vec![ref_slot(1, h)]);
    }
    h
}
