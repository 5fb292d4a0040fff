// Copyright 2026 the Compound Heap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interop between the checked heap and the dense word-image layout.

use compound_heap::format::{
    read_array_image, read_object_image, write_array_image, write_object_image,
};
use compound_heap::heap::ObjectHeap;
use compound_heap::value::Slot;
use compound_heap_conformance::{ref_slot, scalars};

#[test]
fn object_rebuilt_from_its_image_compares_equal() {
    let mut h = ObjectHeap::new();
    let leaf = h.object_new(scalars(&[5]));
    let obj = h.object_new(vec![ref_slot(2, leaf), Slot::Scalar(9)]);

    let pairs = [h.object_get(obj, 0).unwrap(), h.object_get(obj, 1).unwrap()];
    let mut image = Vec::new();
    write_object_image(&mut image, &pairs);
    // 1 + 2n words.
    assert_eq!(image.len(), 5);

    let mut off = 0;
    let slots = read_object_image(&image, &mut off).unwrap();
    let rebuilt = h.object_new(slots);
    assert_eq!(h.object_eq(obj, rebuilt), Ok(true));
}

#[test]
fn array_rebuilt_from_its_image_compares_equal() {
    let mut h = ObjectHeap::new();
    let arr = h.array_new(vec![1, 2, 3]);

    let mut image = Vec::new();
    write_array_image(&mut image, &[1, 2, 3]);
    assert_eq!(image, vec![3, 1, 2, 3]);

    let mut off = 0;
    let rebuilt = h.array_new(read_array_image(&image, &mut off).unwrap());
    assert_eq!(h.array_eq(arr, rebuilt), Ok(true));
}

#[test]
fn consecutive_images_share_a_cursor() {
    let mut image = Vec::new();
    write_array_image(&mut image, &[1]);
    write_array_image(&mut image, &[2, 3]);

    let mut off = 0;
    assert_eq!(read_array_image(&image, &mut off), Ok(vec![1]));
    assert_eq!(read_array_image(&image, &mut off), Ok(vec![2, 3]));
    assert_eq!(off, image.len());
}
