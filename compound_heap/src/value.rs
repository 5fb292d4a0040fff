// Copyright 2026 the Compound Heap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Checked value model for compound objects.
//!
//! The generated-code layout is untyped: a storage word is an `i64` that may hold either a
//! scalar or a reinterpreted address, distinguished only by the tag word that precedes it in a
//! tagged object. This module is the checked rendering of that contract: references carry an
//! explicit [`ObjHandle`] and the zero/nonzero tag split becomes the two [`Slot`] variants.
//! The dense layout itself is preserved by the [`format`](crate::format) codec.

use core::num::NonZeroI64;

/// Handle to an object stored in an [`ObjectHeap`](crate::heap::ObjectHeap).
///
/// Handles play the role of addresses in the raw layout. They are never invalidated: the heap
/// does not reclaim objects.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ObjHandle(pub u32);

/// The nonzero wire tag carried by a reference slot.
///
/// Tag `0` marks a scalar payload and is therefore not representable here; it corresponds to
/// [`Slot::Scalar`]. Nonzero tag values are opaque to the runtime primitives — they are a type
/// discriminant meaningful only to other compiler-emitted code.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tag(NonZeroI64);

impl Tag {
    /// Creates a tag from its wire value, rejecting the scalar marker `0`.
    #[must_use]
    pub fn new(value: i64) -> Option<Self> {
        NonZeroI64::new(value).map(Self)
    }

    /// Returns the wire value of this tag.
    #[must_use]
    pub fn get(self) -> i64 {
        self.0.get()
    }
}

/// One (tag, payload) pair of a tagged object, in checked form.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    /// A plain scalar payload (wire tag `0`), compared by raw value only.
    Scalar(i64),
    /// A reference to a nested tagged object (nonzero wire tag).
    Ref {
        /// Type discriminant, not interpreted by the runtime primitives.
        tag: Tag,
        /// The referenced object.
        target: ObjHandle,
    },
}
