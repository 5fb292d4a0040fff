// Copyright 2026 the Compound Heap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compound-object heap and the runtime primitives defined over it.
//!
//! Two object kinds share a count-prefixed layout: flat arrays of homogeneous scalar words and
//! tagged objects of (tag, payload) pairs. The code generator lowers comparison, duplication,
//! and bulk initialization of compound values to the `*_eq`, `*_clone`, and `*_fill` primitives
//! here.
//!
//! Objects are stored out-of-line in a `Vec`-backed arena owned by the runtime. Allocation
//! returns a stable [`ObjHandle`]; objects are never freed, and their count (the vector length)
//! is fixed at allocation. Ownership of allocated objects stays with the caller — there is no
//! reference counting or tracing collector.

use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashSet;

use crate::value::{ObjHandle, Slot};

/// A heap access error.
///
/// The raw word-addressed runtime leaves these conditions undefined; the checked representation
/// reports them instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeapError {
    /// Handle was out of bounds.
    BadHandle,
    /// Kind mismatch (e.g. a flat-array primitive applied to a tagged object).
    WrongKind,
    /// Element index out of bounds.
    OutOfBounds,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadHandle => write!(f, "object handle out of bounds"),
            Self::WrongKind => write!(f, "object kind mismatch"),
            Self::OutOfBounds => write!(f, "element index out of bounds"),
        }
    }
}

impl core::error::Error for HeapError {}

/// A heap node storing one compound object.
///
/// The count header word of the dense layout is the vector length, so the count always matches
/// the number of reachable slots and cannot be overwritten.
#[derive(Clone, Debug, PartialEq)]
enum ObjNode {
    /// Flat array: `count` scalar payload words, no tags.
    Array { words: Vec<i64> },
    /// Tagged object: `count` (tag, payload) pairs.
    Object { slots: Vec<Slot> },
}

/// The compound-object heap.
///
/// Plays the allocator role of the surrounding compiler runtime: objects are created here with
/// their header already in place and stay live for the heap's lifetime.
#[derive(Clone, Debug, Default)]
pub struct ObjectHeap {
    nodes: Vec<ObjNode>,
}

impl ObjectHeap {
    /// Creates an empty heap.
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Allocates a flat array with the given payload words.
    pub fn array_new(&mut self, words: Vec<i64>) -> ObjHandle {
        self.push(ObjNode::Array { words })
    }

    /// Allocates a tagged object with the given pairs.
    pub fn object_new(&mut self, slots: Vec<Slot>) -> ObjHandle {
        self.push(ObjNode::Object { slots })
    }

    /// Returns a flat array's element count.
    pub fn array_len(&self, arr: ObjHandle) -> Result<usize, HeapError> {
        Ok(self.array_words(arr)?.len())
    }

    /// Returns flat-array element `index`.
    pub fn array_get(&self, arr: ObjHandle, index: usize) -> Result<i64, HeapError> {
        self.array_words(arr)?
            .get(index)
            .copied()
            .ok_or(HeapError::OutOfBounds)
    }

    /// Returns a tagged object's pair count.
    pub fn object_len(&self, obj: ObjHandle) -> Result<usize, HeapError> {
        Ok(self.object_slots(obj)?.len())
    }

    /// Returns tagged-object pair `index`.
    pub fn object_get(&self, obj: ObjHandle, index: usize) -> Result<Slot, HeapError> {
        self.object_slots(obj)?
            .get(index)
            .copied()
            .ok_or(HeapError::OutOfBounds)
    }

    /// Compares two flat arrays element-wise.
    ///
    /// A count mismatch fails the comparison immediately; otherwise the scan runs in index
    /// order and stops at the first differing payload word. Pure value equality, no recursion.
    pub fn array_eq(&self, a: ObjHandle, b: ObjHandle) -> Result<bool, HeapError> {
        let wa = self.array_words(a)?;
        let wb = self.array_words(b)?;
        if wa.len() != wb.len() {
            return Ok(false);
        }
        Ok(wa.iter().zip(wb.iter()).all(|(x, y)| x == y))
    }

    /// Shallow-clones a flat array into fresh storage and returns the new handle.
    pub fn array_clone(&mut self, arr: ObjHandle) -> Result<ObjHandle, HeapError> {
        let words = self.array_words(arr)?.to_vec();
        Ok(self.push(ObjNode::Array { words }))
    }

    /// Overwrites every payload word of a flat array with `value`.
    ///
    /// The count is untouched; the effect is observed only through subsequent reads.
    pub fn array_fill(&mut self, arr: ObjHandle, value: i64) -> Result<(), HeapError> {
        match self.node_mut(arr)? {
            ObjNode::Array { words } => {
                words.fill(value);
                Ok(())
            }
            ObjNode::Object { .. } => Err(HeapError::WrongKind),
        }
    }

    /// Compares two tagged objects structurally.
    ///
    /// A count mismatch fails immediately. Otherwise pairs are scanned in index order:
    ///
    /// 1. Bitwise-equal payloads match regardless of tags (equal scalars, or a
    ///    pointer-identical reference on both sides).
    /// 2. Differing tags — including scalar vs. reference, whose wire tags are `0` and
    ///    nonzero — or a raw mismatch under the shared scalar tag fail the pair.
    /// 3. Equal nonzero tags with differing targets recurse into the referenced objects.
    ///
    /// Depth-first and short-circuiting. Reference pairs already under comparison further up
    /// the stack are assumed equal, so the scan terminates on cyclic object graphs instead of
    /// exhausting the stack; a genuine mismatch elsewhere still fails the outer comparison.
    pub fn object_eq(&self, a: ObjHandle, b: ObjHandle) -> Result<bool, HeapError> {
        let mut visiting = HashSet::new();
        self.object_eq_rec(a, b, &mut visiting)
    }

    fn object_eq_rec(
        &self,
        a: ObjHandle,
        b: ObjHandle,
        visiting: &mut HashSet<(ObjHandle, ObjHandle)>,
    ) -> Result<bool, HeapError> {
        let sa = self.object_slots(a)?;
        let sb = self.object_slots(b)?;
        if sa.len() != sb.len() {
            return Ok(false);
        }
        if !visiting.insert((a, b)) {
            return Ok(true);
        }
        for (x, y) in sa.iter().zip(sb.iter()) {
            let eq = match (*x, *y) {
                (Slot::Scalar(p), Slot::Scalar(q)) => p == q,
                (
                    Slot::Ref {
                        tag: ta,
                        target: ha,
                    },
                    Slot::Ref {
                        tag: tb,
                        target: hb,
                    },
                ) => {
                    if ha == hb {
                        // Identical reference; tags are not consulted.
                        true
                    } else if ta != tb {
                        false
                    } else {
                        self.object_eq_rec(ha, hb, visiting)?
                    }
                }
                // Scalar vs. reference: wire tags differ, no recursion.
                _ => false,
            };
            if !eq {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Shallow-clones a tagged object into fresh storage and returns the new handle.
    ///
    /// Reference slots are copied as handles: the clone and the original share any nested
    /// sub-objects. Generated code may rely on that shared identity, so this is never a deep
    /// copy.
    pub fn object_clone(&mut self, obj: ObjHandle) -> Result<ObjHandle, HeapError> {
        let slots = self.object_slots(obj)?.to_vec();
        Ok(self.push(ObjNode::Object { slots }))
    }

    /// Overwrites every pair of a tagged object with `slot`.
    ///
    /// The checked rendering of the raw `(tag, value)` argument pair; the count is untouched.
    pub fn object_fill(&mut self, obj: ObjHandle, slot: Slot) -> Result<(), HeapError> {
        match self.node_mut(obj)? {
            ObjNode::Object { slots } => {
                slots.fill(slot);
                Ok(())
            }
            ObjNode::Array { .. } => Err(HeapError::WrongKind),
        }
    }

    fn array_words(&self, h: ObjHandle) -> Result<&[i64], HeapError> {
        match self.node(h)? {
            ObjNode::Array { words } => Ok(words),
            ObjNode::Object { .. } => Err(HeapError::WrongKind),
        }
    }

    fn object_slots(&self, h: ObjHandle) -> Result<&[Slot], HeapError> {
        match self.node(h)? {
            ObjNode::Object { slots } => Ok(slots),
            ObjNode::Array { .. } => Err(HeapError::WrongKind),
        }
    }

    fn push(&mut self, node: ObjNode) -> ObjHandle {
        let idx = u32::try_from(self.nodes.len()).unwrap_or(u32::MAX);
        self.nodes.push(node);
        ObjHandle(idx)
    }

    fn node(&self, handle: ObjHandle) -> Result<&ObjNode, HeapError> {
        self.nodes.get(handle.0 as usize).ok_or(HeapError::BadHandle)
    }

    fn node_mut(&mut self, handle: ObjHandle) -> Result<&mut ObjNode, HeapError> {
        self.nodes
            .get_mut(handle.0 as usize)
            .ok_or(HeapError::BadHandle)
    }
}
