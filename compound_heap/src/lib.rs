// Copyright 2026 the Compound Heap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compound-value heap runtime for the compound compiler.
//!
//! This crate is the runtime support layer the code generator links against for operations on
//! compound values: flat arrays of scalar words and tagged objects of (tag, payload) pairs.
//! Both kinds live in a handle-addressed [`heap::ObjectHeap`] and support structural equality,
//! shallow cloning, and bulk fill. The dense count-prefixed layout shared with generated code
//! is kept explicit by the [`format`] codec, and compiler-inserted invariant checks lower to
//! [`invariant::assertion`].
//!
//! Execution is single-threaded and synchronous; the heap never reclaims objects, leaving
//! lifetimes to the surrounding compiler runtime. `no_std + alloc` friendly.

#![no_std]

extern crate alloc;

pub mod format;
pub mod heap;
pub mod invariant;
pub mod value;
