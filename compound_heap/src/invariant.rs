// Copyright 2026 the Compound Heap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runtime assertion primitive.
//!
//! The compiler lowers language-level `assert` statements and its own inserted safety checks
//! (array bounds, non-null checks) to [`assertion`]. The condition is evaluated by generated
//! code before the call; a falsy value is an unrecoverable fault, surfaced as a panic. Callers
//! never observe or recover from it.

#[cold]
#[inline(never)]
#[track_caller]
fn violation() -> ! {
    panic!("compound runtime: assertion failed");
}

/// Checks a compiler-emitted boolean (`0` = false, nonzero = true).
///
/// A no-op when the condition holds; otherwise diverges with a diagnostic carrying the caller's
/// source location.
#[inline]
#[track_caller]
pub fn assertion(condition: i64) {
    if condition == 0 {
        violation();
    }
}
