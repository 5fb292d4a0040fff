// Copyright 2026 the Compound Heap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dense word-image codec for compound objects.
//!
//! This is the layout contract shared with the code generator, kept explicit so the checked
//! heap can interoperate with word-addressed images: a flat array is `[n, w1..wn]` and a tagged
//! object is `[n, t1, p1, .., tn, pn]` (`1 + 2n` words). The payload word of a reference pair
//! carries the target handle.

use alloc::vec::Vec;

use core::fmt;

use crate::value::{ObjHandle, Slot, Tag};

/// A word-image decode error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageError {
    /// The image is shorter than its count word promises.
    UnexpectedEof,
    /// The count word was negative or out of range.
    BadCount,
    /// A nonzero-tag payload did not fit an object handle.
    BadReference,
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof => write!(f, "unexpected end of word image"),
            Self::BadCount => write!(f, "count word negative or out of range"),
            Self::BadReference => write!(f, "reference payload out of handle range"),
        }
    }
}

impl core::error::Error for ImageError {}

/// Writes a flat array's word image, count word first.
pub fn write_array_image(out: &mut Vec<i64>, words: &[i64]) {
    out.push(i64::try_from(words.len()).unwrap_or(i64::MAX));
    out.extend_from_slice(words);
}

/// Reads one flat-array image, updating `offset`.
pub fn read_array_image(words: &[i64], offset: &mut usize) -> Result<Vec<i64>, ImageError> {
    let n = read_count(words, offset, 1)?;
    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        out.push(read_word(words, offset)?);
    }
    Ok(out)
}

/// Writes a tagged object's word image, count word first.
///
/// A scalar pair writes tag word `0`; a reference pair writes its nonzero tag and the target
/// handle as the payload word.
pub fn write_object_image(out: &mut Vec<i64>, slots: &[Slot]) {
    out.push(i64::try_from(slots.len()).unwrap_or(i64::MAX));
    for slot in slots {
        match *slot {
            Slot::Scalar(value) => {
                out.push(0);
                out.push(value);
            }
            Slot::Ref { tag, target } => {
                out.push(tag.get());
                out.push(i64::from(target.0));
            }
        }
    }
}

/// Reads one tagged-object image, updating `offset`.
pub fn read_object_image(words: &[i64], offset: &mut usize) -> Result<Vec<Slot>, ImageError> {
    let n = read_count(words, offset, 2)?;
    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        let tag = read_word(words, offset)?;
        let payload = read_word(words, offset)?;
        match Tag::new(tag) {
            None => out.push(Slot::Scalar(payload)),
            Some(tag) => {
                let idx = u32::try_from(payload).map_err(|_| ImageError::BadReference)?;
                out.push(Slot::Ref {
                    tag,
                    target: ObjHandle(idx),
                });
            }
        }
    }
    Ok(out)
}

/// Reads and validates a count word against the words remaining in the image.
///
/// The count is untrusted input; checking it here keeps the element loops (and their
/// pre-allocation) bounded by the image that was actually supplied.
fn read_count(
    words: &[i64],
    offset: &mut usize,
    words_per_element: usize,
) -> Result<usize, ImageError> {
    let count = read_word(words, offset)?;
    let n = usize::try_from(count).map_err(|_| ImageError::BadCount)?;
    let remaining = words.len() - *offset;
    if n > remaining / words_per_element {
        return Err(ImageError::UnexpectedEof);
    }
    Ok(n)
}

fn read_word(words: &[i64], offset: &mut usize) -> Result<i64, ImageError> {
    let w = *words.get(*offset).ok_or(ImageError::UnexpectedEof)?;
    *offset += 1;
    Ok(w)
}
