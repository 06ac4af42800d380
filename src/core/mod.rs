//! # Core
//!
//! Pure data and rules. No I/O happens here.
//!
//! - [`Sequence`]: the input array, immutable once read
//! - [`RotationCount`]: a count already known to be within `0..=n`
//! - [`Problem`]: a sequence plus the count that was asked for
//! - [`BoundsPolicy`](policy::BoundsPolicy): how a requested count becomes a [`RotationCount`]

pub mod config;
pub mod error;
pub mod policy;

use error::RotateError;

/// An ordered sequence of integers
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sequence {
    values: Vec<i64>,
}

impl Sequence {
    pub fn new(values: Vec<i64>) -> Self {
        Self { values }
    }

    pub fn empty() -> Self {
        Self { values: Vec::new() }
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.values
    }

    pub fn seq_len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn into_vec(self) -> Vec<i64> {
        self.values
    }
}

impl From<Vec<i64>> for Sequence {
    fn from(values: Vec<i64>) -> Self {
        Self::new(values)
    }
}

impl AsRef<[i64]> for Sequence {
    fn as_ref(&self) -> &[i64] {
        &self.values
    }
}

/// Number of positions to shift left, bound to the length it was resolved against
///
/// Only [`BoundsPolicy::resolve`](policy::BoundsPolicy::resolve) and
/// [`RotationCount::checked`] produce one, so `get() <= len()` always holds.
/// Strategies go through [`RotationCount::offset_for`], which refuses a
/// sequence of any other length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RotationCount {
    offset: usize,
    len: usize,
}

impl RotationCount {
    /// Zero shift for a sequence of `len` elements
    pub fn zero(len: usize) -> Self {
        Self { offset: 0, len }
    }

    /// `Some` when `k <= len`
    pub fn checked(k: usize, len: usize) -> Option<Self> {
        (k <= len).then_some(Self { offset: k, len })
    }

    pub(crate) fn new_unchecked(k: usize, len: usize) -> Self {
        debug_assert!(k <= len);
        Self { offset: k, len }
    }

    pub fn get(&self) -> usize {
        self.offset
    }

    /// Length this count was resolved against
    pub fn seq_len(&self) -> usize {
        self.len
    }

    /// The offset, if this count was resolved for a sequence of `len` elements
    pub fn offset_for(&self, len: usize) -> Result<usize, RotateError> {
        if len != self.len {
            return Err(RotateError::LengthMismatch {
                expected: self.len,
                got: len,
            });
        }
        Ok(self.offset)
    }
}

/// A parsed request: rotate `sequence` left by `count`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub sequence: Sequence,

    /// Count as read; may still be out of range
    pub count: i128,
}

impl Problem {
    pub fn new(sequence: impl Into<Sequence>, count: i128) -> Self {
        Self {
            sequence: sequence.into(),
            count,
        }
    }
}
