//! # Ports
//!
//! Trait contracts the engine talks to. Adapters implement them.
//!
//! - [`Rotate`]: produce a left-rotated copy of a slice
//! - [`Render`]: turn a slice into output text

use crate::core::error::RotateError;
use crate::core::RotationCount;

/// A left-rotation strategy
///
/// Implementations must return a new vector `out` of the same length with
/// `out[i] == input[(i + k) % n]`, and must leave `input` untouched. A count
/// resolved for a different length is refused with
/// [`RotateError::LengthMismatch`].
pub trait Rotate {
    /// Rotate `input` left by `k`
    ///
    /// `k` must have been resolved against `input.len()`.
    fn rotate(&self, input: &[i64], k: RotationCount) -> Result<Vec<i64>, RotateError>;

    /// Short name used in logs and benchmarks
    fn name(&self) -> &'static str;
}

/// An output format for a sequence
pub trait Render {
    /// Render the whole sequence as text, without a trailing newline
    fn render(&self, values: &[i64]) -> String;
}
