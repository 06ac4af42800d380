//! # Errors
//!
//! Every failure the crate can report. Parsing and rotation each get their
//! own enum; [`Error`] unifies them for callers that drive the whole pipeline.

use thiserror::Error;

/// Errors raised while reading a problem from text
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input ended before the named field was read
    #[error("unexpected end of input: missing {0}")]
    MissingField(&'static str),

    /// A token could not be read as an integer
    #[error("token {position} ({token:?}) is not an integer")]
    InvalidInteger { position: usize, token: String },

    /// An integer token too large for its field
    #[error("token {position} ({token:?}) does not fit in a {bits}-bit integer")]
    IntegerOverflow {
        position: usize,
        token: String,
        bits: u32,
    },

    /// Declared length is negative
    #[error("sequence length must be non-negative, got {0}")]
    NegativeLength(i128),

    /// Fewer elements than the declared length
    #[error("expected {expected} elements, got {got}")]
    MissingElements { expected: usize, got: usize },
}

/// Errors raised while resolving or applying a rotation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RotateError {
    /// Requested count falls outside `0..=len` under the reject policy
    #[error("rotation count {count} is out of range for a sequence of length {len}")]
    CountOutOfRange { count: i128, len: usize },

    /// A count resolved for one length was applied to a sequence of another
    #[error("rotation count was resolved for length {expected}, not {got}")]
    LengthMismatch { expected: usize, got: usize },
}

/// Top-level error for the read, rotate, write pipeline
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Rotate(#[from] RotateError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;
