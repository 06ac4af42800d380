//! # Adapters
//!
//! Swappable implementations of port traits, plus the text I/O at the edges.
//!
//! - Rotation strategies: BlockCopy, IndexMap, InPlace
//! - Input: token parser for `n k` followed by the elements
//! - Output: delimited text renderer
//! - Python bindings (when enabled)

pub mod rotation;
pub mod input;
pub mod output;

#[cfg(feature = "python")]
pub mod python;
