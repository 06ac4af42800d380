//! # left-rotation
//!
//! Left rotation of integer sequences: move the first `k` elements to the
//! end, keeping the order inside both blocks.
//!
//! ```text
//! Output[i] = Input[(i + k) mod n]
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       left-rotation                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │                                                              │
//! │  CORE (pure data, no I/O)                                   │
//! │    Sequence, RotationCount, Problem, BoundsPolicy, Config   │
//! │                                                              │
//! │  PORTS (trait contracts)                                     │
//! │    Rotate, Render                                           │
//! │                                                              │
//! │  ADAPTERS (swappable implementations)                       │
//! │    Rotation: BlockCopy, IndexMap, InPlace                   │
//! │    I/O: token parser, delimited renderer                    │
//! │    API: Python bindings                                      │
//! │                                                              │
//! │  ENGINE (orchestration)                                      │
//! │    Rotator - the main entry point                           │
//! │                                                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use left_rotation::{format_sequence, rotate, BoundsPolicy, RotateConfig, Rotator};
//!
//! let rotated = rotate(&[1, 2, 3, 4, 5], 2).unwrap();
//! assert_eq!(format_sequence(&rotated), "3 4 5 1 2");
//!
//! // Out-of-range counts are rejected unless another policy is chosen
//! let rotator = Rotator::new(RotateConfig::new().with_policy(BoundsPolicy::Wrap));
//! assert_eq!(rotator.rotate(&[1, 2, 3], 4).unwrap(), vec![2, 3, 1]);
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Core domain - pure data, no I/O
/// Contains: Sequence, RotationCount, Problem, BoundsPolicy, RotateConfig, errors
pub mod core;

/// Port definitions - trait contracts for adapters
/// Contains: Rotate trait, Render trait
pub mod ports;

/// Adapter implementations - swappable components
/// Contains: rotation, input, output, python submodules
pub mod adapters;

/// Engine - orchestration layer
/// Contains: Rotator main struct
pub mod engine;

// ============================================================================
// PYTHON BINDINGS (when enabled)
// ============================================================================

#[cfg(feature = "python")]
pub use adapters::python::*;

// ============================================================================
// RE-EXPORTS (public API)
// ============================================================================

// Core types
pub use crate::core::{Problem, RotationCount, Sequence};
pub use crate::core::config::{RotateConfig, StrategyKind};
pub use crate::core::error::{Error, ParseError, Result, RotateError};
pub use crate::core::policy::BoundsPolicy;

// Port traits
pub use crate::ports::{Render, Rotate};

// Adapters
pub use crate::adapters::input::{parse_problem, read_problem};
pub use crate::adapters::output::{format_sequence, SpaceSeparated};
pub use crate::adapters::rotation::{BlockCopy, InPlace, IndexMap};

// Engine
pub use crate::engine::{rotate, Rotator};
