//! # Engine
//!
//! The orchestration layer that wires everything together.
//!
//! This is where:
//! - Configuration is applied
//! - Adapters are connected to ports
//! - The read, rotate, write pipeline is exposed

mod rotator;

pub use rotator::Rotator;

use crate::adapters::rotation::BlockCopy;
use crate::core::error::RotateError;
use crate::core::policy::BoundsPolicy;
use crate::ports::Rotate;

/// Left-rotate `input` by `k`, rejecting `k > input.len()`
pub fn rotate(input: &[i64], k: usize) -> Result<Vec<i64>, RotateError> {
    // usize widens losslessly, so a rejected count is reported as given
    let k = BoundsPolicy::Reject.resolve(k as i128, input.len())?;
    BlockCopy.rotate(input, k)
}
