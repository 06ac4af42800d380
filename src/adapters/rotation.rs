//! # Rotation Strategies
//!
//! Three implementations of the [`Rotate`] port. They agree on every input;
//! they differ only in how the output buffer is filled.
//!
//! | Strategy    | Passes | Extra memory |
//! |-------------|--------|--------------|
//! | `BlockCopy` | 1      | output only  |
//! | `IndexMap`  | 1      | output only  |
//! | `InPlace`   | ~2     | output only  |

use crate::core::config::StrategyKind;
use crate::core::error::RotateError;
use crate::core::RotationCount;
use crate::ports::Rotate;

/// Moves `input[k..]` to the front, then `input[..k]` to the tail
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockCopy;

impl Rotate for BlockCopy {
    fn rotate(&self, input: &[i64], k: RotationCount) -> Result<Vec<i64>, RotateError> {
        let k = k.offset_for(input.len())?;

        let mut out = Vec::with_capacity(input.len());
        out.extend_from_slice(&input[k..]);
        out.extend_from_slice(&input[..k]);
        Ok(out)
    }

    fn name(&self) -> &'static str {
        "block-copy"
    }
}

/// Fills each slot from its source index, `out[i] = input[(i + k) % n]`
#[derive(Debug, Clone, Copy, Default)]
pub struct IndexMap;

impl Rotate for IndexMap {
    fn rotate(&self, input: &[i64], k: RotationCount) -> Result<Vec<i64>, RotateError> {
        let n = input.len();
        let k = k.offset_for(n)?;
        if n == 0 {
            return Ok(Vec::new());
        }

        Ok((0..n).map(|i| input[(i + k) % n]).collect())
    }

    fn name(&self) -> &'static str {
        "index-map"
    }
}

/// Copies the input, then rotates the copy in place
#[derive(Debug, Clone, Copy, Default)]
pub struct InPlace;

impl Rotate for InPlace {
    fn rotate(&self, input: &[i64], k: RotationCount) -> Result<Vec<i64>, RotateError> {
        let k = k.offset_for(input.len())?;

        let mut out = input.to_vec();
        out.rotate_left(k);
        Ok(out)
    }

    fn name(&self) -> &'static str {
        "in-place"
    }
}

/// Build the strategy named by `kind`
pub fn strategy(kind: StrategyKind) -> Box<dyn Rotate> {
    match kind {
        StrategyKind::BlockCopy => Box::new(BlockCopy),
        StrategyKind::IndexMap => Box::new(IndexMap),
        StrategyKind::InPlace => Box::new(InPlace),
    }
}
