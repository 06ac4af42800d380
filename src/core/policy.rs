//! # Bounds Policy
//!
//! Decides what a requested rotation count means when it falls outside
//! `0..=len`. Resolution happens once, before any strategy runs, so a
//! [`RotationCount`] handed to a strategy is always in range.

use super::error::RotateError;
use super::RotationCount;

/// How out-of-range rotation counts are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundsPolicy {
    /// Fail with [`RotateError::CountOutOfRange`]
    #[default]
    Reject,
    /// Reduce modulo the length; negative counts rotate right
    Wrap,
    /// Saturate into `0..=len`
    Clamp,
}

impl BoundsPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoundsPolicy::Reject => "reject",
            BoundsPolicy::Wrap => "wrap",
            BoundsPolicy::Clamp => "clamp",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "reject" | "strict" => Some(BoundsPolicy::Reject),
            "wrap" | "mod" | "modulo" => Some(BoundsPolicy::Wrap),
            "clamp" | "saturate" => Some(BoundsPolicy::Clamp),
            _ => None,
        }
    }

    /// Turn a requested count into one that is valid for `len`
    pub fn resolve(&self, count: i128, len: usize) -> Result<RotationCount, RotateError> {
        if let Some(valid) = in_range(count, len) {
            return Ok(RotationCount::new_unchecked(valid, len));
        }

        match self {
            BoundsPolicy::Reject => Err(RotateError::CountOutOfRange { count, len }),
            BoundsPolicy::Wrap => {
                if len == 0 {
                    return Ok(RotationCount::zero(0));
                }
                // usize always fits in i128, and the remainder is below len
                let wrapped = count.rem_euclid(len as i128) as usize;
                Ok(RotationCount::new_unchecked(wrapped, len))
            }
            BoundsPolicy::Clamp => {
                let clamped = if count < 0 { 0 } else { len };
                Ok(RotationCount::new_unchecked(clamped, len))
            }
        }
    }
}

impl std::fmt::Display for BoundsPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn in_range(count: i128, len: usize) -> Option<usize> {
    let count = usize::try_from(count).ok()?;
    (count <= len).then_some(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range_counts_pass_through_every_policy() {
        for policy in [BoundsPolicy::Reject, BoundsPolicy::Wrap, BoundsPolicy::Clamp] {
            assert_eq!(policy.resolve(0, 5).unwrap().get(), 0);
            assert_eq!(policy.resolve(2, 5).unwrap().get(), 2);
            assert_eq!(policy.resolve(5, 5).unwrap().get(), 5);
            assert_eq!(policy.resolve(2, 5).unwrap().seq_len(), 5);
        }
    }

    #[test]
    fn test_reject_out_of_range() {
        let err = BoundsPolicy::Reject.resolve(6, 5).unwrap_err();
        assert_eq!(err, RotateError::CountOutOfRange { count: 6, len: 5 });

        let err = BoundsPolicy::Reject.resolve(-1, 5).unwrap_err();
        assert_eq!(err, RotateError::CountOutOfRange { count: -1, len: 5 });
    }

    #[test]
    fn test_wrap() {
        assert_eq!(BoundsPolicy::Wrap.resolve(7, 5).unwrap().get(), 2);
        // -1 left is 1 right, i.e. 4 left
        assert_eq!(BoundsPolicy::Wrap.resolve(-1, 5).unwrap().get(), 4);
        assert_eq!(BoundsPolicy::Wrap.resolve(i128::MIN, 3).unwrap().get(), 1);
        assert_eq!(BoundsPolicy::Wrap.resolve(99_999_999_999_999_999_999, 3).unwrap().get(), 0);
        assert_eq!(BoundsPolicy::Wrap.resolve(9, 0).unwrap().get(), 0);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(BoundsPolicy::Clamp.resolve(7, 5).unwrap().get(), 5);
        assert_eq!(BoundsPolicy::Clamp.resolve(-3, 5).unwrap().get(), 0);
        assert_eq!(BoundsPolicy::Clamp.resolve(1, 0).unwrap().get(), 0);
    }

    #[test]
    fn test_policy_names_roundtrip() {
        for policy in [BoundsPolicy::Reject, BoundsPolicy::Wrap, BoundsPolicy::Clamp] {
            assert_eq!(BoundsPolicy::from_str(policy.as_str()), Some(policy));
        }
        assert_eq!(BoundsPolicy::from_str("MODULO"), Some(BoundsPolicy::Wrap));
        assert_eq!(BoundsPolicy::from_str("bogus"), None);
    }
}
