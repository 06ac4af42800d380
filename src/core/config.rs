//! # Configuration
//!
//! Everything about a rotation run that is a choice rather than input data.

use super::policy::BoundsPolicy;

/// Which rotation strategy the engine should use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyKind {
    /// Copy the two blocks into a fresh buffer
    #[default]
    BlockCopy,
    /// Closed form `out[i] = in[(i + k) % n]`
    IndexMap,
    /// Rotate an owned copy in place
    InPlace,
}

impl StrategyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::BlockCopy => "block-copy",
            StrategyKind::IndexMap => "index-map",
            StrategyKind::InPlace => "in-place",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "block-copy" | "copy" => Some(StrategyKind::BlockCopy),
            "index-map" | "index" => Some(StrategyKind::IndexMap),
            "in-place" | "inplace" => Some(StrategyKind::InPlace),
            _ => None,
        }
    }
}

/// Configuration for a [`Rotator`](crate::engine::Rotator)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotateConfig {
    /// What to do with counts outside `0..=n`
    pub policy: BoundsPolicy,

    /// Rotation algorithm
    pub strategy: StrategyKind,

    /// Text placed between rendered elements
    pub separator: String,
}

impl RotateConfig {
    /// Default configuration: reject, block copy, single space
    pub fn new() -> Self {
        Self {
            policy: BoundsPolicy::default(),
            strategy: StrategyKind::default(),
            separator: " ".to_string(),
        }
    }

    pub fn with_policy(mut self, policy: BoundsPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}

impl Default for RotateConfig {
    fn default() -> Self {
        Self::new()
    }
}
