//! # Output Adapter
//!
//! Implements the [`Render`] port as plain delimited text.

use crate::ports::Render;

/// Decimal values joined by a separator, no trailing separator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpaceSeparated {
    separator: String,
}

impl SpaceSeparated {
    /// Single-space separator
    pub fn new() -> Self {
        Self::with_separator(" ")
    }

    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }
}

impl Default for SpaceSeparated {
    fn default() -> Self {
        Self::new()
    }
}

impl Render for SpaceSeparated {
    fn render(&self, values: &[i64]) -> String {
        values
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(&self.separator)
    }
}

/// Render with a single space
pub fn format_sequence(values: &[i64]) -> String {
    SpaceSeparated::new().render(values)
}
