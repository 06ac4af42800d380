//! # Rotator Engine
//!
//! The main orchestrator.
//!
//! This struct wires together:
//! - Rotation strategy (Rotate port)
//! - Output format (Render port)
//! - Configuration (bounds policy, separator)
//!
//! And runs the read, rotate, write pipeline.

use std::io::{Read, Write};

use tracing::{debug, warn};

use crate::adapters::input::read_problem;
use crate::adapters::output::SpaceSeparated;
use crate::adapters::rotation::strategy;
use crate::core::config::RotateConfig;
use crate::core::error::{Result, RotateError};
use crate::core::{Problem, RotationCount};
use crate::ports::{Render, Rotate};

/// The main rotation engine
pub struct Rotator {
    /// Configuration
    config: RotateConfig,

    /// Rotation backend (Rotate port)
    strategy: Box<dyn Rotate>,

    /// Output backend (Render port)
    renderer: Box<dyn Render>,
}

impl Rotator {
    /// Create a rotator with the adapters named by `config`
    pub fn new(config: RotateConfig) -> Self {
        let strategy = strategy(config.strategy);
        let renderer = Box::new(SpaceSeparated::with_separator(config.separator.clone()));

        Self {
            config,
            strategy,
            renderer,
        }
    }

    /// Create with custom adapters
    ///
    /// `config.strategy` and `config.separator` are not consulted.
    pub fn with_adapters(
        config: RotateConfig,
        strategy: Box<dyn Rotate>,
        renderer: Box<dyn Render>,
    ) -> Self {
        Self {
            config,
            strategy,
            renderer,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &RotateConfig {
        &self.config
    }

    /// Name of the active strategy
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    // ========================================================================
    // ROTATE OPERATIONS
    // ========================================================================

    /// Apply the bounds policy to a requested count
    pub fn resolve(&self, count: i128, len: usize) -> std::result::Result<RotationCount, RotateError> {
        let resolved = self.config.policy.resolve(count, len)?;

        if resolved.get() as i128 != count {
            warn!(
                requested = count,
                resolved = resolved.get(),
                len,
                policy = %self.config.policy,
                "rotation count adjusted"
            );
        }

        Ok(resolved)
    }

    /// Rotate `input` left by `count`, after resolving `count`
    pub fn rotate(&self, input: &[i64], count: i128) -> std::result::Result<Vec<i64>, RotateError> {
        let k = self.resolve(count, input.len())?;
        debug!(n = input.len(), k = k.get(), strategy = self.strategy.name(), "rotating");
        self.strategy.rotate(input, k)
    }

    /// Rotate a parsed problem
    pub fn solve(&self, problem: &Problem) -> std::result::Result<Vec<i64>, RotateError> {
        self.rotate(problem.sequence.as_slice(), problem.count)
    }

    // ========================================================================
    // I/O
    // ========================================================================

    /// Render a sequence with the configured output format
    pub fn render(&self, values: &[i64]) -> String {
        self.renderer.render(values)
    }

    /// Read a problem, rotate it, and write the result followed by a newline
    pub fn run<R: Read, W: Write>(&self, reader: R, mut writer: W) -> Result<()> {
        let problem = read_problem(reader)?;
        let rotated = self.solve(&problem)?;

        writeln!(writer, "{}", self.render(&rotated))?;
        writer.flush()?;

        Ok(())
    }
}

impl Default for Rotator {
    fn default() -> Self {
        Self::new(RotateConfig::default())
    }
}
