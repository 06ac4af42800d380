//! # Python Bindings
//!
//! PyO3 bindings for left-rotation.
//!
//! ## Python API
//!
//! ```python
//! from left_rotation import Rotator, rotate, format_sequence
//!
//! rotate([1, 2, 3, 4, 5], 2)               # [3, 4, 5, 1, 2]
//! rotate([1, 2, 3], 4, policy="wrap")      # [2, 3, 1]
//!
//! r = Rotator(policy="clamp", strategy="in-place")
//! r.rotate([1, 2, 3], 9)                   # [1, 2, 3]
//! r.render([3, 4, 5, 1, 2])                # "3 4 5 1 2"
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::adapters::output;
use crate::core::config::{RotateConfig, StrategyKind};
use crate::core::policy::BoundsPolicy;
use crate::engine::Rotator as RustRotator;

/// Python wrapper for the rotation engine
#[pyclass(name = "Rotator", unsendable)]
pub struct PyRotator {
    inner: RustRotator,
}

#[pymethods]
impl PyRotator {
    /// Create a rotator
    ///
    /// Args:
    ///     policy: "reject" (default), "wrap" or "clamp"
    ///     strategy: "block-copy" (default), "index-map" or "in-place"
    ///     separator: text between rendered values (default " ")
    #[new]
    #[pyo3(signature = (policy = "reject", strategy = "block-copy", separator = " "))]
    fn new(policy: &str, strategy: &str, separator: &str) -> PyResult<Self> {
        let config = RotateConfig::new()
            .with_policy(parse_policy(policy)?)
            .with_strategy(parse_strategy(strategy)?)
            .with_separator(separator);

        Ok(Self {
            inner: RustRotator::new(config),
        })
    }

    /// Rotate `values` left by `k`
    ///
    /// Raises:
    ///     ValueError: if `k` is out of range under the reject policy
    fn rotate(&self, values: Vec<i64>, k: i64) -> PyResult<Vec<i64>> {
        self.inner
            .rotate(&values, k.into())
            .map_err(|e| PyValueError::new_err(format!("{}", e)))
    }

    /// Render `values` with the configured separator
    fn render(&self, values: Vec<i64>) -> String {
        self.inner.render(&values)
    }

    fn __repr__(&self) -> String {
        let config = self.inner.config();
        format!(
            "Rotator(policy='{}', strategy='{}', separator={:?})",
            config.policy,
            config.strategy.as_str(),
            config.separator
        )
    }
}

/// Rotate `values` left by `k` with the default strategy
#[pyfunction]
#[pyo3(signature = (values, k, policy = "reject"))]
fn rotate(values: Vec<i64>, k: i64, policy: &str) -> PyResult<Vec<i64>> {
    let rotator = RustRotator::new(RotateConfig::new().with_policy(parse_policy(policy)?));
    rotator
        .rotate(&values, k)
        .map_err(|e| PyValueError::new_err(format!("{}", e)))
}

/// Join `values` with single spaces
#[pyfunction]
fn format_sequence(values: Vec<i64>) -> String {
    output::format_sequence(&values)
}

fn parse_policy(name: &str) -> PyResult<BoundsPolicy> {
    BoundsPolicy::from_str(name)
        .ok_or_else(|| PyValueError::new_err(format!("Unknown policy: {}", name)))
}

fn parse_strategy(name: &str) -> PyResult<StrategyKind> {
    StrategyKind::from_str(name)
        .ok_or_else(|| PyValueError::new_err(format!("Unknown strategy: {}", name)))
}

/// left-rotation Python module
#[pymodule]
fn left_rotation(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyRotator>()?;
    m.add_function(wrap_pyfunction!(rotate, m)?)?;
    m.add_function(wrap_pyfunction!(format_sequence, m)?)?;

    m.add("__doc__", "left-rotation: left rotation of integer sequences")?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
