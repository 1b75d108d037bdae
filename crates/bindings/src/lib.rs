//! Python bindings for the non-blocking cache model.
//!
//! This crate exposes the cache to Python via PyO3. It provides:
//! 1. **Cache:** `PyCache` for configuration, access, fill, and eviction queries.
//! 2. **Lines and statistics:** `PyCacheLine` and `PyStats` snapshots.
//! 3. **Utilities:** Version string, log setup, and dict-to-config conversion.

use pyo3::prelude::*;

/// `PyCache` binding.
pub mod cache;
/// Python dict to Rust `CacheConfig` conversion.
pub mod conversion;
/// `PyCacheLine` binding.
pub mod line;
/// Statistics binding (`PyStats`).
pub mod stats;
/// Utility functions (version, logging).
pub mod utils;

/// Registers all cache classes and functions onto the given Python module.
///
/// # Arguments
///
/// * `m` - The Python module to register types and functions on.
///
/// # Returns
///
/// `Ok(())` on success, or a `PyErr` if registration fails.
pub fn register_cache_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<cache::PyCache>()?;
    m.add_class::<line::PyCacheLine>()?;
    m.add_class::<stats::PyStats>()?;
    m.add_class::<stats::PyAccessStats>()?;

    m.add_function(wrap_pyfunction!(utils::version, m)?)?;
    m.add_function(wrap_pyfunction!(utils::init_logging, m)?)?;

    Ok(())
}

#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    register_cache_module(m)
}
