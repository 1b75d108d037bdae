//! Utility functions exposed to Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use tracing_subscriber::EnvFilter;

/// Returns the package version string.
#[pyfunction]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Routes the cache's `tracing` output to stderr.
///
/// `filter` uses `RUST_LOG` syntax (e.g. `"nbcache_core=debug"`). When omitted,
/// `RUST_LOG` is read from the environment. Calling this more than once keeps
/// the first subscriber.
///
/// # Errors
///
/// `ValueError` if `filter` is not a valid directive string.
#[pyfunction]
#[pyo3(signature = (filter=None))]
pub fn init_logging(filter: Option<&str>) -> PyResult<()> {
    let filter = match filter {
        Some(directives) => {
            EnvFilter::try_new(directives).map_err(|e| PyValueError::new_err(e.to_string()))?
        }
        None => EnvFilter::from_default_env(),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
    Ok(())
}
