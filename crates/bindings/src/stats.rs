//! Statistics Python binding.
//!
//! Exposes the read and write outcome counters to Python: getters per bucket,
//! a printable report, and `to_dict` for JSON-serializable export.

use nbcache_core::{CacheStats, Statistics};
use pyo3::prelude::*;
use pyo3::types::PyDict;

/// Outcome counters for one access type.
#[pyclass(name = "AccessStats", frozen)]
#[derive(Clone, Copy, Debug)]
pub struct PyAccessStats {
    /// The wrapped counters.
    pub inner: Statistics,
}

#[pymethods]
impl PyAccessStats {
    #[getter]
    fn hits(&self) -> u64 {
        self.inner.hits
    }
    #[getter]
    fn misses(&self) -> u64 {
        self.inner.misses
    }
    #[getter]
    fn hits_on_reserved(&self) -> u64 {
        self.inner.hits_on_reserved
    }
    #[getter]
    fn reservation_failures(&self) -> u64 {
        self.inner.reservation_failures
    }
    #[getter]
    fn accesses(&self) -> u64 {
        self.inner.accesses()
    }

    /// Hits over accepted accesses; reservation failures are excluded.
    #[getter]
    fn hit_rate(&self) -> f64 {
        self.inner.hit_rate()
    }

    /// Export the counters as a Python dict.
    fn to_dict<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        statistics_dict(py, &self.inner)
    }

    fn __repr__(&self) -> String {
        let s = &self.inner;
        format!(
            "AccessStats(hits={}, misses={}, hits_on_reserved={}, reservation_failures={})",
            s.hits, s.misses, s.hits_on_reserved, s.reservation_failures
        )
    }
}

/// Python-exposed statistics: a snapshot of a cache's `CacheStats`.
#[pyclass(name = "Stats", frozen)]
#[derive(Clone, Copy, Debug)]
pub struct PyStats {
    /// The wrapped statistics.
    pub inner: CacheStats,
}

#[pymethods]
impl PyStats {
    #[getter]
    fn read(&self) -> PyAccessStats {
        PyAccessStats {
            inner: self.inner.read,
        }
    }

    #[getter]
    fn write(&self) -> PyAccessStats {
        PyAccessStats {
            inner: self.inner.write,
        }
    }

    /// Both buckets summed.
    #[getter]
    fn total(&self) -> PyAccessStats {
        PyAccessStats {
            inner: self.inner.total(),
        }
    }

    /// Print the plain-text report.
    fn print(&self) {
        println!("{}", self.inner);
    }

    /// Export as `{"read": {...}, "write": {...}}`.
    fn to_dict<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let d = PyDict::new(py);
        d.set_item("read", statistics_dict(py, &self.inner.read)?)?;
        d.set_item("write", statistics_dict(py, &self.inner.write)?)?;
        Ok(d)
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }
}

fn statistics_dict<'py>(py: Python<'py>, s: &Statistics) -> PyResult<Bound<'py, PyDict>> {
    let d = PyDict::new(py);
    d.set_item("hits", s.hits)?;
    d.set_item("misses", s.misses)?;
    d.set_item("hits_on_reserved", s.hits_on_reserved)?;
    d.set_item("reservation_failures", s.reservation_failures)?;
    d.set_item("hit_rate", s.hit_rate())?;
    Ok(d)
}
