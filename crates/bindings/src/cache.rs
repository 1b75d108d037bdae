//! Cache Python binding.
//!
//! Exposes `SetAssociativeCache` to Python: create from a config dict or a
//! byte capacity, issue accesses, complete misses with `fill`, and read back
//! eviction and statistics snapshots. Outcomes are returned as strings.

use nbcache_core::{CacheConfig, SetAssociativeCache};
use pyo3::exceptions::PyRuntimeError;
use pyo3::prelude::*;

use crate::conversion::{config_error, parse_access_type, py_dict_to_config};
use crate::line::PyCacheLine;
use crate::stats::PyStats;

/// Python-exposed non-blocking cache.
#[pyclass(name = "Cache")]
#[derive(Debug)]
pub struct PyCache {
    /// The wrapped cache model.
    pub inner: SetAssociativeCache,
}

#[pymethods]
impl PyCache {
    /// Creates a cache from a config dict; omitted keys take their defaults.
    ///
    /// # Errors
    ///
    /// `ValueError` if the dict is not a valid config, has zero ways or sets,
    /// or selects an unimplemented policy.
    #[new]
    #[pyo3(signature = (config_dict=None))]
    fn new(py: Python<'_>, config_dict: Option<&Bound<'_, PyAny>>) -> PyResult<Self> {
        let config = match config_dict {
            Some(dict) => py_dict_to_config(py, dict)?,
            None => CacheConfig::default(),
        };
        Self::build(&config)
    }

    /// Creates an LRU cache from associativity and total capacity in bytes.
    #[staticmethod]
    fn from_capacity(ways: usize, total_bytes: usize) -> PyResult<Self> {
        let config = CacheConfig::from_capacity(ways, total_bytes).map_err(config_error)?;
        Self::build(&config)
    }

    /// Performs an access: `"hit"`, `"hit_reserved"`, `"miss"`, or
    /// `"reservation_failed"`.
    ///
    /// # Arguments
    ///
    /// * `addr` - Byte address.
    /// * `access_type` - `"read"` or `"write"` (also `"r"`/`"w"`).
    /// * `origin` - Requester class stored in newly installed lines.
    #[pyo3(signature = (addr, access_type, origin=0))]
    fn access(&mut self, addr: u64, access_type: &str, origin: i32) -> PyResult<String> {
        let kind = parse_access_type(access_type)?;
        Ok(self.inner.access(addr, kind, origin).to_string())
    }

    /// Predicts `access` without changing any state.
    fn try_access(&self, addr: u64, access_type: &str) -> PyResult<String> {
        let kind = parse_access_type(access_type)?;
        Ok(self.inner.try_access(addr, kind).to_string())
    }

    /// Completes the outstanding read miss for `addr`'s block.
    ///
    /// # Errors
    ///
    /// `RuntimeError` if the block has no committed read miss.
    fn fill(&mut self, addr: u64) -> PyResult<()> {
        if !self.inner.is_pending(addr) {
            return Err(PyRuntimeError::new_err(format!(
                "{}: no outstanding miss for address {addr:#x}",
                self.inner.name()
            )));
        }
        self.inner.fill(addr);
        Ok(())
    }

    fn is_pending(&self, addr: u64) -> bool {
        self.inner.is_pending(addr)
    }

    fn is_clear(&self) -> bool {
        self.inner.is_clear()
    }

    #[getter]
    fn outstanding_misses(&self) -> usize {
        self.inner.outstanding_misses()
    }

    /// The line most recently displaced by a miss.
    fn last_evicted(&self) -> PyCacheLine {
        PyCacheLine {
            inner: self.inner.last_evicted(),
        }
    }

    /// Snapshot of the read/write statistics.
    fn stats(&self) -> PyStats {
        PyStats {
            inner: *self.inner.stats(),
        }
    }

    /// `(sets, ways)`.
    fn size(&self) -> (usize, usize) {
        self.inner.size()
    }

    #[getter]
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn __repr__(&self) -> String {
        let (sets, ways) = self.inner.size();
        format!(
            "Cache(name={:?}, sets={sets}, ways={ways}, outstanding_misses={})",
            self.inner.name(),
            self.inner.outstanding_misses()
        )
    }
}

impl PyCache {
    fn build(config: &CacheConfig) -> PyResult<Self> {
        let inner = SetAssociativeCache::new(config).map_err(config_error)?;
        Ok(Self { inner })
    }
}
