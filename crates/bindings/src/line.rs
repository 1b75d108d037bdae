//! Cache line Python binding.

use nbcache_core::{CacheLine, LineStatus};
use pyo3::prelude::*;

/// Snapshot of one cache line, as returned by `Cache.last_evicted()`.
#[pyclass(name = "CacheLine", frozen)]
#[derive(Clone, Copy, Debug)]
pub struct PyCacheLine {
    /// The wrapped line value.
    pub inner: CacheLine,
}

#[pymethods]
impl PyCacheLine {
    /// `"invalid"`, `"valid"`, or `"reserved"`.
    #[getter]
    fn status(&self) -> &'static str {
        match self.inner.status() {
            LineStatus::Invalid => "invalid",
            LineStatus::Valid => "valid",
            LineStatus::Reserved => "reserved",
        }
    }

    /// Block address (byte address >> 6).
    #[getter]
    fn tag(&self) -> u64 {
        self.inner.tag().val()
    }

    /// First byte address of the line.
    #[getter]
    fn addr(&self) -> u64 {
        self.inner.addr()
    }

    #[getter]
    fn origin(&self) -> i32 {
        self.inner.origin()
    }

    #[getter]
    fn dirty(&self) -> bool {
        self.inner.is_dirty()
    }

    /// `True` for valid and reserved lines.
    #[getter]
    fn resident(&self) -> bool {
        self.inner.is_resident()
    }

    fn __repr__(&self) -> String {
        if self.inner.is_resident() {
            format!(
                "CacheLine(status={}, addr={:#x}, origin={}, dirty={})",
                self.status(),
                self.inner.addr(),
                self.inner.origin(),
                if self.inner.is_dirty() { "True" } else { "False" }
            )
        } else {
            "CacheLine(status=invalid)".to_owned()
        }
    }
}
