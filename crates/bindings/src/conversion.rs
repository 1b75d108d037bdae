//! Python↔Rust conversion helpers.
//!
//! Config dicts go through JSON so Python callers and JSON config files share
//! one schema. Access types arrive as strings.

use nbcache_core::{AccessType, CacheConfig, ConfigError};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Converts a Python dict to a `CacheConfig`.
///
/// The dict is serialized with `json.dumps` and deserialized into
/// `CacheConfig`; missing keys take their defaults.
///
/// # Arguments
///
/// * `py` - Python interpreter handle.
/// * `dict` - A dict such as `{"ways": 4, "sets": 2, "mshr_entries": 16}`.
///
/// # Returns
///
/// The deserialized `CacheConfig`, or a `ValueError` if the dict does not
/// describe one.
pub fn py_dict_to_config(py: Python<'_>, dict: &Bound<'_, PyAny>) -> PyResult<CacheConfig> {
    let json = py.import("json")?;
    let dumps = json.getattr("dumps")?;
    let json_str: String = dumps.call1((dict,))?.extract()?;

    CacheConfig::from_json(&json_str).map_err(config_error)
}

/// Maps a configuration error to a Python `ValueError`.
pub fn config_error(err: ConfigError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Parses `"read"`/`"r"`/`"write"`/`"w"` (any case) into an `AccessType`.
///
/// # Returns
///
/// The access type, or a `ValueError` naming the bad input.
pub fn parse_access_type(kind: &str) -> PyResult<AccessType> {
    kind.parse().map_err(|err| PyValueError::new_err(format!("{err}")))
}
