//! Configuration for the non-blocking cache model.
//!
//! This module defines the structures used to parameterize a cache instance. It provides:
//! 1. **Defaults:** Baseline geometry and MSHR capacities.
//! 2. **Structures:** `CacheConfig`, deserializable from JSON with per-field defaults.
//! 3. **Enums:** The replacement policy selector.
//!
//! Configuration is supplied as JSON (from a host simulator or the Python bindings)
//! or built in code starting from `CacheConfig::default()`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::{ConfigError, LINE_SHIFT};

/// Default configuration constants for the cache model.
mod defaults {
    /// Default cache instance name, used in log output.
    pub const NAME: &str = "default_cache";

    /// Default associativity (4 ways).
    pub const WAYS: usize = 4;

    /// Default set count (64 sets, 16 KiB with 64-byte lines and 4 ways).
    pub const SETS: usize = 64;

    /// Default number of distinct outstanding blocks tracked by the MSHR.
    pub const MSHR_ENTRIES: usize = 16;

    /// Default number of requests that may merge into one outstanding block.
    pub const MSHR_MAX_MERGE: usize = 32;

    /// Name given to caches sized from a byte capacity.
    pub const CAPACITY_NAME: &str = "default cache";

    /// MSHR entries used by caches sized from a byte capacity.
    pub const CAPACITY_MSHR_ENTRIES: usize = 196;

    /// MSHR merge capacity used by caches sized from a byte capacity.
    pub const CAPACITY_MSHR_MAX_MERGE: usize = 16;
}

/// Cache replacement policy algorithms.
///
/// Only LRU has an implementation. FIFO is a recognised configuration value so
/// that selecting it fails loudly instead of silently falling back to LRU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReplacementPolicy {
    /// Least Recently Used replacement policy.
    ///
    /// Each set is kept in recency order; the victim is the least recently used
    /// line that is not waiting for a fill.
    #[default]
    #[serde(alias = "Lru")]
    Lru,
    /// First In First Out replacement policy. Not implemented.
    #[serde(alias = "Fifo")]
    Fifo,
}

/// Geometry and MSHR configuration of one cache instance.
///
/// # Examples
///
/// ```
/// use nbcache_core::config::CacheConfig;
///
/// let json = r#"{ "name": "l1d", "ways": 4, "sets": 2, "mshr_entries": 16, "mshr_max_merge": 4 }"#;
/// let config = CacheConfig::from_json(json).unwrap();
/// assert_eq!(config.ways, 4);
/// assert_eq!(config.sets, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Identifying name, carried into log output.
    #[serde(default = "CacheConfig::default_name")]
    pub name: String,

    /// Associativity (number of ways per set).
    #[serde(default = "CacheConfig::default_ways")]
    pub ways: usize,

    /// Number of sets.
    #[serde(default = "CacheConfig::default_sets")]
    pub sets: usize,

    /// Replacement policy.
    #[serde(default)]
    pub policy: ReplacementPolicy,

    /// Maximum number of distinct outstanding blocks.
    #[serde(default = "CacheConfig::default_mshr_entries")]
    pub mshr_entries: usize,

    /// Maximum number of requests merged into one outstanding block.
    #[serde(default = "CacheConfig::default_mshr_max_merge")]
    pub mshr_max_merge: usize,
}

impl CacheConfig {
    /// Returns the default cache name.
    fn default_name() -> String {
        defaults::NAME.to_owned()
    }

    /// Returns the default associativity.
    fn default_ways() -> usize {
        defaults::WAYS
    }

    /// Returns the default set count.
    fn default_sets() -> usize {
        defaults::SETS
    }

    /// Returns the default MSHR entry count.
    fn default_mshr_entries() -> usize {
        defaults::MSHR_ENTRIES
    }

    /// Returns the default MSHR merge capacity.
    fn default_mshr_max_merge() -> usize {
        defaults::MSHR_MAX_MERGE
    }

    /// Parses a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if `json` is malformed or has fields of
    /// the wrong type.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if its contents are not a valid configuration.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Sizes an LRU cache from its associativity and total byte capacity.
    ///
    /// The set count is `(total_bytes / 64) / ways`. The MSHR gets 196 entries
    /// with 16 merges each.
    ///
    /// # Arguments
    ///
    /// * `ways` - Associativity.
    /// * `total_bytes` - Total data capacity in bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroWays`] for zero ways and
    /// [`ConfigError::CapacityNotDivisible`] when the capacity does not give a
    /// whole, non-zero number of sets.
    pub fn from_capacity(ways: usize, total_bytes: usize) -> Result<Self, ConfigError> {
        if ways == 0 {
            return Err(ConfigError::ZeroWays);
        }
        let lines = total_bytes >> LINE_SHIFT;
        if lines << LINE_SHIFT != total_bytes || lines % ways != 0 || lines < ways {
            return Err(ConfigError::CapacityNotDivisible { ways, total_bytes });
        }
        Ok(Self {
            name: defaults::CAPACITY_NAME.to_owned(),
            ways,
            sets: lines / ways,
            policy: ReplacementPolicy::Lru,
            mshr_entries: defaults::CAPACITY_MSHR_ENTRIES,
            mshr_max_merge: defaults::CAPACITY_MSHR_MAX_MERGE,
        })
    }

    /// Checks that this configuration describes a buildable cache.
    ///
    /// Zero MSHR entries are accepted (every read miss then fails reservation),
    /// and so is zero merge capacity (primary misses are admitted, secondary
    /// misses never merge).
    ///
    /// # Errors
    ///
    /// [`ConfigError::ZeroWays`], [`ConfigError::ZeroSets`], or
    /// [`ConfigError::UnsupportedPolicy`] for anything but LRU.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ways == 0 {
            return Err(ConfigError::ZeroWays);
        }
        if self.sets == 0 {
            return Err(ConfigError::ZeroSets);
        }
        match self.policy {
            ReplacementPolicy::Lru => Ok(()),
            ReplacementPolicy::Fifo => Err(ConfigError::UnsupportedPolicy(self.policy)),
        }
    }

    /// Total data capacity in bytes.
    pub const fn capacity_bytes(&self) -> usize {
        (self.ways * self.sets) << LINE_SHIFT
    }
}

impl Default for CacheConfig {
    /// Creates a 4-way, 64-set LRU cache with a 16-entry, 32-merge MSHR.
    fn default() -> Self {
        Self {
            name: Self::default_name(),
            ways: defaults::WAYS,
            sets: defaults::SETS,
            policy: ReplacementPolicy::default(),
            mshr_entries: defaults::MSHR_ENTRIES,
            mshr_max_merge: defaults::MSHR_MAX_MERGE,
        }
    }
}
