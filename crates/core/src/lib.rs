//! Non-blocking cache model library.
//!
//! This crate models a set-associative cache with an explicit miss-status
//! holding register (MSHR), for embedding in an architecture or memory-system
//! simulator. It tracks state only; the host decides when to access and when a
//! miss has been serviced.
//! 1. **Cache:** LRU sets, the access/fill/evict protocol, dirty tracking, and eviction reporting.
//! 2. **MSHR:** Outstanding-miss tracking with entry and merge capacity limits.
//! 3. **Configuration:** Geometry and MSHR capacities, loadable from JSON.
//! 4. **Statistics:** Per-access-type outcome counters.
//!
//! # Example
//!
//! ```
//! use nbcache_core::{AccessOutcome, AccessType, CacheConfig, SetAssociativeCache};
//!
//! let config = CacheConfig { ways: 4, sets: 2, mshr_entries: 16, mshr_max_merge: 4, ..CacheConfig::default() };
//! let mut cache = SetAssociativeCache::new(&config).unwrap();
//!
//! assert_eq!(cache.access(0x0, AccessType::Read, 0), AccessOutcome::Miss);
//! assert_eq!(cache.access(0x0, AccessType::Read, 0), AccessOutcome::HitOnReserved);
//! cache.fill(0x0);
//! assert_eq!(cache.access(0x0, AccessType::Read, 0), AccessOutcome::Hit);
//! ```

/// Set-associative cache, cache lines, and the MSHR.
pub mod cache;
/// Common types (block addresses, access types, errors).
pub mod common;
/// Cache configuration (defaults, policy enum, JSON loading).
pub mod config;
/// Access statistics.
pub mod stats;

/// Main cache type; construct with `SetAssociativeCache::new`.
pub use crate::cache::{AccessOutcome, SetAssociativeCache};
/// Cache line value and its status.
pub use crate::cache::line::{CacheLine, LineStatus};
/// Miss tracker and its merge records.
pub use crate::cache::mshr::{MergedRequest, Mshr};
/// Access classification and address helpers.
pub use crate::common::{AccessType, BlockAddr, ConfigError, MshrError};
/// Cache configuration; use `CacheConfig::default()` or deserialize from JSON.
pub use crate::config::{CacheConfig, ReplacementPolicy};
/// Statistics buckets.
pub use crate::stats::{CacheStats, Statistics};
