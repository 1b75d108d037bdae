//! # Unit Components
//!
//! Tests organised by component: the cache engine and its MSHR, shared
//! address and access types, configuration, and statistics.



/// Tests for configuration defaults, loading, and validation.
pub mod config;

/// Tests for statistics counters and reporting.
pub mod stats;
