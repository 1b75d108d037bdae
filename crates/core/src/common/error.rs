//! Error definitions.
//!
//! This module defines the recoverable error types of the cache model:
//! 1. **MSHR Admission:** Why the miss tracker refused a request.
//! 2. **Configuration:** Invalid geometry, unsupported policies, and load failures.
//! 3. **Parsing:** Access type names supplied by hosts as text.
//!
//! Host contract violations (filling a block that was never reserved) are not
//! represented here; they are assertion failures.

use thiserror::Error;

use super::addr::BlockAddr;
use crate::config::ReplacementPolicy;

/// Reasons the MSHR refuses to admit a request.
///
/// The cache reports both variants to its caller as `ReservationFailed`; the
/// distinction is kept for logging and for hosts that drive an `Mshr` directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MshrError {
    /// The block is not tracked yet and every entry is already in use.
    #[error("all {capacity} MSHR entries are in use")]
    EntryFull {
        /// Maximum number of distinct outstanding blocks.
        capacity: usize,
    },

    /// The block is tracked but its merge list is at capacity.
    #[error("merge list for block {block} already holds {capacity} requests")]
    MergeFull {
        /// The block whose merge list is full.
        block: BlockAddr,
        /// Maximum number of requests merged into one outstanding block.
        capacity: usize,
    },
}

/// Errors raised while building or loading a cache configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Associativity must be at least one way.
    #[error("cache must have at least one way")]
    ZeroWays,

    /// The cache must have at least one set.
    #[error("cache must have at least one set")]
    ZeroSets,

    /// The requested replacement policy has no implementation.
    #[error("replacement policy {0:?} is not implemented; only LRU is supported")]
    UnsupportedPolicy(ReplacementPolicy),

    /// A byte capacity does not split into whole sets of the requested associativity.
    #[error("{total_bytes} bytes cannot be divided into {ways}-way sets of 64-byte lines")]
    CapacityNotDivisible {
        /// Requested associativity.
        ways: usize,
        /// Requested total capacity in bytes.
        total_bytes: usize,
    },

    /// The configuration text is not valid JSON for `CacheConfig`.
    #[error("invalid cache config: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configuration file could not be read.
    #[error("failed to read cache config: {0}")]
    Io(#[from] std::io::Error),
}

/// An access type name that is neither read nor write.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown access type `{0}` (expected \"read\" or \"write\")")]
pub struct ParseAccessTypeError(pub String);
