//! Cache access statistics.
//!
//! Passive counters recorded once per `access` call. This module provides:
//! 1. **Per-type buckets:** One `Statistics` record for reads and one for writes.
//! 2. **Derived metrics:** Access totals and hit rates.
//! 3. **Reporting:** A plain-text `Display` report and serde export.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cache::AccessOutcome;
use crate::common::AccessType;

/// Outcome counters for one access type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    /// Accesses that found a valid line.
    pub hits: u64,
    /// Accesses that installed a new line.
    pub misses: u64,
    /// Accesses that matched a line still waiting for its fill.
    pub hits_on_reserved: u64,
    /// Accesses refused for lack of MSHR capacity or an evictable way.
    pub reservation_failures: u64,
}

impl Statistics {
    /// Counts one access with the given outcome.
    pub const fn record(&mut self, outcome: AccessOutcome) {
        match outcome {
            AccessOutcome::Hit => self.hits += 1,
            AccessOutcome::HitOnReserved => self.hits_on_reserved += 1,
            AccessOutcome::Miss => self.misses += 1,
            AccessOutcome::ReservationFailed => self.reservation_failures += 1,
        }
    }

    /// Total number of recorded accesses.
    pub const fn accesses(&self) -> u64 {
        self.hits + self.misses + self.hits_on_reserved + self.reservation_failures
    }

    /// Fraction of accepted accesses that hit a valid line.
    ///
    /// Reservation failures are excluded since they will be retried. Returns
    /// `0.0` when nothing was accepted.
    pub fn hit_rate(&self) -> f64 {
        let accepted = self.hits + self.misses + self.hits_on_reserved;
        if accepted == 0 {
            0.0
        } else {
            self.hits as f64 / accepted as f64
        }
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  num_hit              {}", self.hits)?;
        writeln!(f, "  num_miss             {}", self.misses)?;
        writeln!(f, "  num_hit_reserved     {}", self.hits_on_reserved)?;
        writeln!(f, "  num_res_fail         {}", self.reservation_failures)?;
        write!(f, "  hit_rate             {:.2}%", self.hit_rate() * 100.0)
    }
}

/// Read and write statistics of one cache.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Read accesses.
    pub read: Statistics,
    /// Write accesses.
    pub write: Statistics,
}

impl CacheStats {
    /// The bucket for `access_type`.
    pub const fn get(&self, access_type: AccessType) -> &Statistics {
        match access_type {
            AccessType::Read => &self.read,
            AccessType::Write => &self.write,
        }
    }

    pub(crate) const fn get_mut(&mut self, access_type: AccessType) -> &mut Statistics {
        match access_type {
            AccessType::Read => &mut self.read,
            AccessType::Write => &mut self.write,
        }
    }

    /// Both buckets summed.
    pub const fn total(&self) -> Statistics {
        Statistics {
            hits: self.read.hits + self.write.hits,
            misses: self.read.misses + self.write.misses,
            hits_on_reserved: self.read.hits_on_reserved + self.write.hits_on_reserved,
            reservation_failures: self.read.reservation_failures
                + self.write.reservation_failures,
        }
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for access_type in AccessType::ALL {
            writeln!(f, "[{access_type}]")?;
            writeln!(f, "{}", self.get(access_type))?;
        }
        Ok(())
    }
}
