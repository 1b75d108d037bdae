//! Non-blocking Set-Associative Cache.
//!
//! This module implements a set-associative cache model with an explicit MSHR.
//! It tracks state only: which blocks are resident, which are in flight, and
//! which requests merge into an outstanding miss. Data movement and timing are
//! left to the host simulator, which calls [`SetAssociativeCache::access`] per
//! request and [`SetAssociativeCache::fill`] once memory has serviced a miss.
//!
//! # Access protocol
//!
//! The target set is scanned from most to least recently used:
//!
//! 1. An invalid slot before any tag match is a miss. Reads reserve the line
//!    and register the block in the MSHR; writes install a valid dirty line.
//! 2. A tag match on a valid line is a hit. A match on a reserved line is a hit
//!    on a pending miss; reads must also merge into the MSHR entry.
//! 3. A full set with no match evicts the least recently used line that is
//!    not reserved. If every way is reserved the access fails reservation.
//!
//! Every accepted access leaves the touched line at the MRU position.

/// Cache line value type.
pub mod line;

/// Miss Status Holding Register.
pub mod mshr;

mod set;

/// Read-only view into sets, lines, and the MSHR for test harnesses.
#[cfg(any(test, feature = "introspection"))]
pub mod introspect;

use std::fmt;

use tracing::{debug, trace};

use self::line::{CacheLine, LineStatus};
use self::mshr::Mshr;
use self::set::{CacheSet, Probe};
use crate::common::{AccessType, BlockAddr, ConfigError};
use crate::config::{CacheConfig, ReplacementPolicy};
use crate::stats::CacheStats;

/// Result of an access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessOutcome {
    /// The block is resident and valid.
    Hit,
    /// The block is reserved; the request joined the outstanding miss.
    HitOnReserved,
    /// The block was installed (reserved for reads, valid for writes).
    Miss,
    /// No MSHR capacity or no evictable way. Nothing changed; retry later.
    ReservationFailed,
}

impl AccessOutcome {
    /// Anything but [`AccessOutcome::ReservationFailed`].
    pub const fn is_accepted(self) -> bool {
        !matches!(self, Self::ReservationFailed)
    }
}

impl fmt::Display for AccessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Hit => "hit",
            Self::HitOnReserved => "hit_reserved",
            Self::Miss => "miss",
            Self::ReservationFailed => "reservation_failed",
        };
        f.write_str(name)
    }
}

/// Set-associative cache with LRU replacement and a miss tracker.
#[derive(Clone, Debug)]
pub struct SetAssociativeCache {
    name: String,
    num_way: usize,
    num_set: usize,
    policy: ReplacementPolicy,
    sets: Vec<CacheSet>,
    mshr: Mshr,
    stats: CacheStats,
    outstanding_misses: usize,
    last_evicted: CacheLine,
}

impl SetAssociativeCache {
    /// Builds an empty cache: every line invalid, MSHR empty, counters zero.
    ///
    /// # Errors
    ///
    /// Any error of [`CacheConfig::validate`], including
    /// [`ConfigError::UnsupportedPolicy`] for FIFO.
    pub fn new(config: &CacheConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        debug!(
            cache = %config.name,
            sets = config.sets,
            ways = config.ways,
            mshr_entries = config.mshr_entries,
            mshr_max_merge = config.mshr_max_merge,
            "cache created"
        );
        Ok(Self {
            name: config.name.clone(),
            num_way: config.ways,
            num_set: config.sets,
            policy: config.policy,
            sets: (0..config.sets).map(|_| CacheSet::new(config.ways)).collect(),
            mshr: Mshr::new(config.mshr_entries, config.mshr_max_merge),
            stats: CacheStats::default(),
            outstanding_misses: 0,
            last_evicted: CacheLine::default(),
        })
    }

    /// Performs an access and commits its effects.
    ///
    /// Exactly one statistics counter of the `access_type` bucket is bumped.
    ///
    /// # Arguments
    ///
    /// * `addr` - Byte address of the request.
    /// * `access_type` - Read or write.
    /// * `origin` - Requester class, stored in newly installed lines.
    ///
    /// # Returns
    ///
    /// The classification of the access. On
    /// [`AccessOutcome::ReservationFailed`] no line, LRU order, or MSHR state
    /// has changed.
    pub fn access(&mut self, addr: u64, access_type: AccessType, origin: i32) -> AccessOutcome {
        let outcome = match self.policy {
            ReplacementPolicy::Lru => self.access_lru(addr, access_type, origin),
            ReplacementPolicy::Fifo => unreachable!("FIFO replacement is not implemented"),
        };
        self.stats.get_mut(access_type).record(outcome);
        trace!(cache = %self.name, addr, %access_type, %outcome, "access");
        outcome
    }

    fn access_lru(&mut self, addr: u64, access_type: AccessType, origin: i32) -> AccessOutcome {
        let block = BlockAddr::of(addr);
        let set = block.set_index(self.num_set);

        match self.sets[set].probe(block) {
            Probe::Vacant(way) => {
                if !self.reserve(addr, access_type, origin) {
                    return AccessOutcome::ReservationFailed;
                }
                *self.sets[set].line_mut(way) = Self::new_line(block, access_type, origin);
                self.sets[set].promote(way);
                self.last_evicted = CacheLine::default();
                self.count_miss(access_type);
                AccessOutcome::Miss
            }
            Probe::Match(way) => match self.sets[set].line(way).status() {
                LineStatus::Valid => {
                    if access_type.is_write() {
                        self.sets[set].line_mut(way).mark_dirty();
                    }
                    self.sets[set].promote(way);
                    AccessOutcome::Hit
                }
                LineStatus::Reserved => {
                    if !self.reserve(addr, access_type, origin) {
                        return AccessOutcome::ReservationFailed;
                    }
                    if access_type.is_write() {
                        self.sets[set].line_mut(way).mark_dirty();
                    }
                    self.sets[set].promote(way);
                    AccessOutcome::HitOnReserved
                }
                LineStatus::Invalid => unreachable!("probe never matches an invalid line"),
            },
            Probe::Full { victim: None } => {
                debug!(cache = %self.name, %block, set, "reservation failed: every way reserved");
                AccessOutcome::ReservationFailed
            }
            Probe::Full { victim: Some(way) } => {
                if !self.reserve(addr, access_type, origin) {
                    return AccessOutcome::ReservationFailed;
                }
                let victim = self.sets[set].replace(way, Self::new_line(block, access_type, origin));
                self.last_evicted = match victim.status() {
                    LineStatus::Valid => victim,
                    LineStatus::Invalid => CacheLine::default(),
                    LineStatus::Reserved => {
                        unreachable!("eviction selected reserved block {}", victim.tag())
                    }
                };
                if victim.is_dirty() {
                    debug!(
                        cache = %self.name,
                        victim = %victim.tag(),
                        set,
                        way,
                        "evicted dirty line"
                    );
                }
                self.count_miss(access_type);
                AccessOutcome::Miss
            }
        }
    }

    /// Predicts the outcome of [`SetAssociativeCache::access`] without
    /// changing lines, LRU order, the MSHR, or statistics.
    ///
    /// Reads consult the MSHR through its non-mutating probe; writes never
    /// involve the MSHR, exactly as in `access`.
    pub fn try_access(&self, addr: u64, access_type: AccessType) -> AccessOutcome {
        match self.policy {
            ReplacementPolicy::Lru => {}
            ReplacementPolicy::Fifo => unreachable!("FIFO replacement is not implemented"),
        }
        let block = BlockAddr::of(addr);
        let set = &self.sets[block.set_index(self.num_set)];
        let admitted = || access_type.is_write() || self.mshr.try_access(addr).is_ok();

        match set.probe(block) {
            Probe::Vacant(_) | Probe::Full { victim: Some(_) } => {
                if admitted() {
                    AccessOutcome::Miss
                } else {
                    AccessOutcome::ReservationFailed
                }
            }
            Probe::Match(way) => match set.line(way).status() {
                LineStatus::Valid => AccessOutcome::Hit,
                LineStatus::Reserved if admitted() => AccessOutcome::HitOnReserved,
                LineStatus::Reserved => AccessOutcome::ReservationFailed,
                LineStatus::Invalid => unreachable!("probe never matches an invalid line"),
            },
            Probe::Full { victim: None } => AccessOutcome::ReservationFailed,
        }
    }

    /// Completes the outstanding read miss for `addr`'s block.
    ///
    /// The reserved line becomes valid (origin and dirty bit unchanged), the
    /// MSHR entry and its merge list are released, and the outstanding-miss
    /// counter drops by one.
    ///
    /// # Panics
    ///
    /// If no line in the block's set is reserved for the block. Calling `fill`
    /// without a matching committed read miss is a host contract violation.
    pub fn fill(&mut self, addr: u64) {
        let block = BlockAddr::of(addr);
        let set = block.set_index(self.num_set);
        let Some(line) = self.sets[set].find_mut(block) else {
            panic!("{}: fill({addr:#x}) but block {block} is not resident", self.name);
        };
        assert!(
            line.is_reserved(),
            "{}: fill({addr:#x}) but block {block} is {:?}, not reserved",
            self.name,
            line.status()
        );
        let origin = line.origin();
        line.set(block, LineStatus::Valid, origin);
        self.mshr.fill(addr);
        assert!(
            self.outstanding_misses > 0,
            "{}: outstanding miss counter underflow on fill({addr:#x})",
            self.name
        );
        self.outstanding_misses -= 1;
        debug!(cache = %self.name, %block, set, outstanding = self.outstanding_misses, "fill");
    }

    /// Returns `true` if no line anywhere is waiting for a fill.
    pub fn is_clear(&self) -> bool {
        self.sets
            .iter()
            .all(|set| set.lines().iter().all(|line| !line.is_reserved()))
    }

    /// Returns `true` if `addr`'s block has a committed read miss waiting for
    /// its fill, i.e. `fill(addr)` is currently legal.
    pub fn is_pending(&self, addr: u64) -> bool {
        self.mshr.contains(addr)
    }

    /// Number of read misses committed and not yet filled.
    pub const fn outstanding_misses(&self) -> usize {
        self.outstanding_misses
    }

    /// The line most recently displaced by a miss.
    ///
    /// Holds the victim's prior state when a valid line was evicted, so the
    /// host can schedule a writeback if it is dirty. Reset to an invalid line
    /// by any miss that found an empty slot.
    pub const fn last_evicted(&self) -> CacheLine {
        self.last_evicted
    }

    /// Read and write statistics.
    pub const fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Geometry as `(sets, ways)`.
    pub const fn size(&self) -> (usize, usize) {
        (self.num_set, self.num_way)
    }

    /// Instance name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registers a read with the MSHR. Writes bypass it and always succeed.
    fn reserve(&mut self, addr: u64, access_type: AccessType, origin: i32) -> bool {
        if access_type.is_write() {
            return true;
        }
        match self.mshr.access(addr, origin) {
            Ok(()) => true,
            Err(err) => {
                debug!(cache = %self.name, addr, %err, "reservation failed");
                false
            }
        }
    }

    fn count_miss(&mut self, access_type: AccessType) {
        if !access_type.is_write() {
            self.outstanding_misses += 1;
        }
    }

    /// A fresh line for a miss: reserved for reads, valid and dirty for writes.
    fn new_line(block: BlockAddr, access_type: AccessType, origin: i32) -> CacheLine {
        let mut line = CacheLine::default();
        match access_type {
            AccessType::Read => line.set(block, LineStatus::Reserved, origin),
            AccessType::Write => {
                line.set(block, LineStatus::Valid, origin);
                line.mark_dirty();
            }
        }
        line
    }
}
