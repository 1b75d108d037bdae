//! Miss Status Holding Register.
//!
//! Tracks the read misses currently in flight, one entry per block address.
//! Each entry keeps the ordered list of requests merged into that miss; the
//! first element is the primary miss, the rest are secondary misses that
//! arrived while the fill was pending.
//!
//! Two capacity limits apply:
//! - `num_entry`: distinct outstanding blocks.
//! - `max_merge`: requests per block, primary included.
//!
//! # Performance
//!
//! - `access()`, `try_access()`, `fill()`: O(log E) where E is the number of
//!   outstanding blocks.

use std::collections::BTreeMap;

use crate::common::{BlockAddr, MshrError};

/// One request recorded in a block's merge list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MergedRequest {
    /// Raw byte address of the request.
    pub addr: u64,
    /// Requester class hint supplied with the request.
    pub origin: i32,
}

/// Miss tracker keyed by block address.
#[derive(Clone, Debug, Default)]
pub struct Mshr {
    num_entry: usize,
    max_merge: usize,
    entries: BTreeMap<BlockAddr, Vec<MergedRequest>>,
}

impl Mshr {
    /// Creates an empty MSHR.
    ///
    /// # Arguments
    ///
    /// * `num_entry` - Maximum number of distinct outstanding blocks.
    /// * `max_merge` - Maximum number of requests merged into one block.
    pub const fn new(num_entry: usize, max_merge: usize) -> Self {
        Self {
            num_entry,
            max_merge,
            entries: BTreeMap::new(),
        }
    }

    /// Registers a request, merging it into an outstanding miss for the same
    /// block or opening a new entry.
    ///
    /// Mutates the table on success. Callers that only want to know whether a
    /// request would be admitted must use [`Mshr::try_access`].
    ///
    /// # Arguments
    ///
    /// * `addr` - Raw byte address of the request.
    /// * `origin` - Requester class hint, stored with the merged request.
    ///
    /// # Errors
    ///
    /// [`MshrError::MergeFull`] if the block is tracked and its merge list is at
    /// capacity, [`MshrError::EntryFull`] if the block is new and every entry
    /// is in use. Nothing changes on error.
    pub fn access(&mut self, addr: u64, origin: i32) -> Result<(), MshrError> {
        self.try_access(addr)?;
        self.entries
            .entry(BlockAddr::of(addr))
            .or_default()
            .push(MergedRequest { addr, origin });
        Ok(())
    }

    /// Predicts the result of [`Mshr::access`] without changing any state.
    ///
    /// # Errors
    ///
    /// The error `access` would return for the same address.
    pub fn try_access(&self, addr: u64) -> Result<(), MshrError> {
        let block = BlockAddr::of(addr);
        match self.entries.get(&block) {
            Some(merged) if merged.len() >= self.max_merge => Err(MshrError::MergeFull {
                block,
                capacity: self.max_merge,
            }),
            Some(_) => Ok(()),
            None if self.entries.len() >= self.num_entry => Err(MshrError::EntryFull {
                capacity: self.num_entry,
            }),
            None => Ok(()),
        }
    }

    /// Releases the block containing `addr`, discarding its whole merge list.
    ///
    /// Filling a block that is not tracked is a no-op.
    pub fn fill(&mut self, addr: u64) {
        let _ = self.entries.remove(&BlockAddr::of(addr));
    }

    /// Returns `true` if committing a request for `addr` would fail.
    pub fn full(&self, addr: u64) -> bool {
        self.try_access(addr).is_err()
    }

    /// Number of distinct outstanding blocks.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no miss is outstanding.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of distinct outstanding blocks.
    pub const fn capacity(&self) -> usize {
        self.num_entry
    }

    /// Maximum number of requests per block.
    pub const fn max_merge(&self) -> usize {
        self.max_merge
    }

    /// Returns `true` if the block containing `addr` has an outstanding miss.
    pub fn contains(&self, addr: u64) -> bool {
        self.entries.contains_key(&BlockAddr::of(addr))
    }

    /// The requests merged into the outstanding miss for `addr`'s block, in
    /// arrival order, or `None` if the block is not tracked.
    pub fn merged(&self, addr: u64) -> Option<&[MergedRequest]> {
        self.entries.get(&BlockAddr::of(addr)).map(Vec::as_slice)
    }

    /// Iterates over outstanding blocks in ascending block order.
    #[cfg(any(test, feature = "introspection"))]
    pub fn blocks(&self) -> impl Iterator<Item = BlockAddr> + '_ {
        self.entries.keys().copied()
    }
}
