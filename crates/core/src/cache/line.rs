//! Cache line state.
//!
//! A line is a plain value: status, resident tag, the origin of the requester
//! that installed it, and a dirty bit. All protocol decisions live in the cache.

use crate::common::BlockAddr;

/// Residency state of a cache line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LineStatus {
    /// Empty slot; the tag is meaningless.
    #[default]
    Invalid,
    /// Data is resident.
    Valid,
    /// A read miss for this block is in flight; the line becomes `Valid` on fill.
    Reserved,
}

/// One slot of a cache set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CacheLine {
    status: LineStatus,
    tag: BlockAddr,
    origin: i32,
    dirty: bool,
}

impl Default for CacheLine {
    /// An invalid line with an all-ones tag that no 64-byte block can carry.
    fn default() -> Self {
        Self {
            status: LineStatus::Invalid,
            tag: BlockAddr(u64::MAX),
            origin: 0,
            dirty: false,
        }
    }
}

impl CacheLine {
    /// Overwrites tag, status, and origin.
    ///
    /// The dirty bit is left alone: a write that lands on a reserved line must
    /// still be dirty once the fill validates it.
    #[inline]
    pub const fn set(&mut self, tag: BlockAddr, status: LineStatus, origin: i32) {
        self.tag = tag;
        self.status = status;
        self.origin = origin;
    }

    /// Marks the line as modified.
    #[inline]
    pub const fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Current status.
    #[inline]
    pub const fn status(&self) -> LineStatus {
        self.status
    }

    /// Resident block address. Meaningless while the line is invalid.
    #[inline]
    pub const fn tag(&self) -> BlockAddr {
        self.tag
    }

    /// Requester class that installed the line.
    #[inline]
    pub const fn origin(&self) -> i32 {
        self.origin
    }

    /// Whether any write touched the line while resident.
    #[inline]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Holds resident data.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        matches!(self.status, LineStatus::Valid)
    }

    /// Waiting for a fill.
    #[inline]
    pub const fn is_reserved(&self) -> bool {
        matches!(self.status, LineStatus::Reserved)
    }

    /// `Valid` or `Reserved`: the slot holds a block.
    #[inline]
    pub const fn is_resident(&self) -> bool {
        !matches!(self.status, LineStatus::Invalid)
    }

    /// First byte address of the resident block, for scheduling a writeback.
    #[inline]
    pub const fn addr(&self) -> u64 {
        self.tag.base()
    }
}
