//! Block address type.
//!
//! The cache and the MSHR track residency at cache-line granularity. This module
//! provides the following:
//! 1. **Line Geometry:** The fixed 64-byte line size and its shift.
//! 2. **Type Safety:** A `BlockAddr` newtype so block addresses are never confused
//!    with raw byte addresses.
//! 3. **Set Mapping:** The block-modulo-sets index function shared by every set lookup.

use std::fmt;

/// Number of low address bits discarded to form a block address (64-byte lines).
pub const LINE_SHIFT: u32 = 6;

/// Cache line size in bytes.
pub const LINE_BYTES: u64 = 1 << LINE_SHIFT;

/// A cache-line-granular block address.
///
/// Obtained by discarding the intra-line offset bits of a byte address. The
/// block address doubles as the line tag: two byte addresses share a line
/// exactly when their block addresses are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockAddr(pub u64);

impl BlockAddr {
    /// Computes the block address containing the byte address `addr`.
    ///
    /// # Arguments
    ///
    /// * `addr` - The raw 64-bit byte address.
    ///
    /// # Returns
    ///
    /// `addr` with the low [`LINE_SHIFT`] bits removed.
    #[inline(always)]
    pub const fn of(addr: u64) -> Self {
        Self(addr >> LINE_SHIFT)
    }

    /// Returns the raw block number.
    #[inline(always)]
    pub const fn val(self) -> u64 {
        self.0
    }

    /// Returns the first byte address covered by this block.
    #[inline(always)]
    pub const fn base(self) -> u64 {
        self.0 << LINE_SHIFT
    }

    /// Maps this block onto one of `num_sets` sets.
    ///
    /// # Arguments
    ///
    /// * `num_sets` - Set count of the cache; must be non-zero.
    ///
    /// # Returns
    ///
    /// `block mod num_sets`.
    #[inline(always)]
    pub const fn set_index(self, num_sets: usize) -> usize {
        (self.0 % num_sets as u64) as usize
    }
}

impl fmt::Display for BlockAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}
