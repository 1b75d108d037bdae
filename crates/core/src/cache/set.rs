//! LRU-ordered cache set.
//!
//! A set is a fixed-length sequence of lines where position 0 is the most
//! recently used and the last position is the least recently used. Order only
//! changes when an access promotes or installs a line.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `probe()`: O(W) where W is the number of ways (associativity)
//!   - `promote()`, `replace()`: O(W) ordered shift
//! - **Space Complexity:** O(W) per set

use super::line::CacheLine;
use crate::common::BlockAddr;

/// Classification of a block against one set, from a single MRU→LRU scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Probe {
    /// An invalid slot came up before any tag match.
    Vacant(usize),
    /// A resident line carries the block.
    Match(usize),
    /// No invalid slot and no match. `victim` is the least recently used line
    /// that is not reserved, or `None` when every way is reserved.
    Full { victim: Option<usize> },
}

/// One set of `num_way` lines in recency order.
#[derive(Clone, Debug)]
pub(crate) struct CacheSet {
    lines: Vec<CacheLine>,
}

impl CacheSet {
    pub(crate) fn new(ways: usize) -> Self {
        Self {
            lines: vec![CacheLine::default(); ways],
        }
    }

    /// Scans from MRU to LRU.
    ///
    /// Returns at the first invalid slot or the first tag match, whichever
    /// comes first. Invalid slots are only ever at the tail, since installs
    /// always move to the front and evictions never leave a hole.
    pub(crate) fn probe(&self, block: BlockAddr) -> Probe {
        let mut victim = None;
        for (way, line) in self.lines.iter().enumerate() {
            if !line.is_reserved() {
                victim = Some(way);
            }
            if !line.is_resident() {
                return Probe::Vacant(way);
            }
            if line.tag() == block {
                return Probe::Match(way);
            }
        }
        Probe::Full { victim }
    }

    /// Moves the line at `way` to the MRU position. Lines ahead of it shift one
    /// position toward the tail; lines behind it keep their positions.
    #[inline]
    pub(crate) fn promote(&mut self, way: usize) {
        self.lines[..=way].rotate_right(1);
    }

    /// Removes the line at `way` and installs `line` at the MRU position.
    ///
    /// # Returns
    ///
    /// The removed line.
    pub(crate) fn replace(&mut self, way: usize, line: CacheLine) -> CacheLine {
        let victim = self.lines.remove(way);
        self.lines.insert(0, line);
        victim
    }

    #[inline]
    pub(crate) fn line(&self, way: usize) -> &CacheLine {
        &self.lines[way]
    }

    #[inline]
    pub(crate) fn line_mut(&mut self, way: usize) -> &mut CacheLine {
        &mut self.lines[way]
    }

    /// The resident line holding `block`, if any.
    pub(crate) fn find_mut(&mut self, block: BlockAddr) -> Option<&mut CacheLine> {
        self.lines
            .iter_mut()
            .find(|line| line.is_resident() && line.tag() == block)
    }

    pub(crate) fn lines(&self) -> &[CacheLine] {
        &self.lines
    }
}
