//! Read-only view into cache internals for test harnesses.
//!
//! Only compiled for in-crate tests or with the `introspection` feature. Host
//! simulators drive the cache through its public API and never need this.

use super::SetAssociativeCache;
use super::line::CacheLine;
use super::mshr::Mshr;

/// Borrowed view of a cache's sets, lines, and MSHR.
#[derive(Clone, Copy, Debug)]
pub struct CacheInspector<'a> {
    cache: &'a SetAssociativeCache,
}

impl SetAssociativeCache {
    /// Opens a read-only view of this cache's internal state.
    pub const fn inspect(&self) -> CacheInspector<'_> {
        CacheInspector { cache: self }
    }
}

impl<'a> CacheInspector<'a> {
    /// Lines of `set` in MRU→LRU order, or `None` if `set` is out of range.
    pub fn set(&self, set: usize) -> Option<&'a [CacheLine]> {
        self.cache.sets.get(set).map(|s| s.lines())
    }

    /// The line at (`set`, `way`), where way 0 is the MRU position.
    pub fn line(&self, set: usize, way: usize) -> Option<&'a CacheLine> {
        self.set(set).and_then(|lines| lines.get(way))
    }

    /// The cache's MSHR.
    pub const fn mshr(&self) -> &'a Mshr {
        &self.cache.mshr
    }

    /// Number of reserved lines across all sets.
    pub fn reserved_lines(&self) -> usize {
        self.cache
            .sets
            .iter()
            .flat_map(|s| s.lines())
            .filter(|line| line.is_reserved())
            .count()
    }
}
