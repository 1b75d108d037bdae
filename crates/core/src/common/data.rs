//! Access Types.
//!
//! This module defines the classification of cache accesses. The access type
//! decides the following:
//! 1. **Miss Handling:** Reads allocate through the MSHR; writes allocate directly.
//! 2. **Dirty Tracking:** Writes mark the touched line dirty.
//! 3. **Statistics Tracking:** Every access is counted in the bucket of its type.

use std::fmt;
use std::str::FromStr;

use super::error::ParseAccessTypeError;

/// Type of cache access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessType {
    /// Data read.
    ///
    /// A read miss reserves the line and registers the block in the MSHR; the
    /// line stays `Reserved` until the host calls `fill`.
    Read,

    /// Data write.
    ///
    /// Write-allocate without stalling: a write miss installs the line as
    /// `Valid` and dirty immediately, never touching the MSHR.
    Write,
}

impl AccessType {
    /// Both access types, in statistics bucket order.
    pub const ALL: [Self; 2] = [Self::Read, Self::Write];

    /// Index of this type's statistics bucket (`Read` = 0, `Write` = 1).
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::Read => 0,
            Self::Write => 1,
        }
    }

    /// Returns `true` for [`AccessType::Write`].
    #[inline]
    pub const fn is_write(self) -> bool {
        matches!(self, Self::Write)
    }
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => f.write_str("read"),
            Self::Write => f.write_str("write"),
        }
    }
}

impl FromStr for AccessType {
    type Err = ParseAccessTypeError;

    /// Parses `"read"`/`"r"` or `"write"`/`"w"`, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "read" | "r" => Ok(Self::Read),
            "write" | "w" => Ok(Self::Write),
            _ => Err(ParseAccessTypeError(s.to_owned())),
        }
    }
}
