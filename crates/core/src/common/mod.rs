//! Common types shared by the cache, the MSHR, and the configuration layer.
//!
//! This module provides the following:
//! 1. **Address Types:** The block address newtype and fixed line geometry.
//! 2. **Access Types:** The read/write classification of an access.
//! 3. **Error Handling:** MSHR admission, configuration, and parse errors.

/// Block address type and line geometry constants.
pub mod addr;

/// Access type definitions.
pub mod data;

/// Error types.
pub mod error;

pub use addr::{BlockAddr, LINE_BYTES, LINE_SHIFT};
pub use data::AccessType;
pub use error::{ConfigError, MshrError, ParseAccessTypeError};
