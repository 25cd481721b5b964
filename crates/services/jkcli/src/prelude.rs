//! Common types and utilities.

/// jkcli error type.
pub use crate::error::Error;

/// jkcli result type.
pub type Result<T> = core::result::Result<T, Error>;
