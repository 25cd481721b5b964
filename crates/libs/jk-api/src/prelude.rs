//! Common types and utilities.

/// Jenkins API client error type.
pub use crate::error::Error;

/// Jenkins API client result type.
pub type Result<T> = core::result::Result<T, Error>;
