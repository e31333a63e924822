//! Common types and utilities.

/// Judging error type.
pub use crate::error::Error;

/// Judging result type.
pub type Result<T> = core::result::Result<T, Error>;
