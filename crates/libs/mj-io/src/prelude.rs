//! Common types and utilities.

/// Process management error type.
pub use crate::error::Error;

/// Process management result type.
pub type Result<T> = core::result::Result<T, Error>;
