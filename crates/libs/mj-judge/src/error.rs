//! Judging error types.

/// Judging errors.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed.
    #[error(transparent)]
    IO(#[from] std::io::Error),

    /// Binary record decoding failed.
    #[error(transparent)]
    Decode(#[from] crate::nation::DecodeError),

    /// Process management failed.
    #[error(transparent)]
    Process(#[from] mj_io::error::Error),

    /// A test-case fixture is missing or malformed.
    #[error("broken test-case fixture: {0}")]
    Fixture(String),
}
