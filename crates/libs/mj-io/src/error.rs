//! Process management error types.

use std::io;

/// Process management errors.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed.
    #[error(transparent)]
    IO(#[from] io::Error),

    /// Failed to spawn the process.
    #[error("failed to spawn process: {0}")]
    Spawn(#[source] io::Error),

    /// Failed to wait for a child process.
    #[error("failed to wait for child process: {0}")]
    Wait(#[source] io::Error),

    /// Failed to kill a child process.
    #[error("failed to kill child process: {0}")]
    Kill(#[source] io::Error),
}
