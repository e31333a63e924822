//! CLI error types.

/// CLI errors.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Configuration loading failed.
    #[error(transparent)]
    Config(#[from] mj_config::error::Error),

    /// Judging failed.
    #[error(transparent)]
    Judge(#[from] mj_judge::error::Error),

    /// JSON serialization failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// CLI result type.
pub type Result<T> = core::result::Result<T, Error>;
