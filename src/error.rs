//! Error types for the daybook storage engine
//!
//! All errors use thiserror for structured error handling. The calendar
//! service swallows store failures and reports them through its return
//! values (see `services::calendar`); these variants surface at the
//! storage-adapter, backup, and image-search boundaries.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Backup error: {0}")]
    Backup(String),

    #[error("Restore error: {0}")]
    Restore(String),

    #[error("Image search error: {0}")]
    ImageSearch(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
