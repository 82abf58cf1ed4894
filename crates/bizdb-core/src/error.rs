// crates/bizdb-core/src/error.rs
use thiserror::Error;

/// Errors surfaced by loading, caching and fetching.
///
/// Per-line parse failures in NDJSON sources are *not* represented here:
/// they are recovered locally by the loader (skip and log).
#[derive(Debug, Error)]
pub enum BizError {
    #[error("dataset not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary cache error: {0}")]
    Bincode(#[from] bincode::Error),

    #[cfg(feature = "fetch")]
    #[error("download failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, BizError>;
