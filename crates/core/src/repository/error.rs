//! Error types raised by repository implementations.

use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,

    #[error("invalid id: {0}")]
    InvalidId(String),

    #[error("invalid aggregation mode: {0}")]
    InvalidAggregationMode(String),

    #[error("invalid ordering: {0}")]
    InvalidOrdering(String),

    #[error("repository lock was poisoned")]
    LockPoisoned,

    #[error("corrupted data: {0}")]
    CorruptedData(String),

    #[error("storage backend error: {0}")]
    Backend(String),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
