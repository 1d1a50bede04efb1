//! Errors raised while establishing storage connections.
//!
//! Per-operation failures are reported as `RepositoryError` from the core
//! crate; this type only covers setup.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to connect to MongoDB")]
    Connect(#[source] mongodb::error::Error),

    #[error("MongoDB did not answer ping")]
    Ping(#[source] mongodb::error::Error),

    #[error("failed to create index on `{collection}`")]
    Index {
        collection: &'static str,
        #[source]
        source: mongodb::error::Error,
    },
}

pub type Result<T> = std::result::Result<T, StorageError>;
