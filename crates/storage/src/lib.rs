//! Repository implementations for the metagaming domain.
//!
//! Two backends implement the traits from `metagaming_core::repository`:
//! - [`memory`]: lock-guarded maps for tests and local runs
//! - [`mongo`]: MongoDB collections for production
//!
//! Both assign ids as MongoDB ObjectId hex strings, so an id minted by one
//! backend is well-formed for the other.
pub mod error;
pub mod memory;
pub mod mongo;

mod ids;

pub use error::StorageError;
pub use memory::{InMemoryLeaderboardRepository, InMemoryRankRepository, InMemoryStatisticRepository};
pub use mongo::{
    MongoConnection, MongoLeaderboardRepository, MongoRankRepository, MongoStatisticRepository,
};
