//! Repository layer for persisted metagaming data.
//!
//! Repositories own everything that touches storage:
//! - Statistic and leaderboard definitions (create, lookup, soft delete)
//! - Player ranks (atomic aggregation updates, ordered pages)
//!
//! Services in this crate only see these traits. Implementations live in the
//! storage crate.

mod error;
mod traits;

pub use error::{RepositoryError, Result};
pub use traits::{LeaderboardRepository, RankRepository, StatisticRepository};
