//! MongoDB-backed repositories.
//!
//! Collections:
//! - `statistics` and `leaderboards`: one document per definition, soft
//!   deleted through `deletedAt`
//! - `ranks`: one document per (leaderboard, player) pair, updated in place
//!   with `$inc`, `$max`, and `$min` upserts

mod connection;
mod documents;
mod leaderboard;
mod rank;
mod statistic;

pub use connection::MongoConnection;
pub use leaderboard::MongoLeaderboardRepository;
pub use rank::MongoRankRepository;
pub use statistic::MongoStatisticRepository;

use metagaming_core::RepositoryError;

pub(crate) const STATISTICS: &str = "statistics";
pub(crate) const LEADERBOARDS: &str = "leaderboards";
pub(crate) const RANKS: &str = "ranks";

pub(crate) fn backend(error: mongodb::error::Error) -> RepositoryError {
    RepositoryError::Backend(error.to_string())
}
