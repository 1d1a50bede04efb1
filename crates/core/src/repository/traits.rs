//! Repository contracts consumed by the services.

use async_trait::async_trait;

use super::Result;
use crate::leaderboard::{Leaderboard, NewLeaderboard};
use crate::ranking::Rank;
use crate::statistic::{NewStatistic, Statistic};
use crate::types::Ordering;

/// Persistence for statistic definitions.
///
/// Lookups are always scoped by game so one game can never read or delete
/// another game's statistics. Soft-deleted statistics behave as missing.
#[async_trait]
pub trait StatisticRepository: Send + Sync {
    /// Store a validated statistic and return it with its assigned id.
    async fn create(&self, statistic: NewStatistic) -> Result<Statistic>;

    /// Load a live statistic.
    ///
    /// Returns `InvalidId` when `id` is malformed and `NotFound` when no live
    /// statistic matches.
    async fn get_by_id_and_game_id(&self, id: &str, game_id: &str) -> Result<Statistic>;

    /// Mark a live statistic as deleted.
    async fn soft_delete_by_id_and_game_id(&self, id: &str, game_id: &str) -> Result<()>;
}

/// Persistence for leaderboard definitions.
///
/// Same scoping and soft-delete rules as [`StatisticRepository`].
#[async_trait]
pub trait LeaderboardRepository: Send + Sync {
    async fn create(&self, leaderboard: NewLeaderboard) -> Result<Leaderboard>;

    async fn get_by_id_and_game_id(&self, id: &str, game_id: &str) -> Result<Leaderboard>;

    async fn soft_delete_by_id_and_game_id(&self, id: &str, game_id: &str) -> Result<()>;
}

/// Persistence for player ranks within a leaderboard.
///
/// Each update creates the rank when the player has none yet. Updates must be
/// atomic per (leaderboard, player) pair; the ranking service does not lock.
#[async_trait]
pub trait RankRepository: Send + Sync {
    /// Add `value` to the player's current value.
    async fn increment_value(&self, leaderboard_id: &str, player_id: &str, value: f64)
    -> Result<()>;

    /// Replace the player's value when `value` is greater.
    async fn set_if_greater(&self, leaderboard_id: &str, player_id: &str, value: f64) -> Result<()>;

    /// Replace the player's value when `value` is lesser.
    async fn set_if_lesser(&self, leaderboard_id: &str, player_id: &str, value: f64) -> Result<()>;

    /// Read one page of ranks sorted by value.
    ///
    /// `page` is zero-based and `limit` is the page size. Both were checked by
    /// the caller.
    async fn fetch_page(
        &self,
        leaderboard_id: &str,
        ordering: Ordering,
        page: i64,
        limit: i64,
    ) -> Result<Vec<Rank>>;
}
