//! Rank upsert selector and ranking page reader.
use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::{PageLimits, Rank, RankingError, Result};
use crate::leaderboard::Leaderboard;
use crate::repository::RankRepository;
use crate::types::AggregationMode;

/// Applies player values to leaderboards and reads ranked pages.
#[derive(Clone)]
pub struct RankingService {
    ranks: Arc<dyn RankRepository>,
    limits: PageLimits,
}

impl RankingService {
    pub fn new(ranks: Arc<dyn RankRepository>) -> Self {
        Self {
            ranks,
            limits: PageLimits::default(),
        }
    }

    /// Override the accepted page bounds.
    pub fn with_limits(mut self, limits: PageLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn limits(&self) -> PageLimits {
        self.limits
    }

    /// Apply `value` to the player's rank using the leaderboard's mode.
    pub async fn upsert_player_rank(
        &self,
        leaderboard: &Leaderboard,
        player_id: &str,
        value: f64,
    ) -> Result<()> {
        self.upsert_player_rank_at(leaderboard, player_id, value, Utc::now())
            .await
    }

    /// Same as [`upsert_player_rank`](Self::upsert_player_rank) with an explicit clock.
    ///
    /// A closed leaderboard is rejected before any repository call. Exactly one
    /// update is issued otherwise and its error is returned as is. No retries.
    pub async fn upsert_player_rank_at(
        &self,
        leaderboard: &Leaderboard,
        player_id: &str,
        value: f64,
        now: DateTime<Utc>,
    ) -> Result<()> {
        if leaderboard.is_closed_at(now) {
            return Err(RankingError::LeaderboardClosed {
                leaderboard_id: leaderboard.id.clone(),
            });
        }

        let id = leaderboard.id.as_str();
        match leaderboard.aggregation_mode {
            AggregationMode::Inc => self.ranks.increment_value(id, player_id, value).await?,
            AggregationMode::Max => self.ranks.set_if_greater(id, player_id, value).await?,
            AggregationMode::Min => self.ranks.set_if_lesser(id, player_id, value).await?,
        }

        tracing::debug!(
            leaderboard_id = %id,
            player_id = %player_id,
            mode = %leaderboard.aggregation_mode,
            value,
            "player rank updated"
        );
        Ok(())
    }

    /// Read one zero-based page of the leaderboard in its own ordering.
    pub async fn ranking(
        &self,
        leaderboard: &Leaderboard,
        page: i64,
        limit: i64,
    ) -> Result<Vec<Rank>> {
        self.limits.check(page, limit)?;

        let ranks = self
            .ranks
            .fetch_page(&leaderboard.id, leaderboard.ordering, page, limit)
            .await?;
        Ok(ranks)
    }
}
