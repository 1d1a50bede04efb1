//! Player rankings inside a leaderboard.
//!
//! [`RankingService`] has two operations:
//! - the upsert selector, which checks the leaderboard window and dispatches
//!   the value to the repository update matching the aggregation mode
//! - the page reader, which checks page bounds and delegates the ordered read
//!
//! Neither keeps state between calls. Atomicity of concurrent updates is left to
//! the [`RankRepository`](crate::repository::RankRepository) implementation.

mod service;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::repository::RepositoryError;

pub use service::RankingService;

/// Lowest accepted page number; pages are zero-based.
pub const MIN_PAGE_NUMBER: i64 = 0;
/// Smallest accepted page size.
pub const MIN_LIMIT_NUMBER: i64 = 1;
/// Largest accepted page size.
pub const MAX_LIMIT_NUMBER: i64 = 100;

/// A player's aggregated value within one leaderboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rank {
    pub player_id: String,
    pub value: f64,
}

impl Rank {
    pub fn new(player_id: impl Into<String>, value: f64) -> Self {
        Self {
            player_id: player_id.into(),
            value,
        }
    }
}

pub type Result<T> = std::result::Result<T, RankingError>;

#[derive(Debug, Error)]
pub enum RankingError {
    #[error("leaderboard {leaderboard_id} is closed")]
    LeaderboardClosed { leaderboard_id: String },

    #[error("page number {page} is lower than {min}")]
    InvalidPageNumber { page: i64, min: i64 },

    #[error("limit {limit} is outside [{min}, {max}]")]
    InvalidLimitNumber { limit: i64, min: i64, max: i64 },

    /// Collaborator failure, passed through untouched.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Accepted bounds for ranking pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageLimits {
    pub min_page: i64,
    pub min_limit: i64,
    pub max_limit: i64,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            min_page: MIN_PAGE_NUMBER,
            min_limit: MIN_LIMIT_NUMBER,
            max_limit: MAX_LIMIT_NUMBER,
        }
    }
}

impl PageLimits {
    /// Check a page request against these bounds. The page is checked first.
    pub fn check(&self, page: i64, limit: i64) -> Result<()> {
        if page < self.min_page {
            return Err(RankingError::InvalidPageNumber {
                page,
                min: self.min_page,
            });
        }
        if limit < self.min_limit || limit > self.max_limit {
            return Err(RankingError::InvalidLimitNumber {
                limit,
                min: self.min_limit,
                max: self.max_limit,
            });
        }
        Ok(())
    }
}
