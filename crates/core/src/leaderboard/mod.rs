//! Leaderboards: ranked player values collected during a time window.

mod service;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{self, ValidationError};
use crate::types::{AggregationMode, Ordering};

pub use service::{LeaderboardError, LeaderboardService, Result};

/// A persisted leaderboard definition.
///
/// Immutable input to ranking operations. `end_at` of `None` means the
/// leaderboard never closes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leaderboard {
    pub id: String,
    pub game_id: String,
    pub name: String,
    pub description: String,
    pub aggregation_mode: AggregationMode,
    pub ordering: Ordering,
    pub start_at: DateTime<Utc>,
    pub end_at: Option<DateTime<Utc>>,
}

impl Leaderboard {
    /// Whether the update window has ended at `now`.
    pub fn is_closed_at(&self, now: DateTime<Utc>) -> bool {
        self.end_at.is_some_and(|end_at| end_at < now)
    }
}

/// Raw leaderboard creation input, as received from a client.
#[derive(Clone, Debug, Default)]
pub struct NewLeaderboardData {
    pub game_id: String,
    pub name: String,
    pub description: String,
    pub aggregation_mode: String,
    pub ordering: String,
    pub start_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
}

/// A validated leaderboard that has not been stored yet.
#[derive(Clone, Debug, PartialEq)]
pub struct NewLeaderboard {
    pub game_id: String,
    pub name: String,
    pub description: String,
    pub aggregation_mode: AggregationMode,
    pub ordering: Ordering,
    pub start_at: DateTime<Utc>,
    pub end_at: Option<DateTime<Utc>>,
}

impl NewLeaderboardData {
    /// Check the raw input and convert it into a [`NewLeaderboard`].
    ///
    /// A missing start time defaults to `now`.
    pub fn validate(self, now: DateTime<Utc>) -> error::Result<NewLeaderboard> {
        error::require("gameId", &self.game_id)?;
        error::require("name", &self.name)?;
        let aggregation_mode = AggregationMode::parse(&self.aggregation_mode)?;
        let ordering = Ordering::parse(&self.ordering)?;

        let start_at = self.start_at.unwrap_or(now);
        if self.end_at.is_some_and(|end_at| end_at <= start_at) {
            return Err(ValidationError::EndBeforeStart);
        }

        Ok(NewLeaderboard {
            game_id: self.game_id,
            name: self.name.trim().to_owned(),
            description: self.description,
            aggregation_mode,
            ordering,
            start_at,
            end_at: self.end_at,
        })
    }
}

impl NewLeaderboard {
    /// Attach the id assigned by storage.
    pub fn into_leaderboard(self, id: String) -> Leaderboard {
        Leaderboard {
            id,
            game_id: self.game_id,
            name: self.name,
            description: self.description,
            aggregation_mode: self.aggregation_mode,
            ordering: self.ordering,
            start_at: self.start_at,
            end_at: self.end_at,
        }
    }
}
