//! Leaderboard use cases on top of a [`LeaderboardRepository`].
use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;

use super::{Leaderboard, NewLeaderboardData};
use crate::error::ValidationError;
use crate::repository::{LeaderboardRepository, RepositoryError};

pub type Result<T> = std::result::Result<T, LeaderboardError>;

#[derive(Debug, Error)]
pub enum LeaderboardError {
    #[error("invalid leaderboard: {0}")]
    Invalid(#[from] ValidationError),

    #[error("invalid leaderboard id: {0}")]
    InvalidId(String),

    #[error("leaderboard not found")]
    NotFound,

    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for LeaderboardError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound => Self::NotFound,
            RepositoryError::InvalidId(id) => Self::InvalidId(id),
            other => Self::Repository(other),
        }
    }
}

/// Creates, reads, and soft-deletes leaderboard definitions.
#[derive(Clone)]
pub struct LeaderboardService {
    repository: Arc<dyn LeaderboardRepository>,
}

impl LeaderboardService {
    pub fn new(repository: Arc<dyn LeaderboardRepository>) -> Self {
        Self { repository }
    }

    pub async fn create(&self, data: NewLeaderboardData) -> Result<Leaderboard> {
        let leaderboard = data.validate(Utc::now())?;
        let created = self.repository.create(leaderboard).await?;

        tracing::info!(
            leaderboard_id = %created.id,
            game_id = %created.game_id,
            mode = %created.aggregation_mode,
            "leaderboard created"
        );
        Ok(created)
    }

    pub async fn get(&self, id: &str, game_id: &str) -> Result<Leaderboard> {
        Ok(self.repository.get_by_id_and_game_id(id, game_id).await?)
    }

    pub async fn soft_delete(&self, id: &str, game_id: &str) -> Result<()> {
        self.repository
            .soft_delete_by_id_and_game_id(id, game_id)
            .await?;

        tracing::info!(leaderboard_id = %id, game_id = %game_id, "leaderboard deleted");
        Ok(())
    }
}
