//! Statistic use cases on top of a [`StatisticRepository`].
use std::sync::Arc;

use thiserror::Error;

use super::{NewStatisticData, Statistic};
use crate::error::ValidationError;
use crate::repository::{RepositoryError, StatisticRepository};

pub type Result<T> = std::result::Result<T, StatisticError>;

#[derive(Debug, Error)]
pub enum StatisticError {
    #[error("invalid statistic: {0}")]
    Invalid(#[from] ValidationError),

    #[error("invalid statistic id: {0}")]
    InvalidId(String),

    #[error("statistic not found")]
    NotFound,

    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for StatisticError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound => Self::NotFound,
            RepositoryError::InvalidId(id) => Self::InvalidId(id),
            other => Self::Repository(other),
        }
    }
}

/// Creates, reads, and soft-deletes statistic definitions.
#[derive(Clone)]
pub struct StatisticService {
    repository: Arc<dyn StatisticRepository>,
}

impl StatisticService {
    pub fn new(repository: Arc<dyn StatisticRepository>) -> Self {
        Self { repository }
    }

    /// Validate and store a new statistic.
    ///
    /// The repository is not called when validation fails.
    pub async fn create(&self, data: NewStatisticData) -> Result<Statistic> {
        let statistic = data.validate()?;
        let created = self.repository.create(statistic).await?;

        tracing::info!(
            statistic_id = %created.id,
            game_id = %created.game_id,
            "statistic created"
        );
        Ok(created)
    }

    pub async fn get(&self, id: &str, game_id: &str) -> Result<Statistic> {
        Ok(self.repository.get_by_id_and_game_id(id, game_id).await?)
    }

    pub async fn soft_delete(&self, id: &str, game_id: &str) -> Result<()> {
        self.repository
            .soft_delete_by_id_and_game_id(id, game_id)
            .await?;

        tracing::info!(statistic_id = %id, game_id = %game_id, "statistic deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::repository;
    use crate::statistic::NewStatistic;

    /// Repository stub that records calls and answers with a fixed error.
    #[derive(Default)]
    struct StubRepository {
        created: Mutex<Vec<NewStatistic>>,
        error: Mutex<Option<RepositoryError>>,
    }

    impl StubRepository {
        fn failing(error: RepositoryError) -> Self {
            Self {
                error: Mutex::new(Some(error)),
                ..Self::default()
            }
        }

        fn take_error(&self) -> repository::Result<()> {
            match self.error.lock().unwrap().take() {
                Some(error) => Err(error),
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl StatisticRepository for StubRepository {
        async fn create(&self, statistic: NewStatistic) -> repository::Result<Statistic> {
            self.take_error()?;
            self.created.lock().unwrap().push(statistic.clone());
            Ok(statistic.into_statistic("stat-1".to_string()))
        }

        async fn get_by_id_and_game_id(
            &self,
            id: &str,
            _game_id: &str,
        ) -> repository::Result<Statistic> {
            self.take_error()?;
            Err(RepositoryError::InvalidId(id.to_string()))
        }

        async fn soft_delete_by_id_and_game_id(
            &self,
            _id: &str,
            _game_id: &str,
        ) -> repository::Result<()> {
            self.take_error()
        }
    }

    fn data() -> NewStatisticData {
        NewStatisticData {
            game_id: "game-1".to_string(),
            name: "Deaths".to_string(),
            aggregation_mode: "MIN".to_string(),
            ..NewStatisticData::default()
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id() {
        let repository = Arc::new(StubRepository::default());
        let service = StatisticService::new(repository.clone());

        let statistic = service.create(data()).await.unwrap();
        assert_eq!(statistic.id, "stat-1");
        assert_eq!(statistic.game_id, "game-1");
        assert_eq!(repository.created.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_validation_skips_repository() {
        let repository = Arc::new(StubRepository::default());
        let service = StatisticService::new(repository.clone());

        let err = service
            .create(NewStatisticData::default())
            .await
            .unwrap_err();
        assert!(matches!(err, StatisticError::Invalid(_)));
        assert!(repository.created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_repository_errors_are_classified() {
        let service =
            StatisticService::new(Arc::new(StubRepository::failing(RepositoryError::NotFound)));
        assert!(matches!(
            service.get("id", "game-1").await,
            Err(StatisticError::NotFound)
        ));

        let service = StatisticService::new(Arc::new(StubRepository::default()));
        assert!(matches!(
            service.get("bad", "game-1").await,
            Err(StatisticError::InvalidId(id)) if id == "bad"
        ));

        let service = StatisticService::new(Arc::new(StubRepository::failing(
            RepositoryError::Backend("down".to_string()),
        )));
        assert!(matches!(
            service.soft_delete("id", "game-1").await,
            Err(StatisticError::Repository(RepositoryError::Backend(_)))
        ));
    }
}
