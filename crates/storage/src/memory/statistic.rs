use async_trait::async_trait;
use metagaming_core::repository::Result;
use metagaming_core::{NewStatistic, Statistic, StatisticRepository};

use super::{GameScoped, SoftDeleteTable};

impl GameScoped for Statistic {
    fn game_id(&self) -> &str {
        &self.game_id
    }
}

/// In-memory implementation of StatisticRepository.
pub struct InMemoryStatisticRepository {
    table: SoftDeleteTable<Statistic>,
}

impl InMemoryStatisticRepository {
    pub fn new() -> Self {
        Self {
            table: SoftDeleteTable::new(),
        }
    }
}

impl Default for InMemoryStatisticRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StatisticRepository for InMemoryStatisticRepository {
    async fn create(&self, statistic: NewStatistic) -> Result<Statistic> {
        self.table.insert_with(|id| statistic.into_statistic(id))
    }

    async fn get_by_id_and_game_id(&self, id: &str, game_id: &str) -> Result<Statistic> {
        self.table.get(id, game_id)
    }

    async fn soft_delete_by_id_and_game_id(&self, id: &str, game_id: &str) -> Result<()> {
        self.table.soft_delete(id, game_id)
    }
}
