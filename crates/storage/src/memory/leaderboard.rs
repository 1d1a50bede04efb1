use async_trait::async_trait;
use metagaming_core::repository::Result;
use metagaming_core::{Leaderboard, LeaderboardRepository, NewLeaderboard};

use super::{GameScoped, SoftDeleteTable};

impl GameScoped for Leaderboard {
    fn game_id(&self) -> &str {
        &self.game_id
    }
}

/// In-memory implementation of LeaderboardRepository.
pub struct InMemoryLeaderboardRepository {
    table: SoftDeleteTable<Leaderboard>,
}

impl InMemoryLeaderboardRepository {
    pub fn new() -> Self {
        Self {
            table: SoftDeleteTable::new(),
        }
    }
}

impl Default for InMemoryLeaderboardRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LeaderboardRepository for InMemoryLeaderboardRepository {
    async fn create(&self, leaderboard: NewLeaderboard) -> Result<Leaderboard> {
        self.table.insert_with(|id| leaderboard.into_leaderboard(id))
    }

    async fn get_by_id_and_game_id(&self, id: &str, game_id: &str) -> Result<Leaderboard> {
        self.table.get(id, game_id)
    }

    async fn soft_delete_by_id_and_game_id(&self, id: &str, game_id: &str) -> Result<()> {
        self.table.soft_delete(id, game_id)
    }
}
