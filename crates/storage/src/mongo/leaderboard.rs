use async_trait::async_trait;
use metagaming_core::repository::Result;
use metagaming_core::{Leaderboard, LeaderboardRepository, NewLeaderboard, RepositoryError};
use mongodb::Collection;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{self, doc};

use super::backend;
use super::documents::LeaderboardDocument;
use crate::ids;

/// MongoDB implementation of LeaderboardRepository.
#[derive(Clone, Debug)]
pub struct MongoLeaderboardRepository {
    collection: Collection<LeaderboardDocument>,
}

impl MongoLeaderboardRepository {
    pub(crate) fn new(collection: Collection<LeaderboardDocument>) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl LeaderboardRepository for MongoLeaderboardRepository {
    async fn create(&self, leaderboard: NewLeaderboard) -> Result<Leaderboard> {
        let id = ObjectId::new();
        let document = LeaderboardDocument::new(id, &leaderboard);

        self.collection.insert_one(document).await.map_err(backend)?;
        Ok(leaderboard.into_leaderboard(id.to_hex()))
    }

    async fn get_by_id_and_game_id(&self, id: &str, game_id: &str) -> Result<Leaderboard> {
        let filter = doc! { "_id": ids::parse(id)?, "gameId": game_id, "deletedAt": null };

        let document = self
            .collection
            .find_one(filter)
            .await
            .map_err(backend)?
            .ok_or(RepositoryError::NotFound)?;
        document.try_into()
    }

    async fn soft_delete_by_id_and_game_id(&self, id: &str, game_id: &str) -> Result<()> {
        let filter = doc! { "_id": ids::parse(id)?, "gameId": game_id, "deletedAt": null };
        let update = doc! { "$set": { "deletedAt": bson::DateTime::now() } };

        let result = self
            .collection
            .update_one(filter, update)
            .await
            .map_err(backend)?;
        if result.matched_count == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
