use async_trait::async_trait;
use metagaming_core::repository::Result;
use metagaming_core::{NewStatistic, RepositoryError, Statistic, StatisticRepository};
use mongodb::Collection;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{self, doc};

use super::backend;
use super::documents::StatisticDocument;
use crate::ids;

/// MongoDB implementation of StatisticRepository.
#[derive(Clone, Debug)]
pub struct MongoStatisticRepository {
    collection: Collection<StatisticDocument>,
}

impl MongoStatisticRepository {
    pub(crate) fn new(collection: Collection<StatisticDocument>) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl StatisticRepository for MongoStatisticRepository {
    async fn create(&self, statistic: NewStatistic) -> Result<Statistic> {
        let id = ObjectId::new();
        let document = StatisticDocument::new(id, &statistic);

        self.collection.insert_one(document).await.map_err(backend)?;
        Ok(statistic.into_statistic(id.to_hex()))
    }

    async fn get_by_id_and_game_id(&self, id: &str, game_id: &str) -> Result<Statistic> {
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
