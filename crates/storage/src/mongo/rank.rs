use async_trait::async_trait;
use futures::TryStreamExt;
use metagaming_core::repository::Result;
use metagaming_core::{Ordering, Rank, RankRepository};
use mongodb::Collection;
use mongodb::bson::{Document, doc};

use super::backend;
use super::documents::RankDocument;

/// MongoDB implementation of RankRepository.
///
/// Each update is a single `update_one` with `upsert(true)`, so the server
/// applies the aggregation atomically per document.
#[derive(Clone, Debug)]
pub struct MongoRankRepository {
    collection: Collection<RankDocument>,
}

impl MongoRankRepository {
    pub(crate) fn new(collection: Collection<RankDocument>) -> Self {
        Self { collection }
    }

    async fn upsert(
        &self,
        operator: &str,
        leaderboard_id: &str,
        player_id: &str,
        value: f64,
    ) -> Result<()> {
        let filter = doc! { "leaderboardId": leaderboard_id, "playerId": player_id };
        let mut update = Document::new();
        update.insert(operator, doc! { "value": value });

        self.collection
            .update_one(filter, update)
            .upsert(true)
            .await
            .map_err(backend)?;
        Ok(())
    }
}

#[async_trait]
impl RankRepository for MongoRankRepository {
    async fn increment_value(&self, leaderboard_id: &str, player_id: &str, value: f64)
    -> Result<()> {
        self.upsert("$inc", leaderboard_id, player_id, value).await
    }

    async fn set_if_greater(&self, leaderboard_id: &str, player_id: &str, value: f64) -> Result<()> {
        self.upsert("$max", leaderboard_id, player_id, value).await
    }

    async fn set_if_lesser(&self, leaderboard_id: &str, player_id: &str, value: f64) -> Result<()> {
        self.upsert("$min", leaderboard_id, player_id, value).await
    }

    async fn fetch_page(
        &self,
        leaderboard_id: &str,
        ordering: Ordering,
        page: i64,
        limit: i64,
    ) -> Result<Vec<Rank>> {
        let skip = u64::try_from(page.saturating_mul(limit)).unwrap_or(0);

        let cursor = self
            .collection
            .find(doc! { "leaderboardId": leaderboard_id })
            .sort(doc! { "value": ordering.direction(), "playerId": 1 })
            .skip(skip)
            .limit(limit)
            .await
            .map_err(backend)?;

        let documents: Vec<RankDocument> = cursor.try_collect().await.map_err(backend)?;
        Ok(documents.into_iter().map(Rank::from).collect())
    }
}
