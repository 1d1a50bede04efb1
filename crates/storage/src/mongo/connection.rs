//! Client setup and collection handles.
use mongodb::bson::doc;
use mongodb::options::IndexOptions;
use mongodb::{Client, Database, IndexModel};

use super::documents::RankDocument;
use super::{
    LEADERBOARDS, MongoLeaderboardRepository, MongoRankRepository, MongoStatisticRepository,
    RANKS, STATISTICS,
};
use crate::error::{Result, StorageError};

/// An open, verified connection to one MongoDB database.
#[derive(Clone, Debug)]
pub struct MongoConnection {
    client: Client,
    database: Database,
}

impl MongoConnection {
    /// Connect with `uri` and ping `database` before handing the connection out.
    pub async fn connect(uri: &str, database: &str) -> Result<Self> {
        let client = Client::with_uri_str(uri)
            .await
            .map_err(StorageError::Connect)?;
        let database = client.database(database);

        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(StorageError::Ping)?;

        tracing::info!(database = %database.name(), "connected to MongoDB");
        Ok(Self { client, database })
    }

    /// Create the indexes rank reads and upserts rely on.
    ///
    /// The unique (leaderboard, player) index keeps concurrent upserts from
    /// inserting two documents for one player.
    pub async fn ensure_indexes(&self) -> Result<()> {
        let ranks = self.database.collection::<RankDocument>(RANKS);

        let unique_player = IndexModel::builder()
            .keys(doc! { "leaderboardId": 1, "playerId": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        let by_value = IndexModel::builder()
            .keys(doc! { "leaderboardId": 1, "value": -1 })
            .build();

        ranks
            .create_indexes([unique_player, by_value])
            .await
            .map_err(|source| StorageError::Index {
                collection: RANKS,
                source,
            })?;
        Ok(())
    }

    pub fn statistics(&self) -> MongoStatisticRepository {
        MongoStatisticRepository::new(self.database.collection(STATISTICS))
    }

    pub fn leaderboards(&self) -> MongoLeaderboardRepository {
        MongoLeaderboardRepository::new(self.database.collection(LEADERBOARDS))
    }

    pub fn ranks(&self) -> MongoRankRepository {
        MongoRankRepository::new(self.database.collection(RANKS))
    }

    /// Shut the client down, waiting for in-flight operations.
    pub async fn close(self) {
        self.client.shutdown().await;
        tracing::info!("MongoDB connection closed");
    }
}
