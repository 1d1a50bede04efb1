//! Assembles repositories and services from a [`ServerConfig`].
use std::sync::Arc;

use anyhow::Result;
use metagaming_storage::MongoConnection;

use crate::config::{ServerConfig, StorageBackend};
use crate::state::AppState;

/// Builder that picks a storage backend and wires the services onto it.
pub struct AppBuilder {
    config: ServerConfig,
}

impl AppBuilder {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub async fn build(self) -> Result<AppSetup> {
        let limits = self.config.ranking;

        let (state, mongo) = match self.config.storage {
            StorageBackend::Memory => {
                tracing::warn!("using in-memory storage; data is lost on shutdown");
                (AppState::in_memory(limits), None)
            }
            StorageBackend::Mongo => {
                let connection =
                    MongoConnection::connect(&self.config.mongo.uri, &self.config.mongo.database)
                        .await?;
                connection.ensure_indexes().await?;

                let state = AppState::new(
                    Arc::new(connection.statistics()),
                    Arc::new(connection.leaderboards()),
                    Arc::new(connection.ranks()),
                    limits,
                );
                (state, Some(connection))
            }
        };

        Ok(AppSetup {
            config: self.config,
            state,
            mongo,
        })
    }
}

/// Everything `main` needs to serve requests and shut down cleanly.
pub struct AppSetup {
    pub config: ServerConfig,
    pub state: AppState,
    pub mongo: Option<MongoConnection>,
}
