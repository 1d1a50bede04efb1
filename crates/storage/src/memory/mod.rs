//! In-memory repository implementations for testing and local development.

mod leaderboard;
mod rank;
mod statistic;

use std::collections::HashMap;
use std::sync::RwLock;

use metagaming_core::RepositoryError;
use metagaming_core::repository::Result;

use crate::ids;

pub use leaderboard::InMemoryLeaderboardRepository;
pub use rank::InMemoryRankRepository;
pub use statistic::InMemoryStatisticRepository;

/// Records that belong to a single game.
trait GameScoped {
    fn game_id(&self) -> &str;
}

struct Entry<T> {
    record: T,
    deleted: bool,
}

/// Id-keyed table with game scoping and soft delete.
struct SoftDeleteTable<T> {
    entries: RwLock<HashMap<String, Entry<T>>>,
}

impl<T> SoftDeleteTable<T>
where
    T: GameScoped + Clone,
{
    fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Build a record under a freshly generated id and store it.
    fn insert_with(&self, build: impl FnOnce(String) -> T) -> Result<T> {
        let id = ids::generate();
        let record = build(id.clone());

        let mut entries = self
            .entries
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        entries.insert(
            id,
            Entry {
                record: record.clone(),
                deleted: false,
            },
        );
        Ok(record)
    }

    fn get(&self, id: &str, game_id: &str) -> Result<T> {
        ids::parse(id)?;

        let entries = self
            .entries
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        entries
            .get(id)
            .filter(|entry| !entry.deleted && entry.record.game_id() == game_id)
            .map(|entry| entry.record.clone())
            .ok_or(RepositoryError::NotFound)
    }

    fn soft_delete(&self, id: &str, game_id: &str) -> Result<()> {
        ids::parse(id)?;

        let mut entries = self
            .entries
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let entry = entries
            .get_mut(id)
            .filter(|entry| !entry.deleted && entry.record.game_id() == game_id)
            .ok_or(RepositoryError::NotFound)?;

        entry.deleted = true;
        Ok(())
    }
}
