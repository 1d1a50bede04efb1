use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use metagaming_core::repository::Result;
use metagaming_core::{Ordering, Rank, RankRepository, RepositoryError};

type Board = HashMap<String, f64>;

/// In-memory implementation of RankRepository.
///
/// Values are kept per leaderboard, keyed by player. Every update takes the
/// write lock, so concurrent updates to one player never interleave.
pub struct InMemoryRankRepository {
    boards: RwLock<HashMap<String, Board>>,
}

impl InMemoryRankRepository {
    pub fn new() -> Self {
        Self {
            boards: RwLock::new(HashMap::new()),
        }
    }

    /// Combine `value` with the player's stored value, inserting it when absent.
    fn update(
        &self,
        leaderboard_id: &str,
        player_id: &str,
        value: f64,
        combine: impl FnOnce(f64, f64) -> f64,
    ) -> Result<()> {
        let mut boards = self
            .boards
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        let board = boards.entry(leaderboard_id.to_owned()).or_default();
        board
            .entry(player_id.to_owned())
            .and_modify(|current| *current = combine(*current, value))
            .or_insert(value);
        Ok(())
    }
}

impl Default for InMemoryRankRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RankRepository for InMemoryRankRepository {
    async fn increment_value(&self, leaderboard_id: &str, player_id: &str, value: f64)
    -> Result<()> {
        self.update(leaderboard_id, player_id, value, |current, value| current + value)
    }

    async fn set_if_greater(&self, leaderboard_id: &str, player_id: &str, value: f64) -> Result<()> {
        self.update(leaderboard_id, player_id, value, f64::max)
    }

    async fn set_if_lesser(&self, leaderboard_id: &str, player_id: &str, value: f64) -> Result<()> {
        self.update(leaderboard_id, player_id, value, f64::min)
    }

    async fn fetch_page(
        &self,
        leaderboard_id: &str,
        ordering: Ordering,
        page: i64,
        limit: i64,
    ) -> Result<Vec<Rank>> {
        let boards = self
            .boards
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let Some(board) = boards.get(leaderboard_id) else {
            return Ok(Vec::new());
        };

        let mut ranks: Vec<Rank> = board
            .iter()
            .map(|(player_id, value)| Rank::new(player_id.clone(), *value))
            .collect();

        // Ties are broken by player id so pages stay stable between reads.
        ranks.sort_by(|a, b| {
            let by_value = match ordering {
                Ordering::Asc => a.value.total_cmp(&b.value),
                Ordering::Desc => b.value.total_cmp(&a.value),
            };
            by_value.then_with(|| a.player_id.cmp(&b.player_id))
        });

        let limit = usize::try_from(limit).unwrap_or(0);
        let skip = usize::try_from(page)
            .unwrap_or(0)
            .saturating_mul(limit);

        Ok(ranks.into_iter().skip(skip).take(limit).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_increment_accumulates() {
        let repo = InMemoryRankRepository::new();
        repo.increment_value("lb", "p1", 2.0).await.unwrap();
        repo.increment_value("lb", "p1", 3.5).await.unwrap();

        let page = repo.fetch_page("lb", Ordering::Desc, 0, 10).await.unwrap();
        assert_eq!(page, vec![Rank::new("p1", 5.5)]);
    }

    #[tokio::test]
    async fn test_set_if_greater_keeps_max() {
        let repo = InMemoryRankRepository::new();
        repo.set_if_greater("lb", "p1", 10.0).await.unwrap();
        repo.set_if_greater("lb", "p1", 4.0).await.unwrap();
        repo.set_if_greater("lb", "p1", 12.0).await.unwrap();

        let page = repo.fetch_page("lb", Ordering::Desc, 0, 10).await.unwrap();
        assert_eq!(page, vec![Rank::new("p1", 12.0)]);
    }

    #[tokio::test]
    async fn test_set_if_lesser_keeps_min() {
        let repo = InMemoryRankRepository::new();
        repo.set_if_lesser("lb", "p1", 10.0).await.unwrap();
        repo.set_if_lesser("lb", "p1", 14.0).await.unwrap();
        repo.set_if_lesser("lb", "p1", -2.0).await.unwrap();

        let page = repo.fetch_page("lb", Ordering::Asc, 0, 10).await.unwrap();
        assert_eq!(page, vec![Rank::new("p1", -2.0)]);
    }

    #[tokio::test]
    async fn test_pages_follow_ordering() {
        let repo = InMemoryRankRepository::new();
        for (player, value) in [("a", 3.0), ("b", 1.0), ("c", 2.0), ("d", 5.0), ("e", 4.0)] {
            repo.set_if_greater("lb", player, value).await.unwrap();
        }

        let desc = repo.fetch_page("lb", Ordering::Desc, 0, 2).await.unwrap();
        assert_eq!(desc, vec![Rank::new("d", 5.0), Rank::new("e", 4.0)]);

        let asc = repo.fetch_page("lb", Ordering::Asc, 1, 2).await.unwrap();
        assert_eq!(asc, vec![Rank::new("a", 3.0), Rank::new("e", 4.0)]);

        let tail = repo.fetch_page("lb", Ordering::Asc, 2, 2).await.unwrap();
        assert_eq!(tail, vec![Rank::new("d", 5.0)]);

        let past_end = repo.fetch_page("lb", Ordering::Asc, 9, 2).await.unwrap();
        assert!(past_end.is_empty());
    }

    #[tokio::test]
    async fn test_leaderboards_are_isolated() {
        let repo = InMemoryRankRepository::new();
        repo.increment_value("lb-1", "p1", 1.0).await.unwrap();

        assert!(
            repo.fetch_page("lb-2", Ordering::Desc, 0, 10)
                .await
                .unwrap()
                .is_empty()
        );
    }
}
