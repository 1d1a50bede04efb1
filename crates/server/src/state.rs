//! Shared application state handed to every handler.
use std::sync::Arc;

use metagaming_core::{
    LeaderboardRepository, LeaderboardService, PageLimits, RankRepository, RankingService,
    StatisticRepository, StatisticService,
};
use metagaming_storage::{
    InMemoryLeaderboardRepository, InMemoryRankRepository, InMemoryStatisticRepository,
};

/// Services behind the REST API. Cloning is cheap; every service holds `Arc`s.
#[derive(Clone)]
pub struct AppState {
    pub statistics: StatisticService,
    pub leaderboards: LeaderboardService,
    pub ranking: RankingService,
}

impl AppState {
    pub fn new(
        statistics: Arc<dyn StatisticRepository>,
        leaderboards: Arc<dyn LeaderboardRepository>,
        ranks: Arc<dyn RankRepository>,
        limits: PageLimits,
    ) -> Self {
        Self {
            statistics: StatisticService::new(statistics),
            leaderboards: LeaderboardService::new(leaderboards),
            ranking: RankingService::new(ranks).with_limits(limits),
        }
    }

    /// State backed by fresh in-memory repositories.
    pub fn in_memory(limits: PageLimits) -> Self {
        Self::new(
            Arc::new(InMemoryStatisticRepository::new()),
            Arc::new(InMemoryLeaderboardRepository::new()),
            Arc::new(InMemoryRankRepository::new()),
            limits,
        )
    }
}
