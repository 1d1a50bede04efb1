//! Domain layer for the metagaming API.
//!
//! This crate owns the value objects, validation rules, and services behind the
//! statistics and leaderboard endpoints. Persistence is reached only through the
//! repository traits in [`repository`], so services can be driven by MongoDB in
//! production and by in-memory stores in tests.
//!
//! Modules are organized by responsibility:
//! - [`statistic`] and [`leaderboard`] hold the CRUD services for each resource
//! - [`ranking`] hosts the rank upsert selector and the ranking page reader
//! - [`repository`] defines the collaborator contracts and their error type
//! - [`types`] and [`error`] hold the enums and validation errors shared by all
pub mod error;
pub mod leaderboard;
pub mod ranking;
pub mod repository;
pub mod statistic;
pub mod types;

pub use error::ValidationError;
pub use leaderboard::{
    Leaderboard, LeaderboardError, LeaderboardService, NewLeaderboard, NewLeaderboardData,
};
pub use ranking::{
    MAX_LIMIT_NUMBER, MIN_LIMIT_NUMBER, MIN_PAGE_NUMBER, PageLimits, Rank, RankingError,
    RankingService,
};
pub use repository::{LeaderboardRepository, RankRepository, RepositoryError, StatisticRepository};
pub use statistic::{NewStatistic, NewStatisticData, Statistic, StatisticError, StatisticService};
pub use types::{AggregationMode, Ordering};
