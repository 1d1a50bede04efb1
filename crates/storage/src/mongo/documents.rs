//! BSON document shapes and their conversion to domain values.
//!
//! Enumerations are stored as their wire spelling and parsed on the way out,
//! so a document holding an unknown mode is reported as corrupted instead of
//! reaching the services.

use chrono::{DateTime, Utc};
use metagaming_core::{
    AggregationMode, Leaderboard, NewLeaderboard, NewStatistic, Ordering, Rank, RepositoryError,
    Statistic,
};
use mongodb::bson;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StatisticDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub game_id: String,
    pub name: String,
    pub description: String,
    pub aggregation_mode: String,
    pub goal: Option<f64>,
    pub landmarks: Vec<f64>,
    pub can_overflow: bool,
    pub deleted_at: Option<bson::DateTime>,
}

impl StatisticDocument {
    pub fn new(id: ObjectId, statistic: &NewStatistic) -> Self {
        Self {
            id,
            game_id: statistic.game_id.clone(),
            name: statistic.name.clone(),
            description: statistic.description.clone(),
            aggregation_mode: statistic.aggregation_mode.to_string(),
            goal: statistic.goal,
            landmarks: statistic.landmarks.clone(),
            can_overflow: statistic.can_overflow,
            deleted_at: None,
        }
    }
}

impl TryFrom<StatisticDocument> for Statistic {
    type Error = RepositoryError;

    fn try_from(document: StatisticDocument) -> Result<Self, Self::Error> {
        Ok(Statistic {
            id: document.id.to_hex(),
            game_id: document.game_id,
            name: document.name,
            description: document.description,
            aggregation_mode: parse_mode(&document.aggregation_mode)?,
            goal: document.goal,
            landmarks: document.landmarks,
            can_overflow: document.can_overflow,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LeaderboardDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub game_id: String,
    pub name: String,
    pub description: String,
    pub aggregation_mode: String,
    pub ordering: String,
    pub start_at: bson::DateTime,
    pub end_at: Option<bson::DateTime>,
    pub deleted_at: Option<bson::DateTime>,
}

impl LeaderboardDocument {
    pub fn new(id: ObjectId, leaderboard: &NewLeaderboard) -> Self {
        Self {
            id,
            game_id: leaderboard.game_id.clone(),
            name: leaderboard.name.clone(),
            description: leaderboard.description.clone(),
            aggregation_mode: leaderboard.aggregation_mode.to_string(),
            ordering: leaderboard.ordering.to_string(),
            start_at: to_bson_datetime(leaderboard.start_at),
            end_at: leaderboard.end_at.map(to_bson_datetime),
            deleted_at: None,
        }
    }
}

impl TryFrom<LeaderboardDocument> for Leaderboard {
    type Error = RepositoryError;

    fn try_from(document: LeaderboardDocument) -> Result<Self, Self::Error> {
        let ordering = Ordering::parse(&document.ordering)
            .map_err(|_| RepositoryError::InvalidOrdering(document.ordering.clone()))?;

        Ok(Leaderboard {
            id: document.id.to_hex(),
            game_id: document.game_id,
            name: document.name,
            description: document.description,
            aggregation_mode: parse_mode(&document.aggregation_mode)?,
            ordering,
            start_at: from_bson_datetime(document.start_at)?,
            end_at: document.end_at.map(from_bson_datetime).transpose()?,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RankDocument {
    pub leaderboard_id: String,
    pub player_id: String,
    pub value: f64,
}

impl From<RankDocument> for Rank {
    fn from(document: RankDocument) -> Self {
        Rank::new(document.player_id, document.value)
    }
}

fn parse_mode(raw: &str) -> Result<AggregationMode, RepositoryError> {
    AggregationMode::parse(raw)
        .map_err(|_| RepositoryError::InvalidAggregationMode(raw.to_owned()))
}

pub(crate) fn to_bson_datetime(value: DateTime<Utc>) -> bson::DateTime {
    bson::DateTime::from_millis(value.timestamp_millis())
}

fn from_bson_datetime(value: bson::DateTime) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::from_timestamp_millis(value.timestamp_millis()).ok_or_else(|| {
        RepositoryError::CorruptedData(format!("timestamp out of range: {value}"))
    })
}
