//! Game statistics: tracked player metrics with an optional goal.
//!
//! A statistic is defined once per game and aggregates player values with the
//! same [`AggregationMode`] rules used by leaderboards. Landmarks mark
//! intermediate milestones on the way to the goal.

mod service;

use serde::{Deserialize, Serialize};

use crate::error::{self, ValidationError};
use crate::types::AggregationMode;

pub use service::{Result, StatisticError, StatisticService};

/// A persisted statistic definition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistic {
    pub id: String,
    pub game_id: String,
    pub name: String,
    pub description: String,
    pub aggregation_mode: AggregationMode,
    pub goal: Option<f64>,
    pub landmarks: Vec<f64>,
    pub can_overflow: bool,
}

/// Raw statistic creation input, as received from a client.
#[derive(Clone, Debug, Default)]
pub struct NewStatisticData {
    pub game_id: String,
    pub name: String,
    pub description: String,
    pub aggregation_mode: String,
    pub goal: Option<f64>,
    pub landmarks: Vec<f64>,
    pub can_overflow: bool,
}

/// A validated statistic that has not been stored yet.
#[derive(Clone, Debug, PartialEq)]
pub struct NewStatistic {
    pub game_id: String,
    pub name: String,
    pub description: String,
    pub aggregation_mode: AggregationMode,
    pub goal: Option<f64>,
    pub landmarks: Vec<f64>,
    pub can_overflow: bool,
}

impl NewStatisticData {
    /// Check the raw input and convert it into a [`NewStatistic`].
    ///
    /// Rules:
    /// - `game_id` and `name` are required
    /// - `aggregation_mode` must be one of `INC`, `MAX`, `MIN`
    /// - goal and landmarks must be finite
    /// - without overflow, no landmark may exceed the goal
    pub fn validate(self) -> error::Result<NewStatistic> {
        error::require("gameId", &self.game_id)?;
        error::require("name", &self.name)?;
        let aggregation_mode = AggregationMode::parse(&self.aggregation_mode)?;

        if self.goal.is_some_and(|goal| !goal.is_finite()) {
            return Err(ValidationError::NotFinite { field: "goal" });
        }
        if self.landmarks.iter().any(|landmark| !landmark.is_finite()) {
            return Err(ValidationError::NotFinite { field: "landmarks" });
        }

        if let (Some(goal), false) = (self.goal, self.can_overflow) {
            if let Some(&landmark) = self.landmarks.iter().find(|&&landmark| landmark > goal) {
                return Err(ValidationError::LandmarkExceedsGoal { landmark, goal });
            }
        }

        Ok(NewStatistic {
            game_id: self.game_id,
            name: self.name.trim().to_owned(),
            description: self.description,
            aggregation_mode,
            goal: self.goal,
            landmarks: self.landmarks,
            can_overflow: self.can_overflow,
        })
    }
}

impl NewStatistic {
    /// Attach the id assigned by storage.
    pub fn into_statistic(self, id: String) -> Statistic {
        Statistic {
            id,
            game_id: self.game_id,
            name: self.name,
            description: self.description,
            aggregation_mode: self.aggregation_mode,
            goal: self.goal,
            landmarks: self.landmarks,
            can_overflow: self.can_overflow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> NewStatisticData {
        NewStatisticData {
            game_id: "game-1".to_string(),
            name: "Enemies Defeated".to_string(),
            description: "Total enemies defeated".to_string(),
            aggregation_mode: "INC".to_string(),
            goal: Some(100.0),
            landmarks: vec![10.0, 50.0, 100.0],
            can_overflow: false,
        }
    }

    #[test]
    fn test_validate_accepts_complete_input() {
        let statistic = data().validate().unwrap();
        assert_eq!(statistic.aggregation_mode, AggregationMode::Inc);
        assert_eq!(statistic.landmarks, vec![10.0, 50.0, 100.0]);
    }

    #[test]
    fn test_validate_requires_name_and_game() {
        let empty = NewStatisticData::default();
        assert_eq!(
            empty.validate(),
            Err(ValidationError::MissingField("gameId"))
        );

        let mut input = data();
        input.name = "  ".to_string();
        assert_eq!(input.validate(), Err(ValidationError::MissingField("name")));
    }

    #[test]
    fn test_validate_rejects_unknown_mode() {
        let mut input = data();
        input.aggregation_mode = "INVALID".to_string();
        assert_eq!(
            input.validate(),
            Err(ValidationError::InvalidAggregationMode("INVALID".to_string()))
        );
    }

    #[test]
    fn test_landmark_above_goal() {
        let mut input = data();
        input.landmarks.push(150.0);
        assert_eq!(
            input.clone().validate(),
            Err(ValidationError::LandmarkExceedsGoal {
                landmark: 150.0,
                goal: 100.0
            })
        );

        input.can_overflow = true;
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_no_goal_allows_any_landmark() {
        let mut input = data();
        input.goal = None;
        input.landmarks = vec![1_000.0];
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_non_finite_numbers() {
        let mut input = data();
        input.goal = Some(f64::NAN);
        assert_eq!(
            input.validate(),
            Err(ValidationError::NotFinite { field: "goal" })
        );

        let mut input = data();
        input.landmarks = vec![f64::INFINITY];
        assert_eq!(
            input.validate(),
            Err(ValidationError::NotFinite { field: "landmarks" })
        );
    }
}
