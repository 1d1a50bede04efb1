//! Enumerations shared by statistics, leaderboards, and rankings.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Strategy for combining a new value with the stored one.
///
/// Serialized as `INC`, `MAX`, and `MIN` on the wire and in storage.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum AggregationMode {
    /// Add the value to the stored total
    Inc,
    /// Keep the greatest value seen
    Max,
    /// Keep the smallest value seen
    Min,
}

impl AggregationMode {
    /// Parse the wire spelling, reporting the rejected text on failure.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        raw.parse()
            .map_err(|_| ValidationError::InvalidAggregationMode(raw.to_owned()))
    }
}

/// Sort direction for ranking pages.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Ordering {
    /// Lowest value first
    Asc,
    /// Highest value first
    Desc,
}

impl Ordering {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        raw.parse()
            .map_err(|_| ValidationError::InvalidOrdering(raw.to_owned()))
    }

    /// Sort direction as used by document stores (`1` or `-1`).
    pub const fn direction(&self) -> i32 {
        match self {
            Self::Asc => 1,
            Self::Desc => -1,
        }
    }
}
