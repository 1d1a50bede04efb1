//! Validation errors raised while turning raw input into domain values.
//!
//! Each variant names the offending field so the API layer can surface it
//! verbatim. Validation errors are never retried: the caller has to change
//! the input.

use thiserror::Error;

/// Reasons a create request was rejected before reaching a repository.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ValidationError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("invalid aggregation mode `{0}`")]
    InvalidAggregationMode(String),

    #[error("invalid ordering `{0}`")]
    InvalidOrdering(String),

    #[error("`{field}` must be a finite number")]
    NotFinite { field: &'static str },

    #[error("landmark {landmark} exceeds goal {goal} and overflow is not allowed")]
    LandmarkExceedsGoal { landmark: f64, goal: f64 },

    #[error("end time must be after start time")]
    EndBeforeStart,
}

pub type Result<T> = std::result::Result<T, ValidationError>;

/// Reject blank strings for required fields.
pub(crate) fn require(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(())
}
