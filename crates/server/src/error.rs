//! HTTP error responses and the mapping from domain errors.
//!
//! Every failure is rendered as `{"code", "message"}` with an optional
//! `details` string. Codes are stable; messages are fixed per code.
use std::borrow::Cow;
use std::fmt::Display;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use metagaming_core::{LeaderboardError, RankingError, RepositoryError, StatisticError};
use serde::{Deserialize, Serialize};

/// Body of every error response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: Cow<'static, str>,
    pub message: Cow<'static, str>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub const INVALID_REQUEST_BODY: Self = Self::new("INVALID_REQUEST_BODY", "invalid request body");
    pub const INVALID_QUERY: Self = Self::new("INVALID_QUERY", "invalid query parameters");
    pub const INTERNAL_SERVER_ERROR: Self =
        Self::new("INTERNAL_SERVER_ERROR", "internal server error");

    pub const STATISTIC_INVALID: Self = Self::new("STATISTIC_INVALID", "invalid statistic");
    pub const STATISTIC_INVALID_ID: Self =
        Self::new("STATISTIC_INVALID_ID", "invalid statistic id");
    pub const STATISTIC_INVALID_GAME_ID: Self =
        Self::new("STATISTIC_INVALID_GAME_ID", "missing or invalid game id");
    pub const STATISTIC_NOT_FOUND: Self = Self::new("STATISTIC_NOT_FOUND", "statistic not found");
    pub const STATISTIC_INVALID_AGGREGATION_MODE: Self = Self::new(
        "STATISTIC_INVALID_AGGREGATION_MODE",
        "invalid statistic aggregation mode",
    );

    pub const LEADERBOARD_INVALID: Self = Self::new("LEADERBOARD_INVALID", "invalid leaderboard");
    pub const LEADERBOARD_INVALID_ID: Self =
        Self::new("LEADERBOARD_INVALID_ID", "invalid leaderboard id");
    pub const LEADERBOARD_INVALID_GAME_ID: Self =
        Self::new("LEADERBOARD_INVALID_GAME_ID", "missing or invalid game id");
    pub const LEADERBOARD_NOT_FOUND: Self =
        Self::new("LEADERBOARD_NOT_FOUND", "leaderboard not found");
    pub const LEADERBOARD_CLOSED: Self = Self::new("LEADERBOARD_CLOSED", "leaderboard is closed");
    pub const LEADERBOARD_INVALID_AGGREGATION_MODE: Self = Self::new(
        "LEADERBOARD_INVALID_AGGREGATION_MODE",
        "invalid leaderboard aggregation mode",
    );
    pub const LEADERBOARD_INVALID_ORDERING: Self =
        Self::new("LEADERBOARD_INVALID_ORDERING", "invalid leaderboard ordering");

    pub const RANK_INVALID: Self = Self::new("RANK_INVALID", "invalid rank");
    pub const RANKING_INVALID_PAGE: Self =
        Self::new("RANKING_INVALID_PAGE", "invalid page number");
    pub const RANKING_INVALID_LIMIT: Self =
        Self::new("RANKING_INVALID_LIMIT", "invalid limit number");
    pub const RANKING_INVALID_ORDERING: Self =
        Self::new("RANKING_INVALID_ORDERING", "invalid leaderboard ordering");

    pub const fn new(code: &'static str, message: &'static str) -> Self {
        Self {
            code: Cow::Borrowed(code),
            message: Cow::Borrowed(message),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Display) -> Self {
        self.details = Some(details.to_string());
        self
    }
}

/// An error ready to be sent to the client.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, body: ErrorResponse) -> Self {
        Self { status, body }
    }

    pub fn bad_request(body: ErrorResponse) -> Self {
        Self::new(StatusCode::BAD_REQUEST, body)
    }

    pub fn unprocessable(body: ErrorResponse) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, body)
    }

    pub fn not_found(body: ErrorResponse) -> Self {
        Self::new(StatusCode::NOT_FOUND, body)
    }

    /// Log the cause and hide it from the client.
    pub fn internal(cause: impl Display) -> Self {
        tracing::error!(error = %cause, "unexpected error while handling request");
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorResponse::INTERNAL_SERVER_ERROR,
        )
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &ErrorResponse {
        &self.body
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<StatisticError> for ApiError {
    fn from(error: StatisticError) -> Self {
        match error {
            StatisticError::Invalid(reason) => {
                Self::unprocessable(ErrorResponse::STATISTIC_INVALID.with_details(reason))
            }
            StatisticError::InvalidId(_) => {
                Self::unprocessable(ErrorResponse::STATISTIC_INVALID_ID)
            }
            StatisticError::NotFound => Self::not_found(ErrorResponse::STATISTIC_NOT_FOUND),
            StatisticError::Repository(RepositoryError::InvalidAggregationMode(mode)) => {
                Self::unprocessable(
                    ErrorResponse::STATISTIC_INVALID_AGGREGATION_MODE.with_details(mode),
                )
            }
            StatisticError::Repository(cause) => Self::internal(cause),
        }
    }
}

impl From<LeaderboardError> for ApiError {
    fn from(error: LeaderboardError) -> Self {
        match error {
            LeaderboardError::Invalid(reason) => {
                Self::unprocessable(ErrorResponse::LEADERBOARD_INVALID.with_details(reason))
            }
            LeaderboardError::InvalidId(_) => {
                Self::unprocessable(ErrorResponse::LEADERBOARD_INVALID_ID)
            }
            LeaderboardError::NotFound => Self::not_found(ErrorResponse::LEADERBOARD_NOT_FOUND),
            LeaderboardError::Repository(RepositoryError::InvalidAggregationMode(mode)) => {
                Self::unprocessable(
                    ErrorResponse::LEADERBOARD_INVALID_AGGREGATION_MODE.with_details(mode),
                )
            }
            LeaderboardError::Repository(RepositoryError::InvalidOrdering(ordering)) => {
                Self::unprocessable(
                    ErrorResponse::LEADERBOARD_INVALID_ORDERING.with_details(ordering),
                )
            }
            LeaderboardError::Repository(cause) => Self::internal(cause),
        }
    }
}

impl From<RankingError> for ApiError {
    fn from(error: RankingError) -> Self {
        match error {
            RankingError::LeaderboardClosed { .. } => {
                Self::unprocessable(ErrorResponse::LEADERBOARD_CLOSED)
            }
            err @ RankingError::InvalidPageNumber { .. } => {
                Self::unprocessable(ErrorResponse::RANKING_INVALID_PAGE.with_details(err))
            }
            err @ RankingError::InvalidLimitNumber { .. } => {
                Self::unprocessable(ErrorResponse::RANKING_INVALID_LIMIT.with_details(err))
            }
            RankingError::Repository(RepositoryError::NotFound) => {
                Self::not_found(ErrorResponse::LEADERBOARD_NOT_FOUND)
            }
            RankingError::Repository(RepositoryError::InvalidId(_)) => {
                Self::unprocessable(ErrorResponse::LEADERBOARD_INVALID_ID)
            }
            RankingError::Repository(RepositoryError::InvalidAggregationMode(mode)) => {
                Self::unprocessable(
                    ErrorResponse::LEADERBOARD_INVALID_AGGREGATION_MODE.with_details(mode),
                )
            }
            RankingError::Repository(RepositoryError::InvalidOrdering(ordering)) => {
                Self::unprocessable(ErrorResponse::RANKING_INVALID_ORDERING.with_details(ordering))
            }
            RankingError::Repository(cause) => Self::internal(cause),
        }
    }
}
