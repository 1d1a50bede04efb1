//! REST routes under `/api/v1`.
//!
//! Every route except `/health` requires the game id header.

mod leaderboards;
mod ranking;
mod statistics;

use axum::extract::rejection::JsonRejection;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::error::{ApiError, ErrorResponse};
use crate::state::AppState;

pub use leaderboards::CreateLeaderboardRequest;
pub use ranking::{RankEntry, RankingQuery, UpsertRankRequest};
pub use statistics::CreateStatisticRequest;

/// Build the application router with all routes attached to `state`.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/statistics", post(statistics::create))
        .route(
            "/statistics/{id}",
            get(statistics::get).delete(statistics::delete),
        )
        .route("/leaderboards", post(leaderboards::create))
        .route(
            "/leaderboards/{id}",
            get(leaderboards::get).delete(leaderboards::delete),
        )
        .route(
            "/leaderboards/{id}/ranking",
            get(ranking::list).post(ranking::upsert),
        );

    Router::new()
        .route("/health", get(health))
        .nest("/api/v1", api)
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

/// Unwrap a JSON body, turning any rejection into a 400.
fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    match body {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "rejected request body");
            Err(ApiError::bad_request(
                ErrorResponse::INVALID_REQUEST_BODY.with_details(rejection.body_text()),
            ))
        }
    }
}
