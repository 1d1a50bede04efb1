use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use metagaming_core::{Leaderboard, NewLeaderboardData};
use serde::Deserialize;

use super::json_body;
use crate::error::ApiError;
use crate::extract::{GameId, Leaderboards};
use crate::state::AppState;

/// Body of `POST /api/v1/leaderboards`. Times are RFC 3339.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateLeaderboardRequest {
    pub name: String,
    pub description: String,
    pub aggregation_mode: String,
    pub ordering: String,
    pub start_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
}

/// POST /api/v1/leaderboards
pub(super) async fn create(
    State(state): State<AppState>,
    GameId(game_id, _): GameId<Leaderboards>,
    body: Result<Json<CreateLeaderboardRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Leaderboard>), ApiError> {
    let request = json_body(body)?;

    let leaderboard = state
        .leaderboards
        .create(NewLeaderboardData {
            game_id,
            name: request.name,
            description: request.description,
            aggregation_mode: request.aggregation_mode,
            ordering: request.ordering,
            start_at: request.start_at,
            end_at: request.end_at,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(leaderboard)))
}

/// GET /api/v1/leaderboards/{id}
pub(super) async fn get(
    State(state): State<AppState>,
    GameId(game_id, _): GameId<Leaderboards>,
    Path(id): Path<String>,
) -> Result<Json<Leaderboard>, ApiError> {
    let leaderboard = state.leaderboards.get(&id, &game_id).await?;
    Ok(Json(leaderboard))
}

/// DELETE /api/v1/leaderboards/{id}
pub(super) async fn delete(
    State(state): State<AppState>,
    GameId(game_id, _): GameId<Leaderboards>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.leaderboards.soft_delete(&id, &game_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
