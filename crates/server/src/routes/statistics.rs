use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use metagaming_core::{NewStatisticData, Statistic};
use serde::Deserialize;

use super::json_body;
use crate::error::ApiError;
use crate::extract::{GameId, Statistics};
use crate::state::AppState;

/// Body of `POST /api/v1/statistics`. Missing fields default so that
/// validation, not parsing, reports them.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateStatisticRequest {
    pub name: String,
    pub description: String,
    pub aggregation_mode: String,
    pub goal: Option<f64>,
    pub landmarks: Vec<f64>,
    pub can_overflow: bool,
}

/// POST /api/v1/statistics
pub(super) async fn create(
    State(state): State<AppState>,
    GameId(game_id, _): GameId<Statistics>,
    body: Result<Json<CreateStatisticRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Statistic>), ApiError> {
    let request = json_body(body)?;

    let statistic = state
        .statistics
        .create(NewStatisticData {
            game_id,
            name: request.name,
            description: request.description,
            aggregation_mode: request.aggregation_mode,
            goal: request.goal,
            landmarks: request.landmarks,
            can_overflow: request.can_overflow,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(statistic)))
}

/// GET /api/v1/statistics/{id}
pub(super) async fn get(
    State(state): State<AppState>,
    GameId(game_id, _): GameId<Statistics>,
    Path(id): Path<String>,
) -> Result<Json<Statistic>, ApiError> {
    let statistic = state.statistics.get(&id, &game_id).await?;
    Ok(Json(statistic))
}

/// DELETE /api/v1/statistics/{id}
pub(super) async fn delete(
    State(state): State<AppState>,
    GameId(game_id, _): GameId<Statistics>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.statistics.soft_delete(&id, &game_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
