use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use metagaming_core::Rank;
use serde::{Deserialize, Serialize};

use super::json_body;
use crate::error::{ApiError, ErrorResponse};
use crate::extract::{GameId, Leaderboards};
use crate::state::AppState;

const DEFAULT_PAGE: i64 = 0;
const DEFAULT_LIMIT: i64 = 10;

/// Body of `POST /api/v1/leaderboards/{id}/ranking`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpsertRankRequest {
    pub player_id: String,
    pub value: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RankingQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// One row of a ranking page. `position` is 1-based across pages.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankEntry {
    pub position: i64,
    pub player_id: String,
    pub value: f64,
}

/// POST /api/v1/leaderboards/{id}/ranking
///
/// The leaderboard is loaded before the body is looked at, so a missing
/// leaderboard is reported as not found whatever the body holds.
pub(super) async fn upsert(
    State(state): State<AppState>,
    GameId(game_id, _): GameId<Leaderboards>,
    Path(id): Path<String>,
    body: Result<Json<UpsertRankRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let leaderboard = state.leaderboards.get(&id, &game_id).await?;
    let request = json_body(body)?;

    if request.player_id.trim().is_empty() {
        return Err(ApiError::unprocessable(
            ErrorResponse::RANK_INVALID.with_details("missing required field `playerId`"),
        ));
    }
    let value = match request.value {
        Some(value) if value.is_finite() => value,
        _ => {
            return Err(ApiError::unprocessable(
                ErrorResponse::RANK_INVALID.with_details("`value` must be a finite number"),
            ));
        }
    };

    state
        .ranking
        .upsert_player_rank(&leaderboard, &request.player_id, value)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/leaderboards/{id}/ranking?page=&limit=
pub(super) async fn list(
    State(state): State<AppState>,
    GameId(game_id, _): GameId<Leaderboards>,
    Path(id): Path<String>,
    query: Result<Query<RankingQuery>, QueryRejection>,
) -> Result<Json<Vec<RankEntry>>, ApiError> {
    let Query(query) = query.map_err(|rejection| {
        ApiError::bad_request(ErrorResponse::INVALID_QUERY.with_details(rejection.body_text()))
    })?;
    let page = query.page.unwrap_or(DEFAULT_PAGE);
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);

    let leaderboard = state.leaderboards.get(&id, &game_id).await?;
    let ranks = state.ranking.ranking(&leaderboard, page, limit).await?;

    Ok(Json(entries(ranks, page, limit)))
}

fn entries(ranks: Vec<Rank>, page: i64, limit: i64) -> Vec<RankEntry> {
    let offset = page.saturating_mul(limit);
    ranks
        .into_iter()
        .zip(1..)
        .map(|(rank, index)| RankEntry {
            position: offset.saturating_add(index),
            player_id: rank.player_id,
            value: rank.value,
        })
        .collect()
}
