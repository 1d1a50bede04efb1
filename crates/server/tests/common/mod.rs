#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use metagaming_core::{
    Leaderboard, LeaderboardRepository, NewLeaderboard, Ordering, PageLimits, Rank,
    RankRepository, RepositoryError,
};
use metagaming_server::extract::GAME_ID_HEADER;
use metagaming_server::{AppState, router};
use metagaming_storage::{
    InMemoryLeaderboardRepository, InMemoryRankRepository, InMemoryStatisticRepository,
};
use serde_json::Value;
use tower::ServiceExt;

pub const GAME_ID: &str = "game-1";

/// Router over fresh in-memory repositories.
pub fn app() -> Router {
    router(AppState::in_memory(PageLimits::default()))
}

/// Router over in-memory statistics with the given leaderboard and rank
/// repositories.
pub fn app_with(
    leaderboards: Arc<dyn LeaderboardRepository>,
    ranks: Arc<dyn RankRepository>,
) -> Router {
    router(AppState::new(
        Arc::new(InMemoryStatisticRepository::new()),
        leaderboards,
        ranks,
        PageLimits::default(),
    ))
}

/// Router whose leaderboards live in memory and whose rank backend is down.
pub fn app_with_failing_ranks() -> Router {
    app_with(
        Arc::new(InMemoryLeaderboardRepository::new()),
        Arc::new(BrokenRanks),
    )
}

/// Router whose leaderboard repository answers every call with `error()`.
pub fn app_with_broken_leaderboards(error: fn() -> RepositoryError) -> Router {
    app_with(
        Arc::new(BrokenLeaderboards(error)),
        Arc::new(InMemoryRankRepository::new()),
    )
}

pub fn backend_down() -> RepositoryError {
    RepositoryError::Backend("connection reset".into())
}

pub struct BrokenLeaderboards(pub fn() -> RepositoryError);

#[async_trait]
impl LeaderboardRepository for BrokenLeaderboards {
    async fn create(&self, _leaderboard: NewLeaderboard) -> Result<Leaderboard, RepositoryError> {
        Err((self.0)())
    }

    async fn get_by_id_and_game_id(
        &self,
        _id: &str,
        _game_id: &str,
    ) -> Result<Leaderboard, RepositoryError> {
        Err((self.0)())
    }

    async fn soft_delete_by_id_and_game_id(
        &self,
        _id: &str,
        _game_id: &str,
    ) -> Result<(), RepositoryError> {
        Err((self.0)())
    }
}

pub struct BrokenRanks;

#[async_trait]
impl RankRepository for BrokenRanks {
    async fn increment_value(
        &self,
        _leaderboard_id: &str,
        _player_id: &str,
        _value: f64,
    ) -> Result<(), RepositoryError> {
        Err(backend_down())
    }

    async fn set_if_greater(
        &self,
        _leaderboard_id: &str,
        _player_id: &str,
        _value: f64,
    ) -> Result<(), RepositoryError> {
        Err(backend_down())
    }

    async fn set_if_lesser(
        &self,
        _leaderboard_id: &str,
        _player_id: &str,
        _value: f64,
    ) -> Result<(), RepositoryError> {
        Err(backend_down())
    }

    async fn fetch_page(
        &self,
        _leaderboard_id: &str,
        _ordering: Ordering,
        _page: i64,
        _limit: i64,
    ) -> Result<Vec<Rank>, RepositoryError> {
        Err(backend_down())
    }
}

/// Send one request and return the status with the decoded JSON body
/// (`Value::Null` for empty bodies).
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    game_id: Option<&str>,
    body: Option<&str>,
) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(game_id) = game_id {
        request = request.header(GAME_ID_HEADER, game_id);
    }
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_owned())),
        None => request.body(Body::empty()),
    }
    .expect("request should build");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();

    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("body should be JSON")
    };
    (status, json)
}

pub async fn post(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(GAME_ID), Some(body)).await
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, Some(GAME_ID), None).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::DELETE, uri, Some(GAME_ID), None).await
}

/// Create a leaderboard and return its id.
pub async fn create_leaderboard(app: &Router, body: &str) -> String {
    let (status, json) = post(app, "/api/v1/leaderboards", body).await;
    assert_eq!(status, StatusCode::CREATED, "unexpected body: {json}");
    json["id"].as_str().expect("id should be a string").to_owned()
}
