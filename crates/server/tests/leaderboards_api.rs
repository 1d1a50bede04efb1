mod common;

use axum::http::{Method, StatusCode};
use metagaming_core::RepositoryError;

use common::{
    GAME_ID, app, app_with_broken_leaderboards, backend_down, create_leaderboard, delete, get,
    post, send,
};

const VALID_LEADERBOARD: &str = r#"{
    "name": "Weekly score",
    "description": "Best run of the week",
    "aggregationMode": "MAX",
    "ordering": "DESC",
    "startAt": "2024-01-01T00:00:00Z",
    "endAt": "2999-01-01T00:00:00Z"
}"#;

#[tokio::test]
async fn test_create_leaderboard() {
    let app = app();

    let (status, body) = post(&app, "/api/v1/leaderboards", VALID_LEADERBOARD).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["gameId"], GAME_ID);
    assert_eq!(body["aggregationMode"], "MAX");
    assert_eq!(body["ordering"], "DESC");
    assert_eq!(body["startAt"], "2024-01-01T00:00:00Z");
    assert_eq!(body["endAt"], "2999-01-01T00:00:00Z");
}

#[tokio::test]
async fn test_create_leaderboard_defaults_start_and_end() {
    let app = app();

    let (status, body) = post(
        &app,
        "/api/v1/leaderboards",
        r#"{"name": "All time", "aggregationMode": "INC", "ordering": "ASC"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["startAt"].is_string());
    assert!(body["endAt"].is_null());
}

#[tokio::test]
async fn test_create_leaderboard_validation_error() {
    let app = app();

    let cases = [
        r#"{"name": "Score", "aggregationMode": "AVG", "ordering": "DESC"}"#,
        r#"{"name": "Score", "aggregationMode": "MAX", "ordering": "UP"}"#,
        r#"{"aggregationMode": "MAX", "ordering": "DESC"}"#,
        r#"{"name": "Score", "aggregationMode": "MAX", "ordering": "DESC",
            "startAt": "2024-02-01T00:00:00Z", "endAt": "2024-01-01T00:00:00Z"}"#,
    ];
    for body in cases {
        let (status, json) = post(&app, "/api/v1/leaderboards", body).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "body: {body}");
        assert_eq!(json["code"], "LEADERBOARD_INVALID");
    }
}

#[tokio::test]
async fn test_create_leaderboard_invalid_body() {
    let app = app();

    let (status, body) = post(
        &app,
        "/api/v1/leaderboards",
        r#"{"name": "Score", "startAt": "yesterday"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_REQUEST_BODY");
}

#[tokio::test]
async fn test_leaderboard_missing_game_id() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/v1/leaderboards/65a1b2c3d4e5f6a7b8c9d0e1",
        Some("  "),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "LEADERBOARD_INVALID_GAME_ID");
}

#[tokio::test]
async fn test_get_and_delete_leaderboard() {
    let app = app();
    let id = create_leaderboard(&app, VALID_LEADERBOARD).await;
    let uri = format!("/api/v1/leaderboards/{id}");

    let (status, body) = get(&app, &uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id.as_str());
    assert_eq!(body["name"], "Weekly score");

    let (status, _) = delete(&app, &uri).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = get(&app, &uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "LEADERBOARD_NOT_FOUND");
}

#[tokio::test]
async fn test_get_leaderboard_invalid_id() {
    let app = app();

    let (status, body) = get(&app, "/api/v1/leaderboards/42").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "LEADERBOARD_INVALID_ID");
}

#[tokio::test]
async fn test_leaderboard_backend_error_is_hidden() {
    let app = app_with_broken_leaderboards(backend_down);
    let uri = "/api/v1/leaderboards/65a1b2c3d4e5f6a7b8c9d0e1";

    let (status, json) = post(&app, "/api/v1/leaderboards", VALID_LEADERBOARD).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_SERVER_ERROR");
    assert!(json.get("details").is_none());

    let (status, _) = get(&app, uri).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, _) = delete(&app, uri).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_get_leaderboard_with_unknown_stored_mode() {
    let app = app_with_broken_leaderboards(|| {
        RepositoryError::InvalidAggregationMode("AVERAGE".to_string())
    });

    let (status, json) = get(&app, "/api/v1/leaderboards/65a1b2c3d4e5f6a7b8c9d0e1").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["code"], "LEADERBOARD_INVALID_AGGREGATION_MODE");
    assert_eq!(json["details"], "AVERAGE");
}

#[tokio::test]
async fn test_get_leaderboard_with_unknown_stored_ordering() {
    let app = app_with_broken_leaderboards(|| RepositoryError::InvalidOrdering("UP".to_string()));

    let (status, json) = get(&app, "/api/v1/leaderboards/65a1b2c3d4e5f6a7b8c9d0e1").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["code"], "LEADERBOARD_INVALID_ORDERING");
}
