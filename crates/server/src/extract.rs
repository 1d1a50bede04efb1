//! Request extractors shared by the route handlers.
use std::marker::PhantomData;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::{ApiError, ErrorResponse};

/// Header every statistic and leaderboard route requires.
pub const GAME_ID_HEADER: &str = "X-Game-ID";

/// Resource a route belongs to, deciding which error a missing game id maps to.
pub trait Resource {
    const INVALID_GAME_ID: ErrorResponse;
}

pub struct Statistics;

impl Resource for Statistics {
    const INVALID_GAME_ID: ErrorResponse = ErrorResponse::STATISTIC_INVALID_GAME_ID;
}

pub struct Leaderboards;

impl Resource for Leaderboards {
    const INVALID_GAME_ID: ErrorResponse = ErrorResponse::LEADERBOARD_INVALID_GAME_ID;
}

/// Game id taken from [`GAME_ID_HEADER`].
///
/// Rejects with 422 when the header is missing, blank, or not UTF-8. List it
/// before any body extractor so the header is checked first.
#[derive(Debug)]
pub struct GameId<R>(pub String, pub PhantomData<R>);

impl<S, R> FromRequestParts<S> for GameId<R>
where
    S: Send + Sync,
    R: Resource,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let game_id = parts
            .headers
            .get(GAME_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| ApiError::unprocessable(R::INVALID_GAME_ID))?;

        Ok(Self(game_id.to_owned(), PhantomData))
    }
}
