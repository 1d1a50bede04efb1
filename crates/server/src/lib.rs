//! HTTP surface of the metagaming service.
//!
//! Exposes statistics, leaderboards and leaderboard rankings as a REST API
//! scoped per game through the `X-Game-ID` header. [`bootstrap::AppBuilder`]
//! wires a storage backend into [`AppState`], and [`router`] turns that state
//! into an axum application.
pub mod bootstrap;
pub mod config;
pub mod error;
pub mod extract;
pub mod logging;
pub mod routes;
pub mod state;

pub use routes::router;
pub use state::AppState;
