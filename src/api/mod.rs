//! HTTP API for the leaderboards
//!
//! A thin JSON shell over `StatsFacade`; templates and rendering belong to
//! whatever consumes it.

pub mod http;
pub mod rest;
pub mod state;

pub use http::create_router;
pub use state::AppState;
