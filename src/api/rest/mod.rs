//! REST API module for HTTP endpoints
//!
//! Read-only JSON endpoints over the stats facade:
//! - `GET /api/overview` - Top 10 mods as chart series plus total count
//! - `GET /api/count` - Total number of logged requests
//! - `GET /api/metrics/:metric` - Leaderboard page for mods, authors or linkers

pub mod leaderboards;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::error::StatsError;

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip)]
    pub status: StatusCode,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "NOT_FOUND".to_string(),
            status: StatusCode::NOT_FOUND,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "BAD_REQUEST".to_string(),
            status: StatusCode::BAD_REQUEST,
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "SERVICE_UNAVAILABLE".to_string(),
            status: StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "INTERNAL_ERROR".to_string(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StatsError> for ApiError {
    fn from(err: StatsError) -> Self {
        let message = err.to_string();
        match err {
            StatsError::InvalidDimension(_) => ApiError::not_found(message),
            StatsError::InvalidLimit => ApiError::bad_request(message),
            StatsError::StoreUnavailable(_) | StatsError::Timeout(_) | StatsError::NotConnected => {
                ApiError::unavailable(message)
            }
            StatsError::ConnectionFailed(_) => ApiError::internal(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}
