//! Error types for the stats layer
//!
//! `StatsError` is what every facade and engine operation returns. Store
//! failures arrive as `StoreError` and are folded into `StoreUnavailable`.

use std::time::Duration;

use thiserror::Error;

use crate::event_store::StoreError;

/// Result type for stats operations
pub type StatsResult<T> = Result<T, StatsError>;

/// Errors surfaced by the aggregation engine and the stats facade
#[derive(Debug, Error)]
pub enum StatsError {
    /// The event store could not be reached or a read against it failed
    #[error("event store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),

    /// A store query did not finish within the configured timeout
    #[error("event store query timed out after {0:?}")]
    Timeout(Duration),

    /// A metric name that does not map to any known dimension
    #[error("unknown dimension: {0}")]
    InvalidDimension(String),

    /// Leaderboards need at least one row
    #[error("limit must be greater than zero")]
    InvalidLimit,

    /// A query was issued before `connect()` completed
    #[error("stats facade is not connected")]
    NotConnected,

    /// The initial connection failed; the facade will not try again
    #[error("event store connection failed: {0}")]
    ConnectionFailed(String),
}

impl StatsError {
    /// Whether the failure is transient and worth retrying
    pub fn is_retryable(&self) -> bool {
        matches!(self, StatsError::StoreUnavailable(_) | StatsError::Timeout(_))
    }
}
