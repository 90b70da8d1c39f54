//! Event store contract
//!
//! The stats layer never writes. A backend only has to hand back every
//! event in insertion order and count them; grouping happens in the
//! aggregation engine.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::types::RequestEvent;

/// Configuration for the file-backed event store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Path to the append-only events log (one JSON event per line)
    pub events_path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            events_path: PathBuf::from("data").join("events.jsonl"),
        }
    }
}

impl StoreConfig {
    /// Create config pointing at a custom events log
    pub fn new<P: AsRef<Path>>(events_path: P) -> Self {
        Self {
            events_path: events_path.as_ref().to_path_buf(),
        }
    }

    /// Get the events log path
    pub fn events_path(&self) -> &Path {
        &self.events_path
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while reading the event store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("event log not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("event log is not a regular file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("store task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Read-only access to the request log
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Every event in insertion order
    async fn scan(&self) -> StoreResult<Vec<RequestEvent>>;

    /// Total number of events
    async fn count(&self) -> StoreResult<u64>;

    /// Short human-readable name for logs
    fn describe(&self) -> String;
}

/// Opens a connection to an event store
#[async_trait]
pub trait StoreConnector: Send + Sync {
    async fn connect(&self) -> StoreResult<Arc<dyn EventStore>>;
}
