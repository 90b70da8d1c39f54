//! Stats facade
//!
//! The single entry point for the presentation layer. Owns the store
//! connection, connects it at most once, and runs every query with a
//! timeout and bounded retries before projecting the result.
//!
//! ```text
//! Unconnected ──connect()──► Connecting ──ok──► Connected
//!                                 │
//!                                 └──err──► Failed (terminal)
//! ```

mod lifecycle;

use std::future::Future;

use tokio::sync::OnceCell;
use tracing::{error, info, warn};

use crate::aggregation::{AggregationEngine, Dimension};
use crate::config::QueryConfig;
use crate::error::{StatsError, StatsResult};
use crate::event_store::StoreConnector;
use crate::projection::{project, Projection};

pub use lifecycle::ConnectionState;
use lifecycle::Lifecycle;

/// Connect-once entry point over the aggregation engine
pub struct StatsFacade {
    connector: Box<dyn StoreConnector>,
    engine: OnceCell<AggregationEngine>,
    lifecycle: Lifecycle,
    query: QueryConfig,
}

impl StatsFacade {
    /// Create an unconnected facade
    pub fn new(connector: impl StoreConnector + 'static, query: QueryConfig) -> Self {
        Self {
            connector: Box::new(connector),
            engine: OnceCell::new(),
            lifecycle: Lifecycle::default(),
            query,
        }
    }

    /// Current connection state
    pub fn state(&self) -> ConnectionState {
        self.lifecycle.state()
    }

    /// Establish the store connection
    ///
    /// Idempotent. Concurrent first callers share a single connection
    /// attempt. A failed attempt is final: later calls return
    /// `ConnectionFailed` without trying again. An attempt abandoned by a
    /// cancelled caller counts as failed.
    pub async fn connect(&self) -> StatsResult<()> {
        if self.engine.initialized() {
            return Ok(());
        }

        self.engine
            .get_or_try_init(|| async {
                let attempt = self.lifecycle.begin()?;

                match self.connector.connect().await {
                    Ok(store) => {
                        info!(store = %store.describe(), "Database connected");
                        attempt.connected();
                        Ok(AggregationEngine::new(store))
                    }
                    Err(e) => {
                        error!(error = %e, "Database connection failed");
                        let message = e.to_string();
                        attempt.failed(message.clone());
                        Err(StatsError::ConnectionFailed(message))
                    }
                }
            })
            .await?;

        Ok(())
    }

    /// Total number of logged requests
    pub async fn count(&self) -> StatsResult<u64> {
        self.run_query("count", |engine| async move { engine.total_count().await })
            .await
    }

    /// Top `limit` groups for `dimension`, as a table or raw rows
    pub async fn top(&self, dimension: Dimension, limit: usize, as_table: bool) -> StatsResult<Projection> {
        if limit == 0 {
            return Err(StatsError::InvalidLimit);
        }

        let board = self
            .run_query("top_by", move |engine| async move {
                engine.top_by(dimension, limit).await
            })
            .await?;

        Ok(project(board, dimension, as_table))
    }

    pub async fn top_mods(&self, limit: usize, as_table: bool) -> StatsResult<Projection> {
        self.top(Dimension::Mods, limit, as_table).await
    }

    pub async fn top_authors(&self, limit: usize, as_table: bool) -> StatsResult<Projection> {
        self.top(Dimension::Authors, limit, as_table).await
    }

    pub async fn top_requesters(&self, limit: usize, as_table: bool) -> StatsResult<Projection> {
        self.top(Dimension::Requesters, limit, as_table).await
    }

    /// Run a store query with the configured timeout and retries
    async fn run_query<T, F, Fut>(&self, operation: &'static str, query: F) -> StatsResult<T>
    where
        F: Fn(AggregationEngine) -> Fut,
        Fut: Future<Output = StatsResult<T>>,
    {
        let engine = self.engine.get().ok_or(StatsError::NotConnected)?;
        let mut attempt = 0u32;

        loop {
            let result = match tokio::time::timeout(self.query.timeout, query(engine.clone())).await {
                Ok(result) => result,
                Err(_) => Err(StatsError::Timeout(self.query.timeout)),
            };

            match result {
                Err(e) if e.is_retryable() && attempt < self.query.max_retries => {
                    attempt += 1;
                    let delay = self.query.retry_backoff * attempt;
                    warn!(operation, attempt, ?delay, error = %e, "retrying store query");
                    tokio::time::sleep(delay).await;
                }
                other => return other,
            }
        }
    }
}
