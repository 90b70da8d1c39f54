//! Connection state tracking for the stats facade

use parking_lot::Mutex;
use serde::Serialize;

use crate::error::{StatsError, StatsResult};

/// Where the facade is in its connect-once lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionState {
    Unconnected,
    Connecting,
    Connected,
    /// Terminal; the facade never reconnects
    Failed,
}

#[derive(Debug)]
struct Inner {
    state: ConnectionState,
    last_error: Option<String>,
}

/// State plus the error that moved it to `Failed`
#[derive(Debug)]
pub(super) struct Lifecycle {
    inner: Mutex<Inner>,
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self {
            inner: Mutex::new(Inner {
                state: ConnectionState::Unconnected,
                last_error: None,
            }),
        }
    }
}

impl Lifecycle {
    pub(super) fn state(&self) -> ConnectionState {
        self.inner.lock().state
    }

    /// Move to `Connecting`, unless a previous attempt already failed
    ///
    /// The returned attempt must be settled with `connected` or `failed`.
    /// Dropping it unsettled (the caller's future was cancelled) marks the
    /// lifecycle `Failed`, so no second attempt can start.
    pub(super) fn begin(&self) -> StatsResult<Attempt<'_>> {
        let mut inner = self.inner.lock();
        if inner.state == ConnectionState::Failed {
            let message = inner
                .last_error
                .clone()
                .unwrap_or_else(|| "previous connection attempt failed".to_string());
            return Err(StatsError::ConnectionFailed(message));
        }
        inner.state = ConnectionState::Connecting;
        Ok(Attempt {
            lifecycle: self,
            settled: false,
        })
    }

    fn connected(&self) {
        self.inner.lock().state = ConnectionState::Connected;
    }

    fn failed(&self, message: String) {
        let mut inner = self.inner.lock();
        inner.state = ConnectionState::Failed;
        inner.last_error = Some(message);
    }
}

/// An in-flight connection attempt
#[derive(Debug)]
pub(super) struct Attempt<'a> {
    lifecycle: &'a Lifecycle,
    settled: bool,
}

impl Attempt<'_> {
    pub(super) fn connected(mut self) {
        self.settled = true;
        self.lifecycle.connected();
    }

    pub(super) fn failed(mut self, message: String) {
        self.settled = true;
        self.lifecycle.failed(message);
    }
}

impl Drop for Attempt<'_> {
    fn drop(&mut self) {
        if !self.settled {
            self.lifecycle
                .failed("connection attempt cancelled".to_string());
        }
    }
}
