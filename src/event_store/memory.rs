//! In-memory event store for tests and embedding

use std::sync::Arc;

use async_trait::async_trait;

use crate::types::RequestEvent;

use super::store::{EventStore, StoreConnector, StoreResult};

/// Fixed, in-memory event log
#[derive(Debug, Clone, Default)]
pub struct InMemoryEventStore {
    events: Arc<Vec<RequestEvent>>,
}

impl InMemoryEventStore {
    /// Create a store holding `events` in the given order
    pub fn new(events: Vec<RequestEvent>) -> Self {
        Self {
            events: Arc::new(events),
        }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn scan(&self) -> StoreResult<Vec<RequestEvent>> {
        Ok(self.events.as_ref().clone())
    }

    async fn count(&self) -> StoreResult<u64> {
        Ok(self.events.len() as u64)
    }

    fn describe(&self) -> String {
        format!("memory:{} events", self.events.len())
    }
}

#[async_trait]
impl StoreConnector for InMemoryEventStore {
    async fn connect(&self) -> StoreResult<Arc<dyn EventStore>> {
        Ok(Arc::new(self.clone()))
    }
}
