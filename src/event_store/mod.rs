//! Event Store Module
//!
//! Read-only access to the mod-linking request log:
//! - `EventStore`: the backend contract (scan in insertion order, count)
//! - `StoreConnector`: opens a backend, used once by the stats facade
//! - `JsonlEventStore`: the append-only `events.jsonl` the bot writes
//! - `InMemoryEventStore`: fixed event list for tests and embedders
//!
//! # Read Path
//!
//! ```text
//! ┌──────────────┐    ┌──────────────────┐    ┌───────────────────┐
//! │ StatsFacade  │───►│ connect() once   │───►│ Arc<dyn EventStore│
//! │ connect()    │    │ (open log file)  │    │ shared by queries │
//! └──────────────┘    └──────────────────┘    └───────────────────┘
//! ```

mod jsonl;
mod memory;
mod store;

pub use jsonl::{JsonlConnector, JsonlEventStore};
pub use memory::InMemoryEventStore;
pub use store::{EventStore, StoreConfig, StoreConnector, StoreError, StoreResult};
