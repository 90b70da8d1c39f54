//! Teddy Stats
//!
//! Read-only leaderboards over the mod-linking request log: which mods get
//! linked most, whose mods they are, and who asks for them.
//!
//! # Modules
//!
//! - `types`: Request events, ranked rows and display tables
//! - `event_store`: Read-only store contract plus JSONL and in-memory backends
//! - `aggregation`: Dimensions and the leaderboard engine
//! - `projection`: Leaderboard to table shaping
//! - `stats`: Connect-once facade used by the presentation layer
//! - `api`: Axum router exposing the facade as JSON
//! - `config`: Environment configuration
//! - `logging`: Tracing subscriber setup
//!
//! # Example
//!
//! ```no_run
//! use teddy_stats::config::QueryConfig;
//! use teddy_stats::event_store::{JsonlConnector, StoreConfig};
//! use teddy_stats::StatsFacade;
//!
//! # async fn run() -> Result<(), teddy_stats::StatsError> {
//! let connector = JsonlConnector::new(StoreConfig::new("data/events.jsonl"));
//! let stats = StatsFacade::new(connector, QueryConfig::default());
//! stats.connect().await?;
//!
//! let table = stats.top_mods(10, true).await?;
//! println!("{} requests", stats.count().await?);
//! # let _ = table;
//! # Ok(())
//! # }
//! ```

pub mod aggregation;
pub mod api;
pub mod config;
pub mod error;
pub mod event_store;
pub mod logging;
pub mod projection;
pub mod stats;
pub mod types;

// Re-export commonly used items at crate root
pub use aggregation::{AggregationEngine, Dimension};
pub use error::{StatsError, StatsResult};
pub use projection::{project, Projection};
pub use stats::{ConnectionState, StatsFacade};
pub use types::{Cell, Column, Leaderboard, ModRecord, RankedRow, RequestEvent, SortSpec, Table};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
