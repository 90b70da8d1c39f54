//! Aggregation engine
//!
//! Turns the raw request log into ranked leaderboards:
//! - `Dimension`: mods, authors or requesters, each with a descriptor
//! - `AggregationEngine`: `top_by` and `total_count` against a store
//! - `rank`: the grouping pipeline itself, usable on any event slice

mod dimension;
mod engine;

pub use dimension::{navigation_links, Dimension, DimensionDescriptor, Field, NavLink};
pub use engine::{rank, AggregationEngine};
