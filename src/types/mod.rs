//! Data types for the stats layer
//!
//! Events as the bot writes them, the ranked rows the engine produces and
//! the tables the projector shapes them into.

mod event;
mod leaderboard;
mod table;

pub use event::{ModRecord, RequestEvent};
pub use leaderboard::{Leaderboard, RankedRow};
pub use table::{Cell, Column, SortDirection, SortSpec, Table};
