//! Shared application state for HTTP handlers

use std::sync::Arc;

use crate::stats::StatsFacade;

/// State injected into every handler
pub struct AppState {
    /// Connected stats facade
    pub stats: Arc<StatsFacade>,
}

impl AppState {
    pub fn new(stats: Arc<StatsFacade>) -> Self {
        Self { stats }
    }
}
