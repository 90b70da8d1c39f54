//! Leaderboard endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use super::ApiError;
use crate::aggregation::{navigation_links, Dimension, NavLink};
use crate::api::state::AppState;
use crate::projection::Projection;

/// Number of mods charted on the overview
pub const OVERVIEW_LIMIT: usize = 10;

/// Query parameters for leaderboard pages
#[derive(Debug, Deserialize)]
pub struct LeaderboardParams {
    /// Maximum number of rows (default: 500)
    #[serde(default = "default_limit")]
    pub limit: usize,
    /// Return a display table instead of raw rows (default: true)
    #[serde(default = "default_true")]
    pub table: bool,
}

fn default_limit() -> usize {
    500
}

fn default_true() -> bool {
    true
}

/// Parallel name/count series for a chart
#[derive(Debug, Default, Serialize)]
pub struct ChartSeries {
    pub names: Vec<String>,
    pub counts: Vec<u64>,
}

/// Response for GET /api/overview
#[derive(Debug, Serialize)]
pub struct Overview {
    pub title: &'static str,
    pub links: Vec<NavLink>,
    pub mods: ChartSeries,
    pub count: u64,
}

/// Response for GET /api/metrics/:metric
#[derive(Debug, Serialize)]
pub struct LeaderboardPage {
    pub title: &'static str,
    pub active: &'static str,
    pub links: Vec<NavLink>,
    pub count: u64,
    pub data: Projection,
}

/// Response for GET /api/count
#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub count: u64,
}

/// GET /api/overview - Top mods chart data and total count
pub async fn get_overview(State(state): State<Arc<AppState>>) -> Result<Json<Overview>, ApiError> {
    let (mods, count) = tokio::try_join!(
        state.stats.top_mods(OVERVIEW_LIMIT, false),
        state.stats.count()
    )?;

    let mods = mods
        .as_rows()
        .map(|board| ChartSeries {
            names: board.keys(),
            counts: board.counts(),
        })
        .unwrap_or_default();

    Ok(Json(Overview {
        title: "Teddy :: Mod linking bot",
        links: navigation_links(),
        mods,
        count,
    }))
}

/// GET /api/count - Total number of logged requests
pub async fn get_count(State(state): State<Arc<AppState>>) -> Result<Json<CountResponse>, ApiError> {
    let count = state.stats.count().await?;
    Ok(Json(CountResponse { count }))
}

/// GET /api/metrics/:metric - Leaderboard for one dimension
///
/// `metric` is `mods`, `authors`, `requesters` or `linkers`.
pub async fn get_leaderboard(
    State(state): State<Arc<AppState>>,
    Path(metric): Path<String>,
    Query(params): Query<LeaderboardParams>,
) -> Result<Json<LeaderboardPage>, ApiError> {
    let dimension: Dimension = metric.parse()?;

    let (data, count) = tokio::try_join!(
        state.stats.top(dimension, params.limit, params.table),
        state.stats.count()
    )?;

    Ok(Json(LeaderboardPage {
        title: dimension.page_title(),
        active: dimension.label(),
        links: navigation_links(),
        count,
        data,
    }))
}
