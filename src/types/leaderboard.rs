//! Ranked leaderboard rows

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One group in a leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedRow {
    /// Value of the grouping field (mod title, author or requester)
    pub key: String,
    /// Number of events in the group, always at least 1
    pub count: u64,
    /// First-seen denormalized fields for the group, e.g. `url`
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub auxiliary: BTreeMap<String, String>,
}

impl RankedRow {
    /// Create a row without auxiliary fields
    pub fn new(key: impl Into<String>, count: u64) -> Self {
        Self {
            key: key.into(),
            count,
            auxiliary: BTreeMap::new(),
        }
    }

    /// Attach an auxiliary field
    pub fn with_aux(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.auxiliary.insert(name.into(), value.into());
        self
    }

    /// Look up an auxiliary field, empty when absent
    pub fn aux(&self, name: &str) -> &str {
        self.auxiliary.get(name).map(String::as_str).unwrap_or("")
    }
}

/// Rows sorted by count descending, ties in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Leaderboard {
    pub rows: Vec<RankedRow>,
}

impl Leaderboard {
    pub fn new(rows: Vec<RankedRow>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedRow> {
        self.rows.iter()
    }

    /// Group keys in rank order
    pub fn keys(&self) -> Vec<String> {
        self.rows.iter().map(|r| r.key.clone()).collect()
    }

    /// Counts in rank order
    pub fn counts(&self) -> Vec<u64> {
        self.rows.iter().map(|r| r.count).collect()
    }
}

impl IntoIterator for Leaderboard {
    type Item = RankedRow;
    type IntoIter = std::vec::IntoIter<RankedRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}
