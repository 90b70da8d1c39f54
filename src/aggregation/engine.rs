//! Leaderboard aggregation
//!
//! `rank` is the whole pipeline over an in-memory slice: group by the
//! dimension's field, keep first-seen auxiliary values, count, sort by
//! count descending and truncate. Groups with equal counts stay in the
//! order their first event appears in the log.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use tracing::debug;

use crate::error::{StatsError, StatsResult};
use crate::event_store::EventStore;
use crate::types::{Leaderboard, RankedRow, RequestEvent};

use super::dimension::Dimension;

struct Group<'a> {
    key: &'a str,
    count: u64,
    auxiliary: BTreeMap<String, String>,
}

/// Rank `events` by `dimension`, keeping at most `limit` rows
pub fn rank(events: &[RequestEvent], dimension: Dimension, limit: usize) -> StatsResult<Leaderboard> {
    if limit == 0 {
        return Err(StatsError::InvalidLimit);
    }

    let descriptor = dimension.descriptor();
    let mut groups: Vec<Group<'_>> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for event in events {
        let key = descriptor.group_field.extract(event);
        match index.get(key) {
            Some(&slot) => groups[slot].count += 1,
            None => {
                let auxiliary = descriptor
                    .auxiliary
                    .iter()
                    .map(|(name, field)| (name.to_string(), field.extract(event).to_string()))
                    .collect();
                index.insert(key, groups.len());
                groups.push(Group {
                    key,
                    count: 1,
                    auxiliary,
                });
            }
        }
    }

    // Stable: equal counts keep first-seen order
    groups.sort_by(|a, b| b.count.cmp(&a.count));
    groups.truncate(limit);

    let rows = groups
        .into_iter()
        .map(|g| RankedRow {
            key: g.key.to_string(),
            count: g.count,
            auxiliary: g.auxiliary,
        })
        .collect();

    Ok(Leaderboard::new(rows))
}

/// Computes leaderboards against a connected event store
#[derive(Clone)]
pub struct AggregationEngine {
    store: Arc<dyn EventStore>,
}

impl AggregationEngine {
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self { store }
    }

    /// The store this engine reads from
    pub fn store(&self) -> &Arc<dyn EventStore> {
        &self.store
    }

    /// Top `limit` groups for `dimension`
    pub async fn top_by(&self, dimension: Dimension, limit: usize) -> StatsResult<Leaderboard> {
        if limit == 0 {
            return Err(StatsError::InvalidLimit);
        }

        let events = self.store.scan().await?;
        let board = rank(&events, dimension, limit)?;
        debug!(
            %dimension,
            limit,
            events = events.len(),
            rows = board.len(),
            "computed leaderboard"
        );
        Ok(board)
    }

    /// Number of events in the store
    pub async fn total_count(&self) -> StatsResult<u64> {
        Ok(self.store.count().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_store::InMemoryEventStore;
    use crate::types::ModRecord;

    fn event(requester: &str, title: &str, author: &str) -> RequestEvent {
        RequestEvent::new(
            requester,
            ModRecord::new(title, format!("https://mods/{}", title), author)
                .with_author_url(format!("https://authors/{}", author)),
        )
    }

    fn armory() -> Vec<RequestEvent> {
        vec![
            event("carol", "Fancy Armor", "Alice"),
            event("dave", "Fancy Armor", "Alice"),
            event("carol", "Better Swords", "Bob"),
        ]
    }

    #[test]
    fn test_rank_mods_scenario() {
        let board = rank(&armory(), Dimension::Mods, 10).unwrap();

        assert_eq!(board.len(), 2);
        assert_eq!(board.rows[0].key, "Fancy Armor");
        assert_eq!(board.rows[0].count, 2);
        assert_eq!(board.rows[0].aux("author"), "Alice");
        assert_eq!(board.rows[0].aux("url"), "https://mods/Fancy Armor");
        assert_eq!(board.rows[1].key, "Better Swords");
        assert_eq!(board.rows[1].count, 1);
        assert_eq!(board.rows[1].aux("author"), "Bob");
    }

    #[test]
    fn test_rank_authors_carries_profile_url() {
        let board = rank(&armory(), Dimension::Authors, 10).unwrap();

        assert_eq!(board.keys(), vec!["Alice", "Bob"]);
        assert_eq!(board.rows[0].aux("url"), "https://authors/Alice");
        assert_eq!(board.rows[0].auxiliary.len(), 1);
    }

    #[test]
    fn test_rank_requesters_has_no_auxiliary() {
        let board = rank(&armory(), Dimension::Requesters, 10).unwrap();

        assert_eq!(board.keys(), vec!["carol", "dave"]);
        assert_eq!(board.counts(), vec![2, 1]);
        assert!(board.iter().all(|r| r.auxiliary.is_empty()));
    }

    #[test]
    fn test_auxiliary_is_first_seen() {
        let events = vec![
            event("carol", "Fancy Armor", "Alice"),
            event("dave", "Fancy Armor", "Mallory"),
        ];

        let board = rank(&events, Dimension::Mods, 10).unwrap();
        assert_eq!(board.rows[0].aux("author"), "Alice");
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let events = vec![
            event("zed", "Zebra Saddles", "Zoe"),
            event("amy", "Apple Trees", "Ann"),
            event("mo", "Mushrooms", "Max"),
            event("amy", "Apple Trees", "Ann"),
            event("zed", "Zebra Saddles", "Zoe"),
        ];

        let board = rank(&events, Dimension::Mods, 10).unwrap();
        assert_eq!(board.keys(), vec!["Zebra Saddles", "Apple Trees", "Mushrooms"]);
    }

    #[test]
    fn test_limit_truncates_and_counts_sum() {
        let mut events = Vec::new();
        for (i, title) in ["A", "B", "C", "D", "E"].iter().enumerate() {
            for _ in 0..=i {
                events.push(event("carol", title, "Alice"));
            }
        }

        let board = rank(&events, Dimension::Mods, 3).unwrap();
        assert_eq!(board.keys(), vec!["E", "D", "C"]);

        let all = rank(&events, Dimension::Mods, 100).unwrap();
        assert_eq!(all.len(), 5);
        assert_eq!(all.counts().iter().sum::<u64>(), events.len() as u64);
        assert!(all.counts().windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_zero_limit_rejected() {
        let err = rank(&armory(), Dimension::Mods, 0).unwrap_err();
        assert!(matches!(err, StatsError::InvalidLimit));
    }

    #[test]
    fn test_empty_events() {
        for dimension in Dimension::ALL {
            assert!(rank(&[], dimension, 10).unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn test_engine_against_store() {
        let engine = AggregationEngine::new(Arc::new(InMemoryEventStore::new(armory())));

        let board = engine.top_by(Dimension::Mods, 10).await.unwrap();
        assert_eq!(board.keys(), vec!["Fancy Armor", "Better Swords"]);
        assert_eq!(engine.total_count().await.unwrap(), 3);

        // Idempotent over an unchanged store
        assert_eq!(engine.top_by(Dimension::Mods, 10).await.unwrap(), board);
    }

    #[tokio::test]
    async fn test_engine_empty_store() {
        let engine = AggregationEngine::new(Arc::new(InMemoryEventStore::default()));

        assert!(engine.top_by(Dimension::Authors, 10).await.unwrap().is_empty());
        assert_eq!(engine.total_count().await.unwrap(), 0);
    }
}
