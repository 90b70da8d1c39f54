//! JSON Lines event store
//!
//! Reads the append-only `events.jsonl` log the linking bot writes. The
//! file is re-read on every query so new events show up without a restart.
//! Lines that fail to parse are skipped with a warning.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::types::RequestEvent;

use super::store::{EventStore, StoreConfig, StoreConnector, StoreError, StoreResult};

/// Event store backed by a JSONL file
#[derive(Debug, Clone)]
pub struct JsonlEventStore {
    path: PathBuf,
}

impl JsonlEventStore {
    /// Open the log, failing if it is missing or not a file
    pub async fn open(config: &StoreConfig) -> StoreResult<Self> {
        let path = config.events_path().to_path_buf();
        let metadata = match tokio::fs::metadata(&path).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(path));
            }
            Err(e) => return Err(e.into()),
        };

        if !metadata.is_file() {
            return Err(StoreError::NotAFile(path));
        }

        Ok(Self { path })
    }

    /// Path of the underlying log
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Load all parseable events from the log, in file order
fn load_events(path: &Path) -> StoreResult<Vec<RequestEvent>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(StoreError::NotFound(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };
    let reader = BufReader::new(file);
    let mut events = Vec::new();

    // Split on raw bytes: a line with invalid UTF-8 is malformed, not an I/O failure
    for (line_num, line_result) in reader.split(b'\n').enumerate() {
        let line = line_result?;
        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }

        match RequestEvent::from_json_slice(&line) {
            Ok(event) => events.push(event),
            Err(e) => {
                warn!(line = line_num + 1, error = %e, "skipping malformed event");
            }
        }
    }

    Ok(events)
}

#[async_trait]
impl EventStore for JsonlEventStore {
    async fn scan(&self) -> StoreResult<Vec<RequestEvent>> {
        let path = self.path.clone();
        let events = tokio::task::spawn_blocking(move || load_events(&path)).await??;
        debug!(path = %self.path.display(), events = events.len(), "scanned event log");
        Ok(events)
    }

    async fn count(&self) -> StoreResult<u64> {
        // Same parse rules as scan so counts and leaderboards agree
        Ok(self.scan().await?.len() as u64)
    }

    fn describe(&self) -> String {
        format!("jsonl:{}", self.path.display())
    }
}

/// Connector that opens a `JsonlEventStore`
#[derive(Debug, Clone)]
pub struct JsonlConnector {
    config: StoreConfig,
}

impl JsonlConnector {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl StoreConnector for JsonlConnector {
    async fn connect(&self) -> StoreResult<Arc<dyn EventStore>> {
        let store = JsonlEventStore::open(&self.config).await?;
        Ok(Arc::new(store))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ModRecord;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_log(dir: &TempDir, lines: &[&str]) -> StoreConfig {
        let path = dir.path().join("events.jsonl");
        let mut file = File::create(&path).unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        StoreConfig::new(path)
    }

    fn event_line(requester: &str, title: &str, author: &str) -> String {
        RequestEvent::new(requester, ModRecord::new(title, "https://mods", author))
            .to_json_line()
            .unwrap()
    }

    #[tokio::test]
    async fn test_scan_preserves_file_order() {
        let temp_dir = TempDir::new().unwrap();
        let first = event_line("carol", "Fancy Armor", "Alice");
        let second = event_line("dave", "Better Swords", "Bob");
        let config = write_log(&temp_dir, &[first.as_str(), second.as_str()]);

        let store = JsonlEventStore::open(&config).await.unwrap();
        let events = store.scan().await.unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].mod_info.title, "Fancy Armor");
        assert_eq!(events[1].mod_info.title, "Better Swords");
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_skips_blank_and_malformed_lines() {
        let temp_dir = TempDir::new().unwrap();
        let good = event_line("carol", "Fancy Armor", "Alice");
        let config = write_log(&temp_dir, &[good.as_str(), "", "{not json", "   ", good.as_str()]);

        let store = JsonlEventStore::open(&config).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_skips_lines_with_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let good = event_line("carol", "Fancy Armor", "Alice");
        let path = temp_dir.path().join("events.jsonl");

        let mut bytes = Vec::new();
        bytes.extend_from_slice(good.as_bytes());
        bytes.extend_from_slice(b"\n{\"bad\":\"\xff\xfe\"}\r\n");
        bytes.extend_from_slice(good.as_bytes());
        bytes.extend_from_slice(b"\r\n");
        std::fs::write(&path, bytes).unwrap();

        let store = JsonlEventStore::open(&StoreConfig::new(path)).await.unwrap();
        let events = store.scan().await.unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].requesting_redditor, "carol");
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_empty_log_counts_zero() {
        let temp_dir = TempDir::new().unwrap();
        let config = write_log(&temp_dir, &[]);

        let store = JsonlEventStore::open(&config).await.unwrap();
        assert!(store.scan().await.unwrap().is_empty());
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_open_missing_log_fails() {
        let temp_dir = TempDir::new().unwrap();
        let config = StoreConfig::new(temp_dir.path().join("nope.jsonl"));

        let err = JsonlEventStore::open(&config).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_open_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let config = StoreConfig::new(temp_dir.path());

        let err = JsonlEventStore::open(&config).await.unwrap_err();
        assert!(matches!(err, StoreError::NotAFile(_)));
    }

    #[tokio::test]
    async fn test_log_removed_after_open() {
        let temp_dir = TempDir::new().unwrap();
        let config = write_log(&temp_dir, &[]);
        let store = JsonlEventStore::open(&config).await.unwrap();

        std::fs::remove_file(config.events_path()).unwrap();

        let err = store.scan().await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_connector_describes_path() {
        let temp_dir = TempDir::new().unwrap();
        let config = write_log(&temp_dir, &[]);

        let store = JsonlConnector::new(config.clone()).connect().await.unwrap();
        assert!(store.describe().starts_with("jsonl:"));
        assert!(store.describe().ends_with("events.jsonl"));
    }
}
