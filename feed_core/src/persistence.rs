//! Stats persistence port.
//!
//! Saving is best effort and loading is optional: a missing entry is
//! `Ok(None)`, never an error.

use feed_rules::StatsSnapshot;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::PersistenceError;

/// Fixed key stats are stored under.
pub const STATS_KEY: &str = "echoChamberStats";

/// Where aggregate stats go at game over.
pub trait StatsStore {
    fn save(&self, key: &str, snapshot: &StatsSnapshot) -> Result<(), PersistenceError>;

    fn load(&self, key: &str) -> Result<Option<StatsSnapshot>, PersistenceError>;
}

/// Store that drops everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStatsStore;

impl StatsStore for NullStatsStore {
    fn save(&self, _key: &str, _snapshot: &StatsSnapshot) -> Result<(), PersistenceError> {
        Ok(())
    }

    fn load(&self, _key: &str) -> Result<Option<StatsSnapshot>, PersistenceError> {
        Ok(None)
    }
}

/// In-process store, mostly for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStatsStore {
    entries: RefCell<HashMap<String, StatsSnapshot>>,
}

impl MemoryStatsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl StatsStore for MemoryStatsStore {
    fn save(&self, key: &str, snapshot: &StatsSnapshot) -> Result<(), PersistenceError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), snapshot.clone());
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<StatsSnapshot>, PersistenceError> {
        Ok(self.entries.borrow().get(key).cloned())
    }
}

/// Stores each key as pretty JSON at `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStatsStore {
    dir: PathBuf,
}

impl JsonFileStatsStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl StatsStore for JsonFileStatsStore {
    fn save(&self, key: &str, snapshot: &StatsSnapshot) -> Result<(), PersistenceError> {
        std::fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string_pretty(snapshot)?;
        std::fs::write(self.path_for(key), json)?;
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<StatsSnapshot>, PersistenceError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use feed_rules::{FallacyKind, GameStats};

    fn snapshot() -> StatsSnapshot {
        let mut stats = GameStats::new();
        stats.track_correct(FallacyKind::Strawman);
        stats.track_missed(FallacyKind::Whataboutism);
        stats.track_reaction_time(2.5);
        stats.snapshot()
    }

    fn temp_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("echo-chamber-{}-{}", name, std::process::id()))
    }

    #[test]
    fn test_null_store() {
        let store = NullStatsStore;
        store.save(STATS_KEY, &snapshot()).unwrap();
        assert!(store.load(STATS_KEY).unwrap().is_none());
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStatsStore::new();
        assert!(store.load(STATS_KEY).unwrap().is_none());

        store.save(STATS_KEY, &snapshot()).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.load(STATS_KEY).unwrap(), Some(snapshot()));
    }

    #[test]
    fn test_json_file_store() {
        let dir = temp_dir("json-store");
        let store = JsonFileStatsStore::new(&dir);

        assert!(store.load(STATS_KEY).unwrap().is_none());

        store.save(STATS_KEY, &snapshot()).unwrap();
        assert!(store.path_for(STATS_KEY).ends_with("echoChamberStats.json"));
        assert_eq!(store.load(STATS_KEY).unwrap(), Some(snapshot()));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_json_file_store_corrupt_entry() {
        let dir = temp_dir("json-corrupt");
        std::fs::create_dir_all(&dir).unwrap();
        let store = JsonFileStatsStore::new(&dir);
        std::fs::write(store.path_for(STATS_KEY), "{ not json").unwrap();

        assert!(matches!(
            store.load(STATS_KEY),
            Err(PersistenceError::Serialize(_))
        ));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
