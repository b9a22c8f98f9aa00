//! Rolling statistics and their persistence
//!
//! Statistics live across sessions in an opaque key-value store. The engine
//! reads them once at construction and writes them back as a single blob
//! after each completed game; abandoned games never touch them.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Store key under which statistics are persisted, stable across sessions
pub const STATS_KEY: &str = "neno-stats";

/// Rolling player statistics
///
/// Mutated exactly once per completed game (win or loss); `max_streak` never
/// decreases and `games_won` never exceeds `games_played`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub games_played: u32,
    pub games_won: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    /// Epoch milliseconds of the last session checkpoint
    pub last_game_ms: Option<u64>,
}

impl Statistics {
    /// Bookkeeping for a won game
    pub fn record_win(&mut self) {
        self.games_won += 1;
        self.current_streak += 1;
        self.max_streak = self.max_streak.max(self.current_streak);
        self.games_played += 1;
    }

    /// Bookkeeping for a lost game
    pub fn record_loss(&mut self) {
        self.current_streak = 0;
        self.games_played += 1;
    }

    /// Load statistics from the store, zeroed when missing or unreadable
    #[must_use]
    pub fn load(store: &dyn StatsStore) -> Self {
        store
            .get(STATS_KEY)
            .ok()
            .flatten()
            .and_then(|blob| serde_json::from_str(&blob).ok())
            .unwrap_or_default()
    }

    /// Persist statistics to the store as one atomic blob
    ///
    /// # Errors
    /// Returns [`StoreError`] when the store rejects the write; callers are
    /// expected to surface this as "statistics not saved" rather than fail
    /// the round.
    pub fn save(&self, store: &mut dyn StatsStore) -> Result<(), StoreError> {
        let blob = serde_json::to_string(self)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        store.set(STATS_KEY, &blob)
    }
}

/// Error type for statistics storage
#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Serialization(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "statistics store I/O error: {e}"),
            Self::Serialization(e) => write!(f, "statistics serialization error: {e}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<io::Error> for StoreError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Opaque key-value persistence collaborator
///
/// The engine only needs `get` and `set` of string blobs; what backs them is
/// the host's concern.
pub trait StatsStore {
    /// Fetch the blob stored under `key`, if any
    ///
    /// # Errors
    /// Returns [`StoreError`] when the store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous blob
    ///
    /// # Errors
    /// Returns [`StoreError`] when the store cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store, used by tests and ephemeral sessions
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    map: FxHashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StatsStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.map.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.map.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed store: one file per key under a directory
///
/// Writes go through a temporary file and a rename, so a crash mid-write
/// leaves the previous blob intact.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StatsStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_win_updates_all_counters() {
        let mut stats = Statistics::default();
        stats.record_win();
        stats.record_win();

        assert_eq!(stats.games_played, 2);
        assert_eq!(stats.games_won, 2);
        assert_eq!(stats.current_streak, 2);
        assert_eq!(stats.max_streak, 2);
    }

    #[test]
    fn record_loss_resets_streak_but_keeps_max() {
        let mut stats = Statistics::default();
        stats.record_win();
        stats.record_win();
        stats.record_loss();

        assert_eq!(stats.games_played, 3);
        assert_eq!(stats.games_won, 2);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.max_streak, 2);
    }

    #[test]
    fn max_streak_never_decreases() {
        let mut stats = Statistics::default();
        stats.record_win();
        stats.record_loss();
        stats.record_win();

        assert_eq!(stats.max_streak, 1);
        stats.record_win();
        assert_eq!(stats.max_streak, 2);
    }

    #[test]
    fn roundtrip_through_memory_store() {
        let mut store = MemoryStore::new();
        let mut stats = Statistics::default();
        stats.record_win();
        stats.last_game_ms = Some(1_700_000_000_000);

        stats.save(&mut store).unwrap();
        assert_eq!(Statistics::load(&store), stats);
    }

    #[test]
    fn load_from_empty_store_is_zeroed() {
        let store = MemoryStore::new();
        assert_eq!(Statistics::load(&store), Statistics::default());
    }

    #[test]
    fn load_ignores_corrupt_blob() {
        let mut store = MemoryStore::new();
        store.set(STATS_KEY, "not json at all").unwrap();
        assert_eq!(Statistics::load(&store), Statistics::default());
    }

    #[test]
    fn file_store_roundtrip() {
        let dir = std::env::temp_dir().join(format!("neno-stats-test-{}", std::process::id()));
        let mut store = FileStore::new(&dir);

        assert_eq!(store.get(STATS_KEY).unwrap(), None);

        let mut stats = Statistics::default();
        stats.record_win();
        stats.save(&mut store).unwrap();
        assert_eq!(Statistics::load(&store), stats);

        fs::remove_dir_all(&dir).unwrap();
    }
}
