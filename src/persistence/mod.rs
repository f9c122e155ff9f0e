//! Best-score persistence
//!
//! A store holds one non-negative integer under a fixed key. Reads never fail:
//! a missing or unreadable value comes back as 0. Write failures are logged
//! and dropped.
//!
//! Backends:
//! - `MemoryStore`: process lifetime only (tests, headless runs)
//! - `JsonFileStore`: a small JSON object on disk (native)
//! - `LocalStorageStore`: browser LocalStorage (wasm32)

use std::collections::HashMap;

use crate::consts::BEST_SCORE_KEY;

#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(target_arch = "wasm32")]
mod local_storage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::JsonFileStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

/// Durable storage for the best score
pub trait ScoreStore {
    /// Stored value, 0 if absent or corrupt
    fn get(&self) -> u32;
    /// Replace the stored value
    fn set(&mut self, score: u32);
}

/// Parse a stored value, falling back to 0
pub fn parse_score(raw: Option<&str>) -> u32 {
    match raw {
        None => 0,
        Some(text) => text.trim().parse().unwrap_or_else(|_| {
            log::warn!("Ignoring unreadable best score {:?}", text);
            0
        }),
    }
}

/// Volatile store keyed like the durable ones
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    /// Number of `set` calls, for checking write frequency
    pub writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a raw value under the best-score key
    pub fn with_raw(raw: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(BEST_SCORE_KEY.to_string(), raw.to_string());
        store
    }
}

impl ScoreStore for MemoryStore {
    fn get(&self) -> u32 {
        parse_score(self.values.get(BEST_SCORE_KEY).map(String::as_str))
    }

    fn set(&mut self, score: u32) {
        self.values.insert(BEST_SCORE_KEY.to_string(), score.to_string());
        self.writes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_score() {
        assert_eq!(parse_score(None), 0);
        assert_eq!(parse_score(Some("42")), 42);
        assert_eq!(parse_score(Some(" 7\n")), 7);
        assert_eq!(parse_score(Some("garbage")), 0);
        assert_eq!(parse_score(Some("-3")), 0);
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get(), 0);
        store.set(15);
        assert_eq!(store.get(), 15);
        assert_eq!(store.writes, 1);

        assert_eq!(MemoryStore::with_raw("NaN").get(), 0);
    }
}
