//! Browser LocalStorage backend (wasm32 only)

use super::{ScoreStore, parse_score};
use crate::consts::BEST_SCORE_KEY;

/// Stores the best score as a decimal string under a fixed key
#[derive(Debug, Clone, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

impl ScoreStore for LocalStorageStore {
    fn get(&self) -> u32 {
        let Some(storage) = Self::storage() else {
            log::warn!("LocalStorage unavailable, best score starts at 0");
            return 0;
        };
        let raw = storage.get_item(BEST_SCORE_KEY).ok().flatten();
        parse_score(raw.as_deref())
    }

    fn set(&mut self, score: u32) {
        let Some(storage) = Self::storage() else {
            log::error!("LocalStorage unavailable, best score not saved");
            return;
        };
        match storage.set_item(BEST_SCORE_KEY, &score.to_string()) {
            Ok(()) => log::info!("Best score {} saved", score),
            Err(e) => log::error!("Failed to save best score: {:?}", e),
        }
    }
}
