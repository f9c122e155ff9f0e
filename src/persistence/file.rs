//! JSON file backend for native builds

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::ScoreStore;
use crate::consts::BEST_SCORE_KEY;

/// Key-value JSON object on disk, e.g. `{ "highestScore": 17 }`
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> BTreeMap<String, serde_json::Value> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    log::warn!("Failed to read {:?}: {}", self.path, e);
                }
                return BTreeMap::new();
            }
        };

        serde_json::from_str(&contents).unwrap_or_else(|e| {
            log::warn!("Corrupt score file {:?}: {}. Starting fresh.", self.path, e);
            BTreeMap::new()
        })
    }
}

impl ScoreStore for JsonFileStore {
    fn get(&self) -> u32 {
        match self.read_map().get(BEST_SCORE_KEY) {
            None => 0,
            Some(serde_json::Value::Number(n)) => n
                .as_u64()
                .and_then(|v| u32::try_from(v).ok())
                .unwrap_or(0),
            Some(serde_json::Value::String(s)) => super::parse_score(Some(s)),
            Some(other) => {
                log::warn!("Unexpected best score value {}", other);
                0
            }
        }
    }

    fn set(&mut self, score: u32) {
        let mut map = self.read_map();
        map.insert(BEST_SCORE_KEY.to_string(), score.into());

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if let Err(e) = fs::create_dir_all(parent) {
                log::error!("Failed to create {:?}: {}", parent, e);
                return;
            }
        }

        match serde_json::to_string_pretty(&map) {
            Ok(json) => match fs::write(&self.path, json) {
                Ok(()) => log::info!("Best score {} saved to {:?}", score, self.path),
                Err(e) => log::error!("Failed to write {:?}: {}", self.path, e),
            },
            Err(e) => log::error!("Failed to serialize scores: {}", e),
        }
    }
}
