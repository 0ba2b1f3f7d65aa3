//! JSON file store for native builds

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::{BEST_STREAK_KEY, StreakStore};
use crate::GameError;

/// Key-value JSON document on disk, e.g. `{ "bestStreak": 3 }`
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

    fn read_document(&self) -> Result<BTreeMap<String, serde_json::Value>, GameError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let json = std::fs::read_to_string(&self.path)?;
        serde_json::from_str(&json).map_err(|e| {
            GameError::Persistence(format!("{}: {}", self.path.display(), e))
        })
    }
}

impl StreakStore for JsonFileStore {
    fn load_best_streak(&self) -> Result<u32, GameError> {
        let doc = self.read_document()?;
        let best = doc
            .get(BEST_STREAK_KEY)
            .and_then(|v| v.as_u64())
            .and_then(|v| u32::try_from(v).ok())
            .unwrap_or(0);
        log::info!("Loaded best streak {} from {}", best, self.path.display());
        Ok(best)
    }

    fn save_best_streak(&mut self, best: u32) -> Result<(), GameError> {
        // Keep any other keys written by other tools
        let mut doc = self.read_document().unwrap_or_default();
        doc.insert(BEST_STREAK_KEY.to_string(), best.into());
        let json = serde_json::to_string_pretty(&doc)
            .map_err(|e| GameError::Persistence(e.to_string()))?;

        // Write to a temp file and rename so a crash never leaves a torn file
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;
        log::info!("Best streak {} saved", best);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reads_zero() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("save.json"));
        assert_eq!(store.load_best_streak().unwrap(), 0);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.json");
        let mut store = JsonFileStore::new(&path);
        store.save_best_streak(9).unwrap();

        let reopened = JsonFileStore::new(&path);
        assert_eq!(reopened.load_best_streak().unwrap(), 9);
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"bestStreak\": 9"));
    }

    #[test]
    fn test_preserves_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.json");
        std::fs::write(&path, r#"{ "volume": 0.5, "bestStreak": 1 }"#).unwrap();

        let mut store = JsonFileStore::new(&path);
        store.save_best_streak(2).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("volume"));
        assert_eq!(store.load_best_streak().unwrap(), 2);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.json");
        std::fs::write(&path, "not json").unwrap();
        let store = JsonFileStore::new(&path);
        assert!(matches!(
            store.load_best_streak(),
            Err(GameError::Persistence(_))
        ));
    }
}
