//! LocalStorage store for the web build

use super::{BEST_STREAK_KEY, StreakStore};
use crate::GameError;

/// Browser LocalStorage, one string value per key
#[derive(Debug, Clone, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Result<web_sys::Storage, GameError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| GameError::Persistence("LocalStorage unavailable".into()))
    }
}

impl StreakStore for LocalStorageStore {
    fn load_best_streak(&self) -> Result<u32, GameError> {
        let storage = Self::storage()?;
        let best = storage
            .get_item(BEST_STREAK_KEY)
            .ok()
            .flatten()
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);
        log::info!("Loaded best streak {}", best);
        Ok(best)
    }

    fn save_best_streak(&mut self, best: u32) -> Result<(), GameError> {
        Self::storage()?
            .set_item(BEST_STREAK_KEY, &best.to_string())
            .map_err(|_| GameError::Persistence("LocalStorage write failed".into()))?;
        log::info!("Best streak {} saved", best);
        Ok(())
    }
}
