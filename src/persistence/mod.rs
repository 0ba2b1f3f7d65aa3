//! Best-streak persistence
//!
//! One integer under the key `bestStreak`:
//! - JSON file on native
//! - LocalStorage on web
//! - In-memory for tests and headless runs

pub mod file;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use file::JsonFileStore;
#[cfg(target_arch = "wasm32")]
pub use web::LocalStorageStore;

use crate::GameError;

/// Storage key for the best streak
pub const BEST_STREAK_KEY: &str = "bestStreak";

/// Storage for the best-streak record
pub trait StreakStore {
    /// Stored best streak, 0 when nothing has been saved yet
    fn load_best_streak(&self) -> Result<u32, GameError>;

    fn save_best_streak(&mut self, best: u32) -> Result<(), GameError>;
}

/// Volatile store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub best_streak: Option<u32>,
    /// Number of successful saves
    pub writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_best(best: u32) -> Self {
        Self {
            best_streak: Some(best),
            writes: 0,
        }
    }
}

impl StreakStore for MemoryStore {
    fn load_best_streak(&self) -> Result<u32, GameError> {
        Ok(self.best_streak.unwrap_or(0))
    }

    fn save_best_streak(&mut self, best: u32) -> Result<(), GameError> {
        self.best_streak = Some(best);
        self.writes += 1;
        Ok(())
    }
}
