//! Data-driven game balance
//!
//! Every gameplay constant can be overridden from JSON. Missing fields fall
//! back to the values in [`crate::consts`].

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::GameError;
use crate::consts::*;

/// Tunable gameplay parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Swipe ===
    /// Minimum upward travel as a fraction of viewport height (first swipe)
    pub min_swipe_travel: f32,
    /// Maximum gesture duration in seconds (both swipes)
    pub max_swipe_duration: f32,
    /// Multiplier applied to every computed impulse
    pub impulse_scale: f32,

    // === Respawn ===
    /// Seconds between a deciding contact and the reset
    pub respawn_delay: f32,
    /// Ball kickoff position before randomization
    pub ball_spawn: Vec3,
    /// Camera position before randomization
    pub camera_spawn: Vec3,
    /// Keeper position before randomization (y is the keeper's ground height)
    pub keeper_spawn: Vec3,
    /// Half-open range for the shared kickoff x
    pub spawn_x_range: (f32, f32),
    /// Half-open range for the shared z offset
    pub spawn_z_offset_range: (f32, f32),

    // === Keeper ===
    pub keeper_x_limit: f32,
    pub keeper_jump_trigger: f32,
    pub keeper_jump_apex: f32,
    pub keeper_jump_step: f32,
    pub keeper_speed_step: f32,

    // === Camera ===
    /// Follow point relative to the ball (behind and above)
    pub camera_offset: Vec3,
    /// Exponential damping rate (1/s)
    pub camera_damping: f32,

    // === Loop ===
    pub sim_dt: f32,
    pub max_substeps: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            min_swipe_travel: MIN_SWIPE_TRAVEL,
            max_swipe_duration: MAX_SWIPE_DURATION,
            impulse_scale: IMPULSE_SCALE,

            respawn_delay: RESPAWN_DELAY,
            ball_spawn: Vec3::new(0.0, 0.2, 0.0),
            camera_spawn: Vec3::new(0.0, 1.5, 4.0),
            keeper_spawn: Vec3::new(0.0, 0.6, -9.0),
            spawn_x_range: SPAWN_X_RANGE,
            spawn_z_offset_range: SPAWN_Z_OFFSET_RANGE,

            keeper_x_limit: KEEPER_X_LIMIT,
            keeper_jump_trigger: KEEPER_JUMP_TRIGGER,
            keeper_jump_apex: KEEPER_JUMP_APEX,
            keeper_jump_step: KEEPER_JUMP_STEP,
            keeper_speed_step: KEEPER_SPEED_STEP,

            camera_offset: Vec3::new(0.0, 1.3, 4.0),
            camera_damping: CAMERA_DAMPING,

            sim_dt: SIM_DT,
            max_substeps: MAX_SUBSTEPS,
        }
    }
}

impl Tuning {
    /// Parse tuning from a JSON document
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let tuning: Tuning =
            serde_json::from_str(json).map_err(|e| GameError::Tuning(e.to_string()))?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| GameError::Tuning(format!("{}: {}", path.display(), e)))?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), GameError> {
        if !(self.sim_dt > 0.0 && self.sim_dt.is_finite()) {
            return Err(GameError::Tuning("sim_dt must be positive".into()));
        }
        if self.max_substeps == 0 {
            return Err(GameError::Tuning("max_substeps must be at least 1".into()));
        }
        if self.respawn_delay < 0.0 {
            return Err(GameError::Tuning("respawn_delay must not be negative".into()));
        }
        for (name, (lo, hi)) in [
            ("spawn_x_range", self.spawn_x_range),
            ("spawn_z_offset_range", self.spawn_z_offset_range),
        ] {
            if !(lo.is_finite() && hi.is_finite()) {
                return Err(GameError::Tuning(format!("{name} must have finite ends")));
            }
            if !(lo < hi) {
                return Err(GameError::Tuning(format!("{name} must be a non-empty range")));
            }
        }
        Ok(())
    }
}
