//! Flick Soccer - swipe-to-kick penalty game core
//!
//! Core modules:
//! - `sim`: Deterministic gameplay (swipe forces, contacts, respawn, keeper AI, camera)
//! - `scene`: 3D engine boundary (named bodies, impulses, positions)
//! - `game`: Host wiring the session to scene, audio, HUD and persistence
//! - `persistence`: Best-streak storage
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod error;
pub mod game;
pub mod hud;
pub mod persistence;
pub mod scene;
pub mod sim;
pub mod tuning;

pub use error::GameError;
pub use game::{ContactListener, Game, TickListener};
pub use scene::{Body, MemoryScene, Scene};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (the engine renders at 60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Minimum vertical swipe travel as a fraction of viewport height
    pub const MIN_SWIPE_TRAVEL: f32 = 0.2;
    /// Swipes slower than this (seconds) are rejected
    pub const MAX_SWIPE_DURATION: f32 = 0.5;
    /// Global impulse multiplier (physics bodies are configured in centi-units)
    pub const IMPULSE_SCALE: f32 = 0.01;

    /// Delay between a deciding contact and the respawn reset (seconds)
    pub const RESPAWN_DELAY: f32 = 1.0;
    /// Kickoff x is drawn from [min, max)
    pub const SPAWN_X_RANGE: (f32, f32) = (-2.0, 3.0);
    /// Kickoff z offset is drawn from [min, max)
    pub const SPAWN_Z_OFFSET_RANGE: (f32, f32) = (0.0, 5.0);

    /// Keeper tracks the ball only within the goal mouth
    pub const KEEPER_X_LIMIT: f32 = 3.2;
    /// Ball height that makes a grounded keeper jump
    pub const KEEPER_JUMP_TRIGGER: f32 = 1.5;
    /// Jump height at which the keeper starts falling
    pub const KEEPER_JUMP_APEX: f32 = 0.5;
    /// Vertical keeper travel per tick
    pub const KEEPER_JUMP_STEP: f32 = 0.1;
    /// Keeper pursuit rate gained per goal in a streak
    pub const KEEPER_SPEED_STEP: f32 = 0.1;

    /// Camera damping rate toward its follow point (1/s)
    pub const CAMERA_DAMPING: f32 = 6.0;
}
