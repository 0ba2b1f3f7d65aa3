//! Deterministic gameplay module
//!
//! All gameplay decisions live here. This module must stay deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering, audio or storage dependencies (side effects leave as events)

pub mod camera;
pub mod contact;
pub mod force;
pub mod keeper;
pub mod respawn;
pub mod state;
pub mod swipe;
pub mod tick;

pub use contact::{ContactKind, ContactOutcome};
pub use force::{GestureSample, Viewport, first_swipe_impulse, second_swipe_impulse};
pub use respawn::{RespawnKind, RespawnScheduler, ScheduledRespawn};
pub use state::{
    GameEvent, GameProgress, GameSession, KeeperMotion, Lifecycle, RespawnGuard, SwipeContext,
    VerticalState,
};
pub use swipe::SwipeOutcome;
pub use tick::{FrameClock, tick};
