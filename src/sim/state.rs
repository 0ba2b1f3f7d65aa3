//! Session state and core gameplay types
//!
//! Everything the gameplay core mutates lives in [`GameSession`]. Event
//! handlers borrow it mutably, so gestures, contacts, ticks and delayed
//! respawns are serialized by construction.

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::force::GestureSample;
use super::respawn::RespawnScheduler;
use crate::GameError;
use crate::scene::{Body, Scene};
use crate::tuning::Tuning;

/// Two-phase lifecycle: no handler runs before the scene is validated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lifecycle {
    Uninitialized,
    Ready,
}

/// Per-possession swipe bookkeeping
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SwipeContext {
    /// 0 = idle, 1 = airborne, 2 = curved (input closed until respawn)
    pub swipe_count: u8,
    /// Sample recorded at gesture begin
    pub start: Option<GestureSample>,
}

/// Score, streak record and keeper difficulty
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameProgress {
    /// Current streak of consecutive goals
    pub score: u32,
    /// Longest streak ever committed (persisted)
    pub best_streak: u32,
    /// Keeper pursuit rate, grows with the streak
    pub keeper_speed: f32,
}

/// Latches guarding against duplicate handling while a respawn is pending
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RespawnGuard {
    pub respawning: bool,
    pub bounced_off_post_or_keeper: bool,
}

/// Keeper jump cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerticalState {
    #[default]
    Grounded,
    Jumping,
    Falling,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct KeeperMotion {
    pub vertical: VerticalState,
    /// Height above the keeper's ground level
    pub height: f32,
}

/// Side effects for the host to route to audio, HUD and persistence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    KickSound,
    GoalSound,
    ScoreChanged(u32),
    BestStreakChanged(u32),
}

/// All mutable gameplay state
#[derive(Debug, Clone)]
pub struct GameSession {
    pub tuning: Tuning,
    lifecycle: Lifecycle,
    pub swipe: SwipeContext,
    pub progress: GameProgress,
    pub guard: RespawnGuard,
    pub keeper: KeeperMotion,
    /// Gates camera follow; set on kickoff, cleared on respawn
    pub ball_moving: bool,
    pub scheduler: RespawnScheduler,
    /// Simulated seconds since initialization
    pub clock: f64,
    /// Kickoff randomization
    pub(crate) rng: Pcg32,
    events: Vec<GameEvent>,
}

impl GameSession {
    /// Create an uninitialized session
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        Self {
            tuning,
            lifecycle: Lifecycle::Uninitialized,
            swipe: SwipeContext::default(),
            progress: GameProgress::default(),
            guard: RespawnGuard::default(),
            keeper: KeeperMotion::default(),
            ball_moving: false,
            scheduler: RespawnScheduler::default(),
            clock: 0.0,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        }
    }

    /// Validate the scene, load the stored best streak and place the kickoff.
    ///
    /// Fails if the tuning is unusable or any required body is missing; the
    /// session stays uninitialized.
    pub fn initialize(&mut self, scene: &mut dyn Scene, best_streak: u32) -> Result<(), GameError> {
        if self.lifecycle == Lifecycle::Ready {
            return Err(GameError::AlreadyInitialized);
        }
        if let Err(e) = self.tuning.validate() {
            log::error!("Rejecting tuning: {}", e);
            return Err(e);
        }
        if let Some(missing) = Body::ALL.iter().find(|b| !scene.has_body(b.name())) {
            log::error!("Scene is missing required body '{}'", missing.name());
            return Err(GameError::MissingBody(missing.name()));
        }

        self.progress = GameProgress {
            score: 0,
            best_streak,
            keeper_speed: 0.0,
        };
        self.swipe = SwipeContext::default();
        self.guard = RespawnGuard::default();
        self.keeper = KeeperMotion::default();
        self.ball_moving = false;

        scene.set_position(Body::Ball, self.tuning.ball_spawn);
        scene.set_position(Body::Camera, self.tuning.camera_spawn);
        scene.set_position(Body::GoalKeeper, self.tuning.keeper_spawn);

        self.lifecycle = Lifecycle::Ready;
        self.events.push(GameEvent::ScoreChanged(0));
        self.events.push(GameEvent::BestStreakChanged(best_streak));
        log::info!("Session ready (best streak {})", best_streak);
        Ok(())
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub(crate) fn ensure_ready(&self) -> Result<(), GameError> {
        match self.lifecycle {
            Lifecycle::Ready => Ok(()),
            Lifecycle::Uninitialized => {
                log::warn!("Event received before initialization");
                Err(GameError::NotInitialized)
            }
        }
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all side effects recorded since the last drain (oldest first)
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Move ball, camera and keeper to a kickoff offset from the spawn points
    pub(crate) fn place_kickoff(&self, scene: &mut dyn Scene, x: f32, z_offset: f32) {
        let t = &self.tuning;
        let at = |base: Vec3| Vec3::new(x, base.y, base.z + z_offset);
        scene.set_position(Body::Ball, at(t.ball_spawn));
        scene.set_position(Body::Camera, at(t.camera_spawn));
        scene.set_position(Body::GoalKeeper, at(t.keeper_spawn));
    }
}
