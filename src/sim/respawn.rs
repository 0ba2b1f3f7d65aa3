//! Delayed respawn scheduling
//!
//! A deciding contact claims a latch immediately and queues a reset that fires
//! `respawn_delay` simulated seconds later. There is no cancel: a bounce reset
//! re-checks its latch when it fires and does nothing if a goal or
//! out-of-bounds contact cleared it in the meantime.

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{GameEvent, GameSession, KeeperMotion};
use crate::scene::{Body, Scene};

/// Which contact category queued the reset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RespawnKind {
    /// Goal or out of bounds: authoritative, fires unconditionally
    ScoreOrBounds,
    /// Post or keeper: counts as a miss only if nothing else decides the play
    Bounce,
}

/// A queued reset with the score it will commit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduledRespawn {
    pub kind: RespawnKind,
    pub target_score: u32,
    /// Session clock time at which the reset fires
    pub fire_at: f64,
}

/// One-shot delayed actions, fired in schedule order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RespawnScheduler {
    pending: Vec<ScheduledRespawn>,
}

impl RespawnScheduler {
    pub fn schedule(&mut self, task: ScheduledRespawn) {
        // Stable insert keeps equal fire times in schedule order
        let idx = self.pending.partition_point(|t| t.fire_at <= task.fire_at);
        self.pending.insert(idx, task);
    }

    /// Remove and return every task due at `now`
    pub fn take_due(&mut self, now: f64) -> Vec<ScheduledRespawn> {
        let due = self.pending.partition_point(|t| t.fire_at <= now);
        self.pending.drain(..due).collect()
    }

    pub fn pending(&self) -> &[ScheduledRespawn] {
        &self.pending
    }
}

impl GameSession {
    /// Claim the latch for `kind` and queue the reset
    pub(crate) fn schedule_respawn(&mut self, kind: RespawnKind, target_score: u32) {
        match kind {
            RespawnKind::ScoreOrBounds => {
                self.guard.respawning = true;
                self.guard.bounced_off_post_or_keeper = false;
            }
            RespawnKind::Bounce => {
                self.guard.bounced_off_post_or_keeper = true;
            }
        }
        let fire_at = self.clock + self.tuning.respawn_delay as f64;
        self.scheduler.schedule(ScheduledRespawn {
            kind,
            target_score,
            fire_at,
        });
        log::debug!(
            "Respawn {:?} -> score {} at t={:.2}",
            kind,
            target_score,
            fire_at
        );
    }

    /// Fire every reset due at the current clock. Returns how many applied.
    pub(crate) fn fire_due_respawns(&mut self, scene: &mut dyn Scene) -> usize {
        let mut applied = 0;
        for task in self.scheduler.take_due(self.clock) {
            if task.kind == RespawnKind::Bounce && !self.guard.bounced_off_post_or_keeper {
                log::debug!("Stale bounce respawn skipped");
                continue;
            }
            self.complete_respawn(scene, task);
            applied += 1;
        }
        applied
    }

    fn complete_respawn(&mut self, scene: &mut dyn Scene, task: ScheduledRespawn) {
        self.commit_score(task.target_score);

        scene.clear_forces(Body::Ball);
        scene.set_velocity(Body::Ball, Vec3::ZERO);

        let (x_lo, x_hi) = self.tuning.spawn_x_range;
        let (z_lo, z_hi) = self.tuning.spawn_z_offset_range;
        let x = self.rng.random_range(x_lo..x_hi);
        let z_offset = self.rng.random_range(z_lo..z_hi);
        self.place_kickoff(scene, x, z_offset);

        match task.kind {
            RespawnKind::ScoreOrBounds => self.guard.respawning = false,
            RespawnKind::Bounce => self.guard.bounced_off_post_or_keeper = false,
        }
        self.ball_moving = false;
        self.swipe.swipe_count = 0;
        self.keeper = KeeperMotion::default();

        log::info!(
            "Respawn ({:?}) score={} best={} keeper_speed={:.1}",
            task.kind,
            self.progress.score,
            self.progress.best_streak,
            self.progress.keeper_speed
        );
    }

    /// Commit a resolved score, then update the streak record and keeper speed
    fn commit_score(&mut self, target: u32) {
        if self.progress.score != target {
            self.emit(GameEvent::ScoreChanged(target));
        }
        self.progress.score = target;

        if self.progress.score > 0 {
            self.progress.keeper_speed += self.tuning.keeper_speed_step;
            if self.progress.score > self.progress.best_streak {
                self.progress.best_streak = self.progress.score;
                self.emit(GameEvent::BestStreakChanged(self.progress.best_streak));
            }
        } else {
            self.progress.keeper_speed = 0.0;
        }
    }
}
