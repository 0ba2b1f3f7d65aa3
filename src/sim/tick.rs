//! Fixed timestep simulation tick
//!
//! Advances the session clock, fires due respawns, then runs the per-frame
//! controllers. Respawns and controllers share one `&mut` borrow, so they can
//! never interleave.

use super::camera::update_camera;
use super::keeper::update_keeper;
use super::state::GameSession;
use crate::GameError;
use crate::scene::Scene;

/// Advance the session by one fixed timestep
pub fn tick(session: &mut GameSession, scene: &mut dyn Scene, dt: f32) -> Result<(), GameError> {
    session.ensure_ready()?;
    session.clock += dt as f64;

    session.fire_due_respawns(scene);

    if session.ball_moving {
        update_camera(scene, dt, &session.tuning);
    }
    update_keeper(
        &mut session.keeper,
        session.progress.keeper_speed,
        scene,
        &session.tuning,
    );
    Ok(())
}

/// Accumulates variable frame times into fixed simulation steps
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    accumulator: f32,
}

impl FrameClock {
    /// Frames longer than this are truncated (tab switch, debugger pause)
    pub const MAX_FRAME_DT: f32 = 0.1;

    pub fn new() -> Self {
        Self::default()
    }

    /// Run as many fixed ticks as `frame_dt` covers. Returns the tick count.
    pub fn advance(
        &mut self,
        session: &mut GameSession,
        scene: &mut dyn Scene,
        frame_dt: f32,
    ) -> Result<u32, GameError> {
        let sim_dt = session.tuning.sim_dt;
        let max_substeps = session.tuning.max_substeps;
        self.accumulator += frame_dt.clamp(0.0, Self::MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= sim_dt && substeps < max_substeps {
            tick(session, scene, sim_dt)?;
            self.accumulator -= sim_dt;
            substeps += 1;
        }
        // Drop time we could not catch up on
        if substeps == max_substeps {
            self.accumulator = self.accumulator.min(sim_dt);
        }
        Ok(substeps)
    }

    /// Leftover time not yet simulated
    pub fn pending(&self) -> f32 {
        self.accumulator
    }
}
