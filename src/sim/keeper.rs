//! Goal keeper AI
//!
//! Each tick the keeper slides toward the ball's x (clamped to the goal mouth)
//! at a rate set by the current streak, and jumps when the ball is high.

use super::state::{KeeperMotion, VerticalState};
use crate::scene::{Body, Scene};
use crate::tuning::Tuning;

impl KeeperMotion {
    /// Advance the jump cycle by one tick
    pub fn step_vertical(&mut self, ball_height: f32, tuning: &Tuning) {
        if self.vertical == VerticalState::Grounded && ball_height > tuning.keeper_jump_trigger {
            self.vertical = VerticalState::Jumping;
        }

        match self.vertical {
            VerticalState::Grounded => {}
            VerticalState::Jumping => {
                self.height += tuning.keeper_jump_step;
                if self.height > tuning.keeper_jump_apex {
                    self.vertical = VerticalState::Falling;
                }
            }
            VerticalState::Falling => {
                self.height -= tuning.keeper_jump_step;
                if self.height <= 0.0 {
                    self.height = 0.0;
                    self.vertical = VerticalState::Grounded;
                }
            }
        }
    }
}

/// Exponential pursuit of the ball's x. A rate of 0 holds position; 1 snaps.
pub fn pursue(keeper_x: f32, ball_x: f32, rate: f32, limit: f32) -> f32 {
    let target = ball_x.clamp(-limit, limit);
    let rate = rate.clamp(0.0, 1.0);
    keeper_x * (1.0 - rate) + target * rate
}

/// Move the keeper for one tick
pub fn update_keeper(
    motion: &mut KeeperMotion,
    keeper_speed: f32,
    scene: &mut dyn Scene,
    tuning: &Tuning,
) {
    let ball = scene.position(Body::Ball);
    motion.step_vertical(ball.y, tuning);

    let mut keeper = scene.position(Body::GoalKeeper);
    keeper.x = pursue(keeper.x, ball.x, keeper_speed, tuning.keeper_x_limit);
    keeper.y = tuning.keeper_spawn.y + motion.height;
    scene.set_position(Body::GoalKeeper, keeper);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::MemoryScene;
    use glam::Vec3;

    #[test]
    fn test_pursuit_rates() {
        assert_eq!(pursue(1.0, 3.0, 0.0, 3.2), 1.0);
        assert!((pursue(0.0, 2.0, 0.5, 3.2) - 1.0).abs() < 1e-6);
        // Ball outside the goal mouth is clamped
        assert!((pursue(0.0, 10.0, 1.0, 3.2) - 3.2).abs() < 1e-6);
        assert!((pursue(0.0, -10.0, 1.0, 3.2) + 3.2).abs() < 1e-6);
        // Long streaks never overshoot
        assert!((pursue(0.0, 2.0, 1.4, 3.2) - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_jump_cycle() {
        let tuning = Tuning::default();
        let mut motion = KeeperMotion::default();

        motion.step_vertical(1.0, &tuning);
        assert_eq!(motion.vertical, VerticalState::Grounded);

        let mut states = Vec::new();
        for _ in 0..20 {
            motion.step_vertical(2.0, &tuning);
            states.push(motion.vertical);
        }
        // Six steps up (0.6 > 0.5), then down to the floor, then jump again
        assert_eq!(states[..5], [VerticalState::Jumping; 5]);
        assert_eq!(states[5], VerticalState::Falling);
        let landed = states
            .iter()
            .position(|s| *s == VerticalState::Grounded)
            .unwrap();
        assert!(landed > 5);
        assert!(states[landed + 1..].contains(&VerticalState::Jumping));
    }

    #[test]
    fn test_fall_completes_when_ball_drops() {
        let tuning = Tuning::default();
        let mut motion = KeeperMotion::default();
        motion.step_vertical(2.0, &tuning);
        for _ in 0..30 {
            motion.step_vertical(0.0, &tuning);
        }
        assert_eq!(motion.vertical, VerticalState::Grounded);
        assert_eq!(motion.height, 0.0);
    }

    #[test]
    fn test_update_moves_keeper_body() {
        let tuning = Tuning::default();
        let mut scene = MemoryScene::new();
        scene.set_position(Body::Ball, Vec3::new(2.0, 2.0, -5.0));
        scene.set_position(Body::GoalKeeper, Vec3::new(0.0, tuning.keeper_spawn.y, -9.0));
        let mut motion = KeeperMotion::default();

        update_keeper(&mut motion, 0.5, &mut scene, &tuning);
        let keeper = scene.position(Body::GoalKeeper);
        assert!((keeper.x - 1.0).abs() < 1e-6);
        assert!((keeper.y - (tuning.keeper_spawn.y + 0.1)).abs() < 1e-6);
        assert_eq!(keeper.z, -9.0);
    }
}
