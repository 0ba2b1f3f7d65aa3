//! Camera follow
//!
//! While the ball is in flight the camera eases toward a point behind and
//! above it. Frame-rate independent: the blend factor is `1 - e^(-k*dt)`.

use glam::Vec3;

use crate::scene::{Body, Scene};
use crate::tuning::Tuning;

/// Blend factor for one step of exponential damping
pub fn damping_factor(rate: f32, dt: f32) -> f32 {
    1.0 - (-rate.max(0.0) * dt.max(0.0)).exp()
}

/// Damp `camera` toward the follow point for `ball`
pub fn follow_point(camera: Vec3, ball: Vec3, dt: f32, tuning: &Tuning) -> Vec3 {
    let target = ball + tuning.camera_offset;
    camera.lerp(target, damping_factor(tuning.camera_damping, dt))
}

/// Move the camera body for one tick
pub fn update_camera(scene: &mut dyn Scene, dt: f32, tuning: &Tuning) {
    let ball = scene.position(Body::Ball);
    let camera = scene.position(Body::Camera);
    scene.set_position(Body::Camera, follow_point(camera, ball, dt, tuning));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damping_bounds() {
        assert_eq!(damping_factor(6.0, 0.0), 0.0);
        let f = damping_factor(6.0, 1.0 / 60.0);
        assert!(f > 0.0 && f < 1.0);
        assert!(damping_factor(6.0, 100.0) > 0.999);
    }

    #[test]
    fn test_converges_without_overshoot() {
        let tuning = Tuning::default();
        let ball = Vec3::new(1.0, 3.0, -8.0);
        let target = ball + tuning.camera_offset;
        let mut camera = tuning.camera_spawn;
        let mut last = camera.distance(target);
        for _ in 0..240 {
            camera = follow_point(camera, ball, 1.0 / 60.0, &tuning);
            let d = camera.distance(target);
            assert!(d <= last + 1e-6);
            last = d;
        }
        assert!(last < 1e-3);
    }

    #[test]
    fn test_split_steps_match_single_step() {
        let tuning = Tuning::default();
        let ball = Vec3::new(0.0, 1.0, -4.0);
        let start = Vec3::ZERO;
        let once = follow_point(start, ball, 0.2, &tuning);
        let twice = follow_point(follow_point(start, ball, 0.1, &tuning), ball, 0.1, &tuning);
        assert!(once.distance(twice) < 1e-4);
    }
}
