//! Swipe state machine
//!
//! Idle (0) -> Airborne (1) -> Curved (2). Only a respawn reopens input.

use super::force::{GestureSample, Viewport, first_swipe_impulse, second_swipe_impulse};
use super::state::{GameEvent, GameSession};
use crate::GameError;
use crate::scene::{Body, Scene};

/// What a finished gesture did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// Kickoff impulse applied
    Kicked,
    /// Mid-air curve impulse applied
    Curved,
    /// Gesture failed the validity checks
    Rejected,
    /// Input closed for this possession (or no matching begin)
    Ignored,
}

impl GameSession {
    /// Record the gesture start. Always accepted, whatever the swipe count.
    pub fn gesture_began(&mut self, sample: GestureSample) -> Result<(), GameError> {
        self.ensure_ready()?;
        self.swipe.start = Some(sample);
        Ok(())
    }

    /// Finish a gesture and apply the matching impulse to the ball
    pub fn gesture_ended(
        &mut self,
        scene: &mut dyn Scene,
        end: GestureSample,
        viewport: Viewport,
    ) -> Result<SwipeOutcome, GameError> {
        self.ensure_ready()?;
        if self.swipe.swipe_count >= 2 {
            return Ok(SwipeOutcome::Ignored);
        }
        let Some(start) = self.swipe.start.take() else {
            log::debug!("Gesture ended without a start sample");
            return Ok(SwipeOutcome::Ignored);
        };

        if self.swipe.swipe_count == 0 {
            let Some(impulse) = first_swipe_impulse(&start, &end, viewport, &self.tuning) else {
                log::debug!("Kick rejected: {:?} -> {:?}", start.pos, end.pos);
                return Ok(SwipeOutcome::Rejected);
            };
            scene.apply_impulse(Body::Ball, impulse);
            self.swipe.swipe_count = 1;
            self.ball_moving = true;
            self.emit(GameEvent::KickSound);
            log::debug!("Kick {:?}", impulse);
            Ok(SwipeOutcome::Kicked)
        } else {
            let Some(impulse) = second_swipe_impulse(&start, &end, viewport, &self.tuning) else {
                log::debug!("Curve rejected (too slow)");
                return Ok(SwipeOutcome::Rejected);
            };
            scene.apply_impulse(Body::Ball, impulse);
            self.swipe.swipe_count = 2;
            log::debug!("Curve {:?}", impulse);
            Ok(SwipeOutcome::Curved)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::MemoryScene;
    use crate::tuning::Tuning;

    const VIEW: Viewport = Viewport {
        width: 400.0,
        height: 800.0,
    };

    fn ready() -> (GameSession, MemoryScene) {
        let mut scene = MemoryScene::new();
        let mut session = GameSession::new(Tuning::default(), 3);
        session.initialize(&mut scene, 0).unwrap();
        session.drain_events();
        (session, scene)
    }

    fn swipe(
        session: &mut GameSession,
        scene: &mut MemoryScene,
        from: (f32, f32),
        to: (f32, f32),
        secs: f64,
    ) -> SwipeOutcome {
        let t0 = session.clock;
        session
            .gesture_began(GestureSample::new(from.0, from.1, t0))
            .unwrap();
        session
            .gesture_ended(scene, GestureSample::new(to.0, to.1, t0 + secs), VIEW)
            .unwrap()
    }

    #[test]
    fn test_valid_kickoff() {
        let (mut session, mut scene) = ready();
        let outcome = swipe(&mut session, &mut scene, (200.0, 700.0), (200.0, 460.0), 0.3);

        assert_eq!(outcome, SwipeOutcome::Kicked);
        assert_eq!(session.swipe.swipe_count, 1);
        assert!(session.ball_moving);
        assert_eq!(scene.impulses.len(), 1);
        assert_eq!(session.drain_events(), vec![GameEvent::KickSound]);
    }

    #[test]
    fn test_invalid_kick_leaves_state() {
        let (mut session, mut scene) = ready();
        let outcome = swipe(&mut session, &mut scene, (200.0, 700.0), (200.0, 750.0), 0.2);

        assert_eq!(outcome, SwipeOutcome::Rejected);
        assert_eq!(session.swipe.swipe_count, 0);
        assert!(!session.ball_moving);
        assert!(scene.impulses.is_empty());
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn test_curve_then_input_closed() {
        let (mut session, mut scene) = ready();
        swipe(&mut session, &mut scene, (200.0, 700.0), (200.0, 300.0), 0.2);

        // Sideways and downward swipes still curve the ball
        let outcome = swipe(&mut session, &mut scene, (100.0, 100.0), (300.0, 200.0), 0.1);
        assert_eq!(outcome, SwipeOutcome::Curved);
        assert_eq!(session.swipe.swipe_count, 2);
        let (_, curve) = scene.impulses[1];
        assert_eq!(curve.z, 0.0);

        let outcome = swipe(&mut session, &mut scene, (200.0, 700.0), (200.0, 100.0), 0.1);
        assert_eq!(outcome, SwipeOutcome::Ignored);
        assert_eq!(scene.impulses.len(), 2);
    }

    #[test]
    fn test_slow_curve_keeps_airborne() {
        let (mut session, mut scene) = ready();
        swipe(&mut session, &mut scene, (200.0, 700.0), (200.0, 300.0), 0.2);
        let outcome = swipe(&mut session, &mut scene, (100.0, 100.0), (300.0, 200.0), 0.9);
        assert_eq!(outcome, SwipeOutcome::Rejected);
        assert_eq!(session.swipe.swipe_count, 1);
    }

    #[test]
    fn test_end_without_begin() {
        let (mut session, mut scene) = ready();
        let outcome = session
            .gesture_ended(&mut scene, GestureSample::new(0.0, 0.0, 0.1), VIEW)
            .unwrap();
        assert_eq!(outcome, SwipeOutcome::Ignored);
    }

    #[test]
    fn test_rejects_before_initialize() {
        let mut session = GameSession::new(Tuning::default(), 3);
        let err = session
            .gesture_began(GestureSample::new(0.0, 0.0, 0.0))
            .unwrap_err();
        assert!(matches!(err, GameError::NotInitialized));
    }
}
