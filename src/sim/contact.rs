//! Contact classification
//!
//! The engine reports contacts by body name. Only contacts where exactly one
//! side is the ball matter; unknown names are ignored.

use super::respawn::RespawnKind;
use super::state::{GameEvent, GameSession};
use crate::GameError;
use crate::scene::Body;

/// How the session reacted to a contact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    /// Goal: respawn scheduled with the incremented score
    Goal,
    /// Ball left the pitch: respawn scheduled with score 0
    OutOfBounds,
    /// Post or keeper: grace-period respawn scheduled with score 0
    Bounce,
    /// Latched, unrelated, or not involving the ball
    Ignored,
}

/// Contact categories the resolver acts on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    ScoreZone,
    OutOfBounds,
    PostOrKeeper,
}

impl ContactKind {
    /// Classify the non-ball body
    pub fn of(body: Body) -> Option<Self> {
        match body {
            Body::ScoreZone => Some(ContactKind::ScoreZone),
            Body::OutOfBounds => Some(ContactKind::OutOfBounds),
            Body::TopPost | Body::LeftPost | Body::RightPost | Body::GoalKeeper => {
                Some(ContactKind::PostOrKeeper)
            }
            Body::Ball | Body::Camera => None,
        }
    }
}

/// Name of the non-ball side, if exactly one side is the ball
fn other_body<'a>(a: &'a str, b: &'a str) -> Option<&'a str> {
    let ball = Body::Ball.name();
    match (a == ball, b == ball) {
        (true, false) => Some(b),
        (false, true) => Some(a),
        _ => None,
    }
}

impl GameSession {
    /// Resolve a contact reported by the physics engine
    pub fn handle_contact(&mut self, a: &str, b: &str) -> Result<ContactOutcome, GameError> {
        self.ensure_ready()?;
        let Some(kind) = other_body(a, b)
            .and_then(Body::from_name)
            .and_then(ContactKind::of)
        else {
            return Ok(ContactOutcome::Ignored);
        };

        let outcome = match kind {
            ContactKind::ScoreZone if !self.guard.respawning => {
                self.emit(GameEvent::GoalSound);
                let target = self.progress.score + 1;
                self.schedule_respawn(RespawnKind::ScoreOrBounds, target);
                ContactOutcome::Goal
            }
            ContactKind::OutOfBounds if !self.guard.respawning => {
                self.schedule_respawn(RespawnKind::ScoreOrBounds, 0);
                ContactOutcome::OutOfBounds
            }
            ContactKind::PostOrKeeper
                if !self.guard.bounced_off_post_or_keeper && !self.guard.respawning =>
            {
                self.emit(GameEvent::KickSound);
                self.schedule_respawn(RespawnKind::Bounce, 0);
                ContactOutcome::Bounce
            }
            _ => ContactOutcome::Ignored,
        };

        if outcome == ContactOutcome::Ignored {
            log::debug!("Contact {} / {} ignored (latched)", a, b);
        } else {
            log::debug!("Contact {} / {} -> {:?}", a, b, outcome);
        }
        Ok(outcome)
    }
}
