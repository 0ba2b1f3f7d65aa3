//! HUD text labels
//!
//! Two overlay labels: the current streak and the best streak. The renderer
//! only ever sees the final strings.

use crate::sim::GameEvent;

/// Text of the two overlay labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hud {
    pub score_text: String,
    pub best_text: String,
    /// Bumped whenever a label changes so renderers can skip redundant uploads
    pub revision: u64,
}

impl Default for Hud {
    fn default() -> Self {
        Self {
            score_text: score_label(0),
            best_text: best_label(0),
            revision: 0,
        }
    }
}

pub fn score_label(score: u32) -> String {
    format!("Score: {}", score)
}

pub fn best_label(best: u32) -> String {
    format!("Best Streak: {}", best)
}

impl Hud {
    /// Apply a session event. Returns true if a label changed.
    pub fn apply(&mut self, event: &GameEvent) -> bool {
        let (label, text) = match *event {
            GameEvent::ScoreChanged(score) => (&mut self.score_text, score_label(score)),
            GameEvent::BestStreakChanged(best) => (&mut self.best_text, best_label(best)),
            GameEvent::KickSound | GameEvent::GoalSound => return false,
        };
        if *label == text {
            return false;
        }
        *label = text;
        self.revision += 1;
        true
    }
}
