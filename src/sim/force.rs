//! Swipe gesture to kick impulse mapping
//!
//! Viewport coordinates have y growing downward, so an up-screen swipe has
//! `start.y > end.y`. The scene's forward axis is -z.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// One touch sample in viewport space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureSample {
    pub pos: Vec2,
    /// Seconds, host clock
    pub time: f64,
}

impl GestureSample {
    pub fn new(x: f32, y: f32, time: f64) -> Self {
        Self {
            pos: Vec2::new(x, y),
            time,
        }
    }
}

/// Viewport size in the same units as gesture positions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Normalized swipe deltas shared by both impulse formulas
#[derive(Debug, Clone, Copy)]
struct SwipeDelta {
    /// Horizontal travel / width (signed, right positive)
    across: f32,
    /// Upward travel / height (signed, up positive)
    up: f32,
}

fn swipe_delta(
    start: &GestureSample,
    end: &GestureSample,
    viewport: Viewport,
    tuning: &Tuning,
) -> Option<SwipeDelta> {
    if viewport.is_degenerate() {
        return None;
    }
    let elapsed = end.time - start.time;
    // Zero or negative durations come from duplicated or reordered samples
    if !(elapsed > 0.0 && elapsed < tuning.max_swipe_duration as f64) {
        return None;
    }
    let delta = SwipeDelta {
        across: (end.pos.x - start.pos.x) / viewport.width,
        up: (start.pos.y - end.pos.y) / viewport.height,
    };
    (delta.across.is_finite() && delta.up.is_finite()).then_some(delta)
}

/// Kickoff impulse, or `None` when the gesture is not a valid kick.
///
/// A kick must travel up-screen by more than `min_swipe_travel` of the
/// viewport height within `max_swipe_duration`.
pub fn first_swipe_impulse(
    start: &GestureSample,
    end: &GestureSample,
    viewport: Viewport,
    tuning: &Tuning,
) -> Option<Vec3> {
    let d = swipe_delta(start, end, viewport, tuning)?;
    if start.pos.y <= end.pos.y || d.up <= tuning.min_swipe_travel {
        return None;
    }

    let impulse = Vec3::new(
        d.across * 5.0,
        1.0 + d.up * 1.5,
        -12.0 + (1.0 - d.up) * 3.0,
    );
    Some(impulse * tuning.impulse_scale)
}

/// Mid-air curve impulse. Any direction is accepted; only duration is gated.
pub fn second_swipe_impulse(
    start: &GestureSample,
    end: &GestureSample,
    viewport: Viewport,
    tuning: &Tuning,
) -> Option<Vec3> {
    let d = swipe_delta(start, end, viewport, tuning)?;
    let impulse = Vec3::new(d.across * 5.0, d.up * 2.5, 0.0);
    Some(impulse * tuning.impulse_scale)
}
