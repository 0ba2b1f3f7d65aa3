//! 3D engine boundary
//!
//! The gameplay core never simulates collisions itself. It resolves a fixed set
//! of named bodies, applies impulses, and reads/writes positions. Anything that
//! can do that (a real physics engine, or [`MemoryScene`] in tests and the
//! headless driver) implements [`Scene`].

use std::collections::HashMap;

use glam::Vec3;

/// Named bodies the gameplay core knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Ball,
    Camera,
    GoalKeeper,
    TopPost,
    LeftPost,
    RightPost,
    ScoreZone,
    OutOfBounds,
}

impl Body {
    /// Every body the scene must provide
    pub const ALL: [Body; 8] = [
        Body::Ball,
        Body::Camera,
        Body::GoalKeeper,
        Body::TopPost,
        Body::LeftPost,
        Body::RightPost,
        Body::ScoreZone,
        Body::OutOfBounds,
    ];

    /// Scene graph node name
    pub fn name(&self) -> &'static str {
        match self {
            Body::Ball => "ball",
            Body::Camera => "camera",
            Body::GoalKeeper => "goalKeeper",
            Body::TopPost => "topPost",
            Body::LeftPost => "leftPost",
            Body::RightPost => "rightPost",
            Body::ScoreZone => "scoreZone",
            Body::OutOfBounds => "outOfBounds",
        }
    }

    /// Look up a body by its scene graph name (exact match)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.name() == name)
    }
}

/// Operations the core needs from the 3D engine
pub trait Scene {
    /// Whether a node with this name exists in the scene graph
    fn has_body(&self, name: &str) -> bool;

    fn position(&self, body: Body) -> Vec3;
    fn set_position(&mut self, body: Body, pos: Vec3);

    fn velocity(&self, body: Body) -> Vec3;
    fn set_velocity(&mut self, body: Body, vel: Vec3);

    /// Drop any forces accumulated on the body this frame
    fn clear_forces(&mut self, body: Body);

    /// Apply an instantaneous impulse
    fn apply_impulse(&mut self, body: Body, impulse: Vec3);
}

/// State of a single body in [`MemoryScene`]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BodyState {
    pub pos: Vec3,
    pub vel: Vec3,
    /// Forces pending integration
    pub force: Vec3,
    /// Only dynamic bodies are integrated by [`MemoryScene::step`]
    pub dynamic: bool,
}

/// In-memory scene with ballistic integration and no collision detection.
///
/// Contacts are injected by the caller. Used by the headless driver and tests.
#[derive(Debug, Clone)]
pub struct MemoryScene {
    bodies: HashMap<Body, BodyState>,
    pub gravity: Vec3,
    /// Ball mass; impulses change velocity by `impulse / mass`
    pub ball_mass: f32,
    /// Log of every impulse applied, oldest first
    pub impulses: Vec<(Body, Vec3)>,
}

impl Default for MemoryScene {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryScene {
    /// Scene with every required body at the origin; only the ball is dynamic
    pub fn new() -> Self {
        let bodies = Body::ALL
            .into_iter()
            .map(|b| {
                let state = BodyState {
                    dynamic: b == Body::Ball,
                    ..Default::default()
                };
                (b, state)
            })
            .collect();
        Self {
            bodies,
            gravity: Vec3::new(0.0, -9.8, 0.0),
            ball_mass: 0.01,
            impulses: Vec::new(),
        }
    }

    /// Scene missing one body (for configuration error handling)
    pub fn without(body: Body) -> Self {
        let mut scene = Self::new();
        scene.bodies.remove(&body);
        scene
    }

    pub fn body(&self, body: Body) -> Option<&BodyState> {
        self.bodies.get(&body)
    }

    /// Integrate dynamic bodies (semi-implicit Euler)
    pub fn step(&mut self, dt: f32) {
        let mass = self.ball_mass.max(f32::EPSILON);
        for state in self.bodies.values_mut().filter(|s| s.dynamic) {
            state.vel += (self.gravity + state.force / mass) * dt;
            state.pos += state.vel * dt;
            state.force = Vec3::ZERO;
        }
    }

    fn entry(&mut self, body: Body) -> &mut BodyState {
        self.bodies.entry(body).or_default()
    }
}

impl Scene for MemoryScene {
    fn has_body(&self, name: &str) -> bool {
        Body::from_name(name).is_some_and(|b| self.bodies.contains_key(&b))
    }

    fn position(&self, body: Body) -> Vec3 {
        self.bodies.get(&body).map(|s| s.pos).unwrap_or(Vec3::ZERO)
    }

    fn set_position(&mut self, body: Body, pos: Vec3) {
        self.entry(body).pos = pos;
    }

    fn velocity(&self, body: Body) -> Vec3 {
        self.bodies.get(&body).map(|s| s.vel).unwrap_or(Vec3::ZERO)
    }

    fn set_velocity(&mut self, body: Body, vel: Vec3) {
        self.entry(body).vel = vel;
    }

    fn clear_forces(&mut self, body: Body) {
        self.entry(body).force = Vec3::ZERO;
    }

    fn apply_impulse(&mut self, body: Body, impulse: Vec3) {
        let mass = self.ball_mass.max(f32::EPSILON);
        self.entry(body).vel += impulse / mass;
        self.impulses.push((body, impulse));
    }
}
