//! Game host
//!
//! Owns the session together with its boundaries (scene, best-streak store,
//! audio, HUD) and routes session events to them after every call. Hosts on
//! threaded platforms should funnel all input through [`Game::dispatch`] from
//! one thread or task queue.

use crate::GameError;
use crate::audio::{AudioSink, SoundEffect};
use crate::hud::Hud;
use crate::persistence::StreakStore;
use crate::scene::Scene;
use crate::sim::{
    ContactOutcome, FrameClock, GameEvent, GameSession, GestureSample, SwipeOutcome, Viewport,
};
use crate::tuning::Tuning;

/// Receives contact-begin callbacks from the physics engine
pub trait ContactListener {
    fn on_contact(&mut self, a: &str, b: &str) -> Result<ContactOutcome, GameError>;
}

/// Receives per-frame callbacks from the render loop
pub trait TickListener {
    /// `dt` is the variable frame time. Returns the number of fixed ticks run.
    fn on_tick(&mut self, dt: f32) -> Result<u32, GameError>;
}

/// Every input the game reacts to, in one serializable stream
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    GestureBegan(GestureSample),
    GestureEnded {
        sample: GestureSample,
        viewport: Viewport,
    },
    Contact {
        a: String,
        b: String,
    },
    Frame(f32),
}

/// Session plus everything it talks to
pub struct Game<S: Scene, P: StreakStore, A: AudioSink> {
    session: GameSession,
    scene: S,
    store: P,
    audio: A,
    hud: Hud,
    frame_clock: FrameClock,
    /// Last value written to the store
    persisted_best: u32,
}

impl<S: Scene, P: StreakStore, A: AudioSink> Game<S, P, A> {
    pub fn new(tuning: Tuning, seed: u64, scene: S, store: P, audio: A) -> Self {
        Self {
            session: GameSession::new(tuning, seed),
            scene,
            store,
            audio,
            hud: Hud::default(),
            frame_clock: FrameClock::new(),
            persisted_best: 0,
        }
    }

    /// Load the best streak and validate the scene. Must succeed before any
    /// other call.
    pub fn initialize(&mut self) -> Result<(), GameError> {
        let best = self.store.load_best_streak().unwrap_or_else(|e| {
            log::warn!("Could not load best streak, starting at 0: {}", e);
            0
        });
        self.persisted_best = best;
        self.session.initialize(&mut self.scene, best)?;
        self.flush_events();
        Ok(())
    }

    pub fn gesture_began(&mut self, sample: GestureSample) -> Result<(), GameError> {
        self.session.gesture_began(sample)
    }

    pub fn gesture_ended(
        &mut self,
        sample: GestureSample,
        viewport: Viewport,
    ) -> Result<SwipeOutcome, GameError> {
        let outcome = self
            .session
            .gesture_ended(&mut self.scene, sample, viewport)?;
        self.flush_events();
        Ok(outcome)
    }

    /// Apply one queued input
    pub fn dispatch(&mut self, command: Command) -> Result<(), GameError> {
        match command {
            Command::GestureBegan(sample) => self.gesture_began(sample)?,
            Command::GestureEnded { sample, viewport } => {
                self.gesture_ended(sample, viewport)?;
            }
            Command::Contact { a, b } => {
                self.on_contact(&a, &b)?;
            }
            Command::Frame(dt) => {
                self.on_tick(dt)?;
            }
        }
        Ok(())
    }

    /// Route pending session events to audio, HUD and the store
    fn flush_events(&mut self) {
        for event in self.session.drain_events() {
            if let Some(effect) = SoundEffect::for_event(&event) {
                self.audio.play(effect);
            }
            self.hud.apply(&event);
            if let GameEvent::BestStreakChanged(best) = event {
                self.persist_best(best);
            }
        }
    }

    fn persist_best(&mut self, best: u32) {
        if best <= self.persisted_best {
            return;
        }
        match self.store.save_best_streak(best) {
            Ok(()) => self.persisted_best = best,
            // The in-memory record stays authoritative; retry on the next raise
            Err(e) => log::warn!("Failed to save best streak {}: {}", best, e),
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    /// The engine steps its own bodies between frames
    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }

    pub fn hud(&self) -> &Hud {
        &self.hud
    }

    pub fn store(&self) -> &P {
        &self.store
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }
}

impl<S: Scene, P: StreakStore, A: AudioSink> ContactListener for Game<S, P, A> {
    fn on_contact(&mut self, a: &str, b: &str) -> Result<ContactOutcome, GameError> {
        let outcome = self.session.handle_contact(a, b)?;
        self.flush_events();
        Ok(outcome)
    }
}

impl<S: Scene, P: StreakStore, A: AudioSink> TickListener for Game<S, P, A> {
    fn on_tick(&mut self, dt: f32) -> Result<u32, GameError> {
        let ticks = self
            .frame_clock
            .advance(&mut self.session, &mut self.scene, dt)?;
        self.flush_events();
        Ok(ticks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::RecordingAudio;
    use crate::persistence::MemoryStore;
    use crate::scene::{Body, MemoryScene};

    type TestGame = Game<MemoryScene, MemoryStore, RecordingAudio>;

    fn game(best: u32) -> TestGame {
        let mut game = Game::new(
            Tuning::default(),
            7,
            MemoryScene::new(),
            MemoryStore::with_best(best),
            RecordingAudio::default(),
        );
        game.initialize().unwrap();
        game
    }

    fn run_for(game: &mut TestGame, secs: f32) {
        let frames = (secs * 60.0).ceil() as usize;
        for _ in 0..frames {
            game.on_tick(1.0 / 60.0).unwrap();
        }
    }

    #[test]
    fn test_initialize_publishes_hud() {
        let game = game(4);
        assert_eq!(game.hud().score_text, "Score: 0");
        assert_eq!(game.hud().best_text, "Best Streak: 4");
        // Loading does not write back
        assert_eq!(game.store().writes, 0);
    }

    #[test]
    fn test_missing_body_is_fatal() {
        let mut game = Game::new(
            Tuning::default(),
            7,
            MemoryScene::without(Body::Camera),
            MemoryStore::new(),
            RecordingAudio::default(),
        );
        assert!(matches!(
            game.initialize(),
            Err(GameError::MissingBody("camera"))
        ));
        assert!(matches!(
            game.on_contact("ball", "scoreZone"),
            Err(GameError::NotInitialized)
        ));
    }

    #[test]
    fn test_bad_tuning_is_fatal() {
        let tuning = Tuning {
            spawn_x_range: (1.0, 1.0),
            ..Default::default()
        };
        let mut game = Game::new(
            tuning,
            7,
            MemoryScene::new(),
            MemoryStore::new(),
            RecordingAudio::default(),
        );
        assert!(matches!(game.initialize(), Err(GameError::Tuning(_))));
        assert!(matches!(
            game.on_contact("ball", "outOfBounds"),
            Err(GameError::NotInitialized)
        ));
        assert!(matches!(game.on_tick(0.05), Err(GameError::NotInitialized)));
    }

    #[test]
    fn test_goal_flow_through_boundaries() {
        let mut game = game(0);
        let view = Viewport::new(400.0, 800.0);
        game.dispatch(Command::GestureBegan(GestureSample::new(200.0, 700.0, 0.0)))
            .unwrap();
        game.dispatch(Command::GestureEnded {
            sample: GestureSample::new(200.0, 460.0, 0.3),
            viewport: view,
        })
        .unwrap();
        game.dispatch(Command::Contact {
            a: "ball".into(),
            b: "scoreZone".into(),
        })
        .unwrap();
        assert_eq!(
            game.audio().played,
            vec![SoundEffect::Kick, SoundEffect::Goal]
        );

        run_for(&mut game, 1.05);
        assert_eq!(game.session().progress.score, 1);
        assert_eq!(game.session().swipe.swipe_count, 0);
        assert_eq!(game.hud().score_text, "Score: 1");
        assert_eq!(game.hud().best_text, "Best Streak: 1");
        assert_eq!(game.store().best_streak, Some(1));
        assert_eq!(game.store().writes, 1);
    }

    #[test]
    fn test_record_not_rewritten_below_stored_best() {
        let mut game = game(3);
        for _ in 0..2 {
            game.on_contact("scoreZone", "ball").unwrap();
            run_for(&mut game, 1.05);
        }
        assert_eq!(game.session().progress.score, 2);
        assert_eq!(game.store().writes, 0);
        assert_eq!(game.hud().best_text, "Best Streak: 3");
    }

    /// Store whose reads and writes fail until `online` is set
    #[derive(Debug, Default)]
    struct FlakyStore {
        online: bool,
        saved: Option<u32>,
        failed_saves: usize,
    }

    impl StreakStore for FlakyStore {
        fn load_best_streak(&self) -> Result<u32, GameError> {
            if self.online {
                Ok(self.saved.unwrap_or(0))
            } else {
                Err(GameError::Persistence("storage unavailable".into()))
            }
        }

        fn save_best_streak(&mut self, best: u32) -> Result<(), GameError> {
            if self.online {
                self.saved = Some(best);
                Ok(())
            } else {
                self.failed_saves += 1;
                Err(GameError::Persistence("storage unavailable".into()))
            }
        }
    }

    fn score_goal<P: StreakStore>(game: &mut Game<MemoryScene, P, RecordingAudio>) {
        game.on_contact("ball", "scoreZone").unwrap();
        for _ in 0..63 {
            game.on_tick(1.0 / 60.0).unwrap();
        }
    }

    #[test]
    fn test_storage_failures_do_not_stop_play() {
        let mut game = Game::new(
            Tuning::default(),
            7,
            MemoryScene::new(),
            FlakyStore::default(),
            RecordingAudio::default(),
        );
        // Unreadable record starts at 0
        game.initialize().unwrap();
        assert_eq!(game.session().progress.best_streak, 0);
        assert_eq!(game.hud().best_text, "Best Streak: 0");

        // Failed save keeps the in-memory record
        score_goal(&mut game);
        assert_eq!(game.session().progress.score, 1);
        assert_eq!(game.session().progress.best_streak, 1);
        assert_eq!(game.hud().best_text, "Best Streak: 1");
        assert_eq!(game.store().failed_saves, 1);
        assert_eq!(game.store().saved, None);

        // Next raise is written once storage is back
        game.store.online = true;
        score_goal(&mut game);
        assert_eq!(game.session().progress.best_streak, 2);
        assert_eq!(game.store().saved, Some(2));
        assert_eq!(game.store().failed_saves, 1);
    }

    #[test]
    fn test_bounce_plays_kick_and_misses() {
        let mut game = game(0);
        game.on_contact("goalKeeper", "ball").unwrap();
        assert_eq!(game.audio().played, vec![SoundEffect::Kick]);
        run_for(&mut game, 1.05);
        assert_eq!(game.session().progress.score, 0);
        assert!(!game.session().guard.bounced_off_post_or_keeper);
    }
}
