//! Flick Soccer headless driver
//!
//! Plays a scripted session against the in-memory scene and logs what the
//! HUD would show. Usage: `flick-soccer [tuning.json]`
//!
//! The best streak is kept in `$TMPDIR/flick_soccer_save.json`.

/// One scripted action
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy)]
enum Step {
    /// Kick with this much horizontal swipe travel
    Kick(f32),
    /// Mid-air curve swipe
    Curve(f32),
    /// Engine-reported contact between the ball and a named body
    Contact(&'static str),
    /// Run frames for this many seconds
    Play(f32),
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), flick_soccer::GameError> {
    use flick_soccer::audio::AudioManager;
    use flick_soccer::game::Command;
    use flick_soccer::persistence::JsonFileStore;
    use flick_soccer::sim::{GestureSample, Viewport};
    use flick_soccer::{Game, MemoryScene, TickListener, Tuning};

    env_logger::init();
    log::info!("Flick Soccer (headless) starting...");

    let tuning = match std::env::args().nth(1) {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };
    let frame_dt = tuning.sim_dt;
    let save_path = std::env::temp_dir().join("flick_soccer_save.json");
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let mut game = Game::new(
        tuning,
        seed,
        MemoryScene::new(),
        JsonFileStore::new(save_path),
        AudioManager::new(),
    );
    game.initialize()?;

    let view = Viewport::new(390.0, 844.0);
    let swipe = |from: (f32, f32), to: (f32, f32), at: f64, secs: f64| {
        [
            Command::GestureBegan(GestureSample::new(from.0, from.1, at)),
            Command::GestureEnded {
                sample: GestureSample::new(to.0, to.1, at + secs),
                viewport: view,
            },
        ]
    };

    let script = [
        // Straight goal
        Step::Kick(0.0),
        Step::Play(0.6),
        Step::Contact("scoreZone"),
        Step::Play(1.2),
        // Curled shot off the post and in
        Step::Kick(60.0),
        Step::Play(0.3),
        Step::Curve(-60.0),
        Step::Play(0.2),
        Step::Contact("leftPost"),
        Step::Play(0.5),
        Step::Contact("scoreZone"),
        Step::Play(1.2),
        // Wide
        Step::Kick(-150.0),
        Step::Play(0.5),
        Step::Contact("outOfBounds"),
        Step::Play(1.2),
    ];

    for step in script {
        let at = game.session().clock;
        match step {
            Step::Kick(dx) => {
                for command in swipe((195.0, 760.0), (195.0 + dx, 420.0), at, 0.18) {
                    game.dispatch(command)?;
                }
            }
            Step::Curve(dx) => {
                for command in swipe((195.0, 300.0), (195.0 + dx, 320.0), at, 0.1) {
                    game.dispatch(command)?;
                }
            }
            Step::Contact(other) => game.dispatch(Command::Contact {
                a: "ball".to_string(),
                b: other.to_string(),
            })?,
            Step::Play(secs) => {
                let frames = (secs / frame_dt).ceil() as u32;
                for _ in 0..frames {
                    game.scene_mut().step(frame_dt);
                    game.on_tick(frame_dt)?;
                }
                log::info!(
                    "t={:.2}s  {}  |  {}",
                    game.session().clock,
                    game.hud().score_text,
                    game.hud().best_text
                );
            }
        }
    }

    println!("{}", game.hud().score_text);
    println!("{}", game.hud().best_text);
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The web build is driven by the host page through the library API
}
