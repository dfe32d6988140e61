//! Obstacle Avoid entry point
//!
//! Headless native host: runs one autopilot session with a fixed-timestep
//! loop and keeps the high score between runs.

use std::path::PathBuf;

use obstacle_avoid::consts::*;
use obstacle_avoid::sim::{GameEvent, GameState, TickInput, tick};
use obstacle_avoid::{GameConfig, Settings};

/// Settings file, overridable with `OBSTACLE_AVOID_SAVE`
const DEFAULT_SAVE_PATH: &str = "obstacle_avoid.json";
/// Stop a demo run after this many simulated seconds
const MAX_RUN_SECONDS: f32 = 300.0;
/// Simulated host frame time (frames don't line up with the sim step)
const FRAME_DT: f32 = 1.0 / 50.0;

/// Host loop state
struct Game {
    state: GameState,
    settings: Settings,
    accumulator: f32,
    input: TickInput,
}

impl Game {
    fn new(settings: Settings, seed: u64) -> Self {
        Self {
            state: GameState::new(GameConfig::default(), seed),
            settings,
            accumulator: 0.0,
            input: TickInput {
                idle_mode: true,
                ..Default::default()
            },
        }
    }

    /// Run simulation ticks for one rendered frame
    fn update(&mut self, dt: f32) {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut self.state, &self.input, &mut self.settings, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }

        for event in self.state.drain_events() {
            match event {
                GameEvent::PlayerHit { lives_left } => {
                    log::info!(
                        "HUD: LIVES {} SCORE {}",
                        lives_left,
                        self.state.displayed_score()
                    );
                }
                GameEvent::GameOver {
                    score,
                    new_high_score: true,
                } => log::info!("New high score: {}", score),
                _ => {}
            }
        }
    }
}

fn main() {
    env_logger::init();

    let save_path = std::env::var_os("OBSTACLE_AVOID_SAVE")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SAVE_PATH));
    let settings = Settings::load_from(&save_path);
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    log::info!(
        "Obstacle Avoid (headless) starting: difficulty {}, high score {}, seed {}",
        settings.difficulty.as_str(),
        settings.high_score,
        seed
    );

    let mut game = Game::new(settings, seed);
    while !game.state.is_game_over() && game.state.elapsed < MAX_RUN_SECONDS {
        game.update(FRAME_DT);
    }

    if !game.state.is_game_over() {
        // Time limit reached; the run still counts
        let score = game.state.score();
        game.settings.record_score(score);
    }

    println!(
        "Final score {} after {:.1}s ({} lives left), high score {}",
        game.state.score(),
        game.state.elapsed,
        game.state.lives(),
        game.settings.high_score
    );

    if let Err(err) = game.settings.save_to(&save_path) {
        log::warn!("Could not save settings to {}: {}", save_path.display(), err);
    }
}
