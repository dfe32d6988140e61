//! Game state and core simulation types
//!
//! Everything a host polls each frame lives on [`GameState`].

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Circle;
use super::obstacles::ObstacleField;
use super::pool::ObstacleId;
use super::score::ScoreKeeper;
use crate::config::GameConfig;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Hit with lives remaining; collapses back to Playing within the tick
    Restarting,
    /// Out of lives. Terminal, a new session must be created
    GameOver,
}

/// Player steering for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HorizontalIntent {
    Left,
    Right,
    #[default]
    None,
}

impl HorizontalIntent {
    fn sign(self) -> f32 {
        match self {
            HorizontalIntent::Left => -1.0,
            HorizontalIntent::Right => 1.0,
            HorizontalIntent::None => 0.0,
        }
    }
}

/// Something the host may want to react to (sound, HUD, screen change)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    ObstacleSpawned { id: ObstacleId, x: f32 },
    ObstacleExpired { id: ObstacleId },
    PlayerHit { lives_left: u32 },
    /// Obstacles cleared and player back at the start
    Restarted { cleared: usize },
    GameOver { score: u32, new_high_score: bool },
}

/// The player-controlled sprite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Bottom-left corner
    pub pos: Vec2,
    pub size: f32,
    pub radius: f32,
    /// Set by the most recent collision, cleared on restart
    pub hit: bool,
}

impl Player {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: config.player_start(),
            size: config.player_size,
            radius: config.player_radius,
            hit: false,
        }
    }

    pub fn circle(&self) -> Circle {
        Circle::inscribed(self.pos, self.size, self.radius)
    }

    pub fn center(&self) -> Vec2 {
        self.circle().center
    }

    /// Apply horizontal intent, clamped to the world
    pub fn steer(&mut self, intent: HorizontalIntent, dt: f32, config: &GameConfig) {
        let dx = intent.sign() * config.player_speed * dt;
        self.pos.x = (self.pos.x + dx).clamp(0.0, config.player_max_x());
    }

    pub fn reset(&mut self, config: &GameConfig) {
        self.pos = config.player_start();
        self.hit = false;
    }
}

/// A falling obstacle
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Bottom-left corner
    pub pos: Vec2,
    pub size: f32,
    pub radius: f32,
    /// Fall speed (units/s)
    pub speed: f32,
    /// Already cost the player a life; never counts twice
    pub hit_already: bool,
}

impl Obstacle {
    pub fn new(pos: Vec2, speed: f32, config: &GameConfig) -> Self {
        Self {
            pos,
            size: config.obstacle_size,
            radius: config.obstacle_radius,
            speed,
            hit_already: false,
        }
    }

    pub fn circle(&self) -> Circle {
        Circle::inscribed(self.pos, self.size, self.radius)
    }

    pub fn fall(&mut self, dt: f32) {
        self.pos.y -= self.speed * dt;
    }

    /// Fully below the bottom of the world (width stands in for height)
    pub fn has_passed_bottom(&self) -> bool {
        self.pos.y <= -self.size
    }

    /// Clear per-run state before going back to the pool
    pub fn reset(&mut self) {
        self.hit_already = false;
        self.speed = 0.0;
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub config: GameConfig,
    pub phase: GamePhase,
    pub lives: u32,
    pub player: Player,
    /// Active obstacles (spawn order) and their pool
    pub obstacles: ObstacleField,
    pub score: ScoreKeeper,
    /// Seconds simulated so far
    pub elapsed: f32,
    /// Events produced since the host last drained them
    pub events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a new session with the given tuning and seed
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            seed,
            phase: GamePhase::Playing,
            lives: config.initial_lives,
            player: Player::new(&config),
            obstacles: ObstacleField::default(),
            score: ScoreKeeper::default(),
            elapsed: 0.0,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            config,
        }
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn score(&self) -> u32 {
        self.score.score()
    }

    /// Eased score for the HUD
    pub fn displayed_score(&self) -> u32 {
        self.score.displayed()
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Take the events produced since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let state = GameState::new(GameConfig::default(), 7);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.lives(), crate::consts::PLAYER_INITIAL_LIVES);
        assert_eq!(state.score(), 0);
        assert_eq!(state.displayed_score(), 0);
        assert!(!state.is_game_over());
        assert_eq!(state.obstacles.active_len(), 0);
    }

    #[test]
    fn test_player_steer_clamps_to_world() {
        let config = GameConfig::default();
        let mut player = Player::new(&config);

        player.steer(HorizontalIntent::Left, 10.0, &config);
        assert_eq!(player.pos.x, 0.0);

        player.steer(HorizontalIntent::Right, 10.0, &config);
        assert_eq!(player.pos.x, config.player_max_x());

        let x = player.pos.x;
        player.steer(HorizontalIntent::None, 1.0, &config);
        assert_eq!(player.pos.x, x);
    }

    #[test]
    fn test_obstacle_passes_bottom() {
        let config = GameConfig::default();
        let mut obstacle = Obstacle::new(Vec2::new(1.0, 0.0), 1.0, &config);
        assert!(!obstacle.has_passed_bottom());
        obstacle.fall(config.obstacle_size);
        assert!(obstacle.has_passed_bottom());
    }

    #[test]
    fn test_drain_events_empties() {
        let mut state = GameState::new(GameConfig::default(), 1);
        state.events.push(GameEvent::PlayerHit { lives_left: 2 });
        assert_eq!(state.drain_events().len(), 1);
        assert!(state.drain_events().is_empty());
    }
}
