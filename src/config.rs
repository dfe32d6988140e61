//! Static gameplay configuration
//!
//! Defaults come from [`crate::consts`]; hosts and tests may override any
//! field, e.g. from a JSON tuning file.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// World, entity and timer tuning for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub world_width: f32,
    pub world_height: f32,

    pub player_size: f32,
    pub player_radius: f32,
    /// Horizontal speed (units/s)
    pub player_speed: f32,
    pub initial_lives: u32,

    pub obstacle_size: f32,
    pub obstacle_radius: f32,
    /// Seconds between spawns
    pub spawn_every: f32,

    /// Seconds between score awards
    pub score_every: f32,
    pub score_increment_min: u32,
    pub score_increment_max: u32,
    /// Displayed score catch-up rate (points/s)
    pub display_score_rate: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,

            player_size: PLAYER_SIZE,
            player_radius: PLAYER_BOUNDS_RADIUS,
            player_speed: MAX_PLAYER_SPEED,
            initial_lives: PLAYER_INITIAL_LIVES,

            obstacle_size: OBSTACLE_SIZE,
            obstacle_radius: OBSTACLE_BOUNDS_RADIUS,
            spawn_every: OBSTACLE_SPAWN_EVERY,

            score_every: SCORE_EVERY,
            score_increment_min: SCORE_INCREMENT_MIN,
            score_increment_max: SCORE_INCREMENT_MAX,
            display_score_rate: DISPLAY_SCORE_RATE,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON override; missing fields keep defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Player start: horizontally centered, half a body above the floor
    pub fn player_start(&self) -> Vec2 {
        Vec2::new(
            (self.world_width - self.player_size) / 2.0,
            self.player_size / 2.0,
        )
    }

    /// Largest x the player may occupy
    pub fn player_max_x(&self) -> f32 {
        (self.world_width - self.player_size).max(0.0)
    }

    /// Largest x a freshly spawned obstacle may take
    pub fn obstacle_max_x(&self) -> f32 {
        (self.world_width - self.obstacle_size).max(0.0)
    }
}
