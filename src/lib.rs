//! Obstacle Avoid - A falling-obstacle dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (obstacles, collisions, score, lives)
//! - `config`: Static world and entity tuning
//! - `settings`: Difficulty and high score, persisted between sessions

pub mod config;
pub mod settings;
pub mod sim;

pub use config::GameConfig;
pub use settings::{Difficulty, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed host timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// World dimensions (world units, origin bottom-left)
    pub const WORLD_WIDTH: f32 = 6.0;
    pub const WORLD_HEIGHT: f32 = 10.0;

    /// Player defaults
    pub const PLAYER_BOUNDS_RADIUS: f32 = 0.4;
    pub const PLAYER_SIZE: f32 = 2.0 * PLAYER_BOUNDS_RADIUS;
    /// Horizontal speed (units/s) while a direction is held
    pub const MAX_PLAYER_SPEED: f32 = 15.0;
    pub const PLAYER_INITIAL_LIVES: u32 = 3;

    /// Obstacle defaults
    pub const OBSTACLE_BOUNDS_RADIUS: f32 = 0.3;
    pub const OBSTACLE_SIZE: f32 = 2.0 * OBSTACLE_BOUNDS_RADIUS;
    /// Seconds between obstacle spawns
    pub const OBSTACLE_SPAWN_EVERY: f32 = 0.25;

    /// Obstacle fall speeds per difficulty (units/s)
    pub const EASY_OBSTACLE_SPEED: f32 = 6.0;
    pub const MEDIUM_OBSTACLE_SPEED: f32 = 7.8;
    pub const HARD_OBSTACLE_SPEED: f32 = 10.8;

    /// Seconds between score awards
    pub const SCORE_EVERY: f32 = 1.25;
    /// Inclusive range of points awarded each scoring interval
    pub const SCORE_INCREMENT_MIN: u32 = 1;
    pub const SCORE_INCREMENT_MAX: u32 = 5;
    /// Displayed score catch-up rate (points/s)
    pub const DISPLAY_SCORE_RATE: f32 = 60.0;
}

/// Center of a center-anchored square entity whose position is its bottom-left corner
#[inline]
pub fn box_center(pos: Vec2, size: f32) -> Vec2 {
    pos + Vec2::splat(size / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_center() {
        let c = box_center(Vec2::new(1.0, 2.0), 0.8);
        assert!((c.x - 1.4).abs() < 1e-6);
        assert!((c.y - 2.4).abs() < 1e-6);
    }
}
