//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Host-supplied tick delta only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod obstacles;
pub mod pool;
pub mod score;
pub mod state;
pub mod tick;

pub use collision::{Circle, overlaps};
pub use obstacles::ObstacleField;
pub use pool::{ObstacleId, ObstaclePool};
pub use score::ScoreKeeper;
pub use state::{GameEvent, GamePhase, GameState, HorizontalIntent, Obstacle, Player};
pub use tick::{TickInput, autopilot, tick};
