//! Obstacle spawning, falling and expiry
//!
//! Active obstacles are kept oldest-first. Every obstacle falls at a constant
//! speed from the same height, so the head is always the lowest one and
//! expiry only ever needs to look at it.

use std::collections::VecDeque;

use glam::Vec2;
use rand::Rng;

use super::collision::{Circle, overlaps};
use super::pool::{ObstacleId, ObstaclePool};
use super::state::Obstacle;
use crate::config::GameConfig;

#[derive(Debug, Clone, Default)]
pub struct ObstacleField {
    pool: ObstaclePool,
    active: VecDeque<ObstacleId>,
    /// Seconds since the last spawn
    spawn_timer: f32,
}

impl ObstacleField {
    /// Move every active obstacle down
    pub fn advance(&mut self, dt: f32) {
        for &id in &self.active {
            self.pool.get_mut(id).fall(dt);
        }
    }

    /// Recycle the oldest obstacle if it has left the world
    pub fn expire_head(&mut self) -> Option<ObstacleId> {
        let &head = self.active.front()?;
        if !self.pool.get(head).has_passed_bottom() {
            return None;
        }
        self.active.pop_front();
        self.pool.release(head);
        Some(head)
    }

    /// Accumulate time and spawn once the interval is reached
    pub fn update_spawn<R: Rng>(
        &mut self,
        dt: f32,
        speed: f32,
        config: &GameConfig,
        rng: &mut R,
    ) -> Option<ObstacleId> {
        self.spawn_timer += dt;
        if dt <= 0.0 || self.spawn_timer < config.spawn_every {
            return None;
        }
        // Reset rather than carry the remainder
        self.spawn_timer = 0.0;

        let x = rng.random_range(0.0..=config.obstacle_max_x());
        Some(self.spawn(Vec2::new(x, config.world_height), speed, config))
    }

    /// Place a new obstacle at the tail of the active sequence
    pub fn spawn(&mut self, pos: Vec2, speed: f32, config: &GameConfig) -> ObstacleId {
        let id = self.pool.acquire(Obstacle::new(pos, speed, config));
        self.active.push_back(id);
        id
    }

    /// First not-yet-hit obstacle overlapping `target`, marked as hit
    pub fn first_collision(&mut self, target: &Circle) -> Option<ObstacleId> {
        let id = self.active.iter().copied().find(|&id| {
            let obstacle = self.pool.get(id);
            !obstacle.hit_already && overlaps(target, &obstacle.circle())
        })?;
        self.pool.get_mut(id).hit_already = true;
        Some(id)
    }

    /// Return every active obstacle to the pool; returns how many were cleared
    pub fn clear(&mut self) -> usize {
        let cleared = self.active.len();
        for id in self.active.drain(..) {
            self.pool.release(id);
        }
        cleared
    }

    /// Active obstacles, oldest first
    pub fn iter(&self) -> impl Iterator<Item = (ObstacleId, &Obstacle)> + '_ {
        self.active.iter().map(|&id| (id, self.pool.get(id)))
    }

    pub fn head(&self) -> Option<&Obstacle> {
        self.active.front().map(|&id| self.pool.get(id))
    }

    pub fn get(&self, id: ObstacleId) -> &Obstacle {
        self.pool.get(id)
    }

    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    pub fn is_active(&self, id: ObstacleId) -> bool {
        self.active.contains(&id)
    }

    pub fn pool(&self) -> &ObstaclePool {
        &self.pool
    }

    pub fn spawn_timer(&self) -> f32 {
        self.spawn_timer
    }
}
