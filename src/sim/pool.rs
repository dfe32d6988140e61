//! Obstacle arena with a free list
//!
//! Slots are never dropped, so an [`ObstacleId`] stays valid for the life of
//! the pool. A slot is either handed out (active) or on the free list.

use serde::{Deserialize, Serialize};

use super::state::Obstacle;

/// Stable handle to an obstacle slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObstacleId(u32);

impl ObstacleId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Default)]
pub struct ObstaclePool {
    slots: Vec<Obstacle>,
    free: Vec<ObstacleId>,
}

impl ObstaclePool {
    /// Place an obstacle in a recycled slot, or grow the arena if none is free
    pub fn acquire(&mut self, obstacle: Obstacle) -> ObstacleId {
        match self.free.pop() {
            Some(id) => {
                self.slots[id.index()] = obstacle;
                id
            }
            None => {
                let id = ObstacleId(self.slots.len() as u32);
                self.slots.push(obstacle);
                id
            }
        }
    }

    /// Reset a slot and put it back on the free list
    pub fn release(&mut self, id: ObstacleId) {
        debug_assert!(!self.free.contains(&id), "double release of {:?}", id);
        self.slots[id.index()].reset();
        self.free.push(id);
    }

    pub fn get(&self, id: ObstacleId) -> &Obstacle {
        &self.slots[id.index()]
    }

    pub fn get_mut(&mut self, id: ObstacleId) -> &mut Obstacle {
        &mut self.slots[id.index()]
    }

    /// Obstacles ever constructed
    pub fn total(&self) -> usize {
        self.slots.len()
    }

    pub fn free_len(&self) -> usize {
        self.free.len()
    }

    pub fn is_free(&self, id: ObstacleId) -> bool {
        self.free.contains(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use glam::Vec2;

    fn obstacle(x: f32) -> Obstacle {
        Obstacle::new(Vec2::new(x, 10.0), 1.0, &GameConfig::default())
    }

    #[test]
    fn test_acquire_grows_when_empty() {
        let mut pool = ObstaclePool::default();
        let a = pool.acquire(obstacle(1.0));
        let b = pool.acquire(obstacle(2.0));
        assert_ne!(a, b);
        assert_eq!(pool.total(), 2);
        assert_eq!(pool.free_len(), 0);
        assert_eq!(pool.get(b).pos.x, 2.0);
    }

    #[test]
    fn test_release_recycles_slot() {
        let mut pool = ObstaclePool::default();
        let a = pool.acquire(obstacle(1.0));
        pool.get_mut(a).hit_already = true;
        pool.release(a);
        assert!(pool.is_free(a));
        assert!(!pool.get(a).hit_already);

        let b = pool.acquire(obstacle(3.0));
        assert_eq!(a, b);
        assert_eq!(pool.total(), 1);
        assert!(!pool.is_free(b));
        assert_eq!(pool.get(b).pos.x, 3.0);
    }
}
