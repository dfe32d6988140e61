//! Circle overlap collision
//!
//! Player and obstacles are circles inscribed in their bounding boxes.

use glam::Vec2;

use crate::box_center;

/// A collision circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Circle centered in a square box anchored at its bottom-left corner
    pub fn inscribed(pos: Vec2, size: f32, radius: f32) -> Self {
        Self::new(box_center(pos, size), radius)
    }
}

/// True if the circles touch or overlap
#[inline]
pub fn overlaps(a: &Circle, b: &Circle) -> bool {
    let reach = a.radius + b.radius;
    a.center.distance_squared(b.center) <= reach * reach
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_center_overlaps() {
        let a = Circle::new(Vec2::new(5.0, 1.0), 0.5);
        let b = Circle::new(Vec2::new(5.0, 1.0), 0.5);
        assert!(overlaps(&a, &b));
    }

    #[test]
    fn test_just_apart_misses() {
        let a = Circle::new(Vec2::new(5.0, 1.0), 0.5);
        let b = Circle::new(Vec2::new(6.01, 1.0), 0.5);
        assert!(!overlaps(&a, &b));
    }

    #[test]
    fn test_touching_counts() {
        let a = Circle::new(Vec2::new(0.0, 0.0), 0.5);
        let b = Circle::new(Vec2::new(0.0, 1.0), 0.5);
        assert!(overlaps(&a, &b));
        assert!(overlaps(&b, &a));
    }

    #[test]
    fn test_inscribed_center() {
        let c = Circle::inscribed(Vec2::new(2.0, 3.0), 1.0, 0.5);
        assert_eq!(c.center, Vec2::new(2.5, 3.5));
    }
}
