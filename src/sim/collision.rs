//! Collision detection between the catcher and falling entities
//!
//! Both are treated as circles: the entity uses its size as radius, the
//! catcher uses a fixed hit radius that ignores any visual scaling.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Entity;

/// Strict circle overlap test (touching circles do not collide)
#[inline]
pub fn circles_overlap(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> bool {
    a.distance(b) < radius_a + radius_b
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollisionDetector {
    hit_radius: f32,
}

impl CollisionDetector {
    pub fn new(hit_radius: f32) -> Self {
        Self { hit_radius }
    }

    /// IDs of every entity overlapping the player, in spawn order.
    ///
    /// Lingering entities are reported again on every call.
    pub fn detect(&self, entities: &[Entity], player: Vec2) -> Vec<u32> {
        entities
            .iter()
            .filter(|e| circles_overlap(e.pos, e.size, player, self.hit_radius))
            .map(|e| e.id)
            .collect()
    }

    pub fn hit_radius(&self) -> f32 {
        self.hit_radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::EntityColor;

    fn entity_at(id: u32, pos: Vec2, size: f32) -> Entity {
        Entity {
            id,
            pos,
            vel: Vec2::ZERO,
            size,
            color: EntityColor::Amber,
        }
    }

    #[test]
    fn test_boundary_is_exclusive() {
        let player = Vec2::new(200.0, 600.0);
        let detector = CollisionDetector::new(25.0);

        // Exactly r1 + r2 apart: no hit
        let touching = entity_at(1, Vec2::new(200.0, 555.0), 20.0);
        assert!(detector.detect(&[touching], player).is_empty());

        // Just inside
        let inside = entity_at(2, Vec2::new(200.0, 555.01), 20.0);
        assert_eq!(detector.detect(&[inside], player), vec![2]);
    }

    #[test]
    fn test_diagonal_distance() {
        // 3-4-5 triangle scaled: distance 50
        let detector = CollisionDetector::new(25.0);
        let player = Vec2::new(100.0, 100.0);
        assert!(detector.detect(&[entity_at(1, Vec2::new(130.0, 140.0), 25.0)], player).is_empty());
        assert_eq!(detector.detect(&[entity_at(1, Vec2::new(130.0, 140.0), 25.5)], player), vec![1]);
    }

    #[test]
    fn test_reports_all_hits_in_order() {
        let detector = CollisionDetector::new(25.0);
        let player = Vec2::new(200.0, 600.0);
        let entities = vec![
            entity_at(4, Vec2::new(210.0, 600.0), 15.0),
            entity_at(5, Vec2::new(20.0, 20.0), 15.0),
            entity_at(9, player, 30.0),
        ];
        assert_eq!(detector.detect(&entities, player), vec![4, 9]);
    }

    #[test]
    fn test_repeat_hits_not_deduplicated() {
        let detector = CollisionDetector::new(25.0);
        let player = Vec2::new(200.0, 600.0);
        let entities = vec![entity_at(1, player, 20.0)];
        for _ in 0..3 {
            assert_eq!(detector.detect(&entities, player), vec![1]);
        }
    }

    #[test]
    fn test_circles_overlap() {
        assert!(circles_overlap(Vec2::ZERO, 1.0, Vec2::new(1.5, 0.0), 1.0));
        assert!(!circles_overlap(Vec2::ZERO, 1.0, Vec2::new(2.0, 0.0), 1.0));
    }
}
