//! Axis-aligned collision testing
//!
//! Every hitbox in the game is a plain AABB. The run ends on the first
//! player/obstacle overlap, so the scan stops as soon as one is found.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::Obstacle;

/// An axis-aligned bounding box, origin at the bottom-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub const fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub const fn from_coords(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Interval overlap on both axes. Strict: boxes that merely share an
    /// edge do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.pos.x < other.pos.x + other.size.x
            && self.pos.x + self.size.x > other.pos.x
            && self.pos.y < other.pos.y + other.size.y
            && self.pos.y + self.size.y > other.pos.y
    }
}

/// Scan the active obstacles, in spawn order, for the first one whose hitbox
/// overlaps `player_box`. Returns its index; the rest are not examined.
pub fn first_hit(player_box: &Aabb, obstacles: &[Obstacle]) -> Option<usize> {
    obstacles
        .iter()
        .position(|o| player_box.overlaps(&o.hitbox()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::Obstacle;

    #[test]
    fn test_overlap_basic() {
        let a = Aabb::from_coords(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::from_coords(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_overlap_disjoint() {
        let a = Aabb::from_coords(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::from_coords(20.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));

        // Overlapping in x but not y is no overlap
        let c = Aabb::from_coords(5.0, 30.0, 10.0, 10.0);
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_overlap_shared_edge_is_miss() {
        let a = Aabb::from_coords(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::from_coords(10.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_player_obstacle_hit() {
        // Player hitbox (50, 70, 60, 50) against an obstacle spawned at
        // (20, 50), whose hitbox lands at (50, 80, 70, 60): a hit.
        let player_box = Aabb::from_coords(50.0, 70.0, 60.0, 50.0);
        let mut obstacle = Obstacle::new();
        obstacle.pos = Vec2::new(20.0, 50.0);
        assert_eq!(obstacle.hitbox(), Aabb::from_coords(50.0, 80.0, 70.0, 60.0));
        assert!(player_box.overlaps(&obstacle.hitbox()));
        assert_eq!(first_hit(&player_box, &[obstacle]), Some(0));
    }

    #[test]
    fn test_first_hit_stops_at_first() {
        let player_box = Aabb::from_coords(50.0, 70.0, 60.0, 50.0);
        let mut far = Obstacle::new();
        far.pos = Vec2::new(600.0, 80.0);
        let mut near = Obstacle::new();
        near.pos = Vec2::new(20.0, 50.0);
        let mut also_near = Obstacle::new();
        also_near.pos = Vec2::new(30.0, 50.0);

        let obstacles = vec![far, near, also_near];
        assert_eq!(first_hit(&player_box, &obstacles), Some(1));
    }

    #[test]
    fn test_first_hit_none() {
        let player_box = Aabb::from_coords(50.0, 70.0, 60.0, 50.0);
        let obstacles = vec![Obstacle::new()];
        assert_eq!(first_hit(&player_box, &obstacles), None);
    }
}
