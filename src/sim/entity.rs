//! Transient scrolling entities: hay-bale obstacles and cloud decorations
//!
//! Both kinds are pooled. An instance sitting in a pool's free list carries
//! stale position data and only becomes meaningful again after `reset`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::consts::*;

/// A hay bale scrolling toward the player at constant speed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub pos: Vec2,
}

impl Obstacle {
    pub fn new() -> Self {
        Self {
            pos: OBSTACLE_SPAWN_POS,
        }
    }

    /// Re-initialize a pooled instance at the spawn point
    pub fn reset(&mut self) {
        self.pos = OBSTACLE_SPAWN_POS;
    }

    /// One fixed step of leftward scroll
    pub fn advance(&mut self, dt: f32) {
        self.pos.x -= OBSTACLE_SPEED * dt;
    }

    /// Hitbox derived from the current position plus the fixed offset.
    /// Derivative state: recomputed on demand, never stored or set.
    pub fn hitbox(&self) -> Aabb {
        Aabb::new(self.pos + OBSTACLE_HITBOX_OFFSET, OBSTACLE_HITBOX_SIZE)
    }

    /// Full sprite footprint for the renderer; the hitbox sits inside it
    pub fn sprite_rect(&self) -> Aabb {
        Aabb::new(self.pos, OBSTACLE_SIZE)
    }

    /// Fully past the left edge, ready to be pruned
    pub fn off_screen(&self) -> bool {
        self.pos.x + OBSTACLE_SIZE.x < 0.0
    }
}

impl Default for Obstacle {
    fn default() -> Self {
        Self::new()
    }
}

/// Which cloud sprite a decoration uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CloudKind {
    #[default]
    Puffy,
    Streaky,
    Wisp,
}

impl CloudKind {
    pub const ALL: [CloudKind; 3] = [CloudKind::Puffy, CloudKind::Streaky, CloudKind::Wisp];
}

/// A non-colliding background cloud with its own drift speed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cloud {
    pub pos: Vec2,
    pub speed: f32,
    pub kind: CloudKind,
}

impl Cloud {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(CLOUD_SPAWN_X, CLOUD_BAND_MIN_Y),
            speed: CLOUD_MIN_SPEED,
            kind: CloudKind::default(),
        }
    }

    /// Re-initialize a pooled instance with freshly rolled attributes
    pub fn reset(&mut self, y: f32, speed: f32, kind: CloudKind) {
        self.pos = Vec2::new(CLOUD_SPAWN_X, y);
        self.speed = speed;
        self.kind = kind;
    }

    pub fn advance(&mut self, dt: f32) {
        self.pos.x -= self.speed * dt;
    }

    /// Draw rectangle for the renderer; clouds have no hitbox
    pub fn sprite_rect(&self) -> Aabb {
        Aabb::new(self.pos, CLOUD_SIZE)
    }

    pub fn off_screen(&self) -> bool {
        self.pos.x + CLOUD_SIZE.x < 0.0
    }
}

impl Default for Cloud {
    fn default() -> Self {
        Self::new()
    }
}
