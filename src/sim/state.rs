//! Game state and core simulation types
//!
//! Everything a run needs to advance deterministically lives on
//! [`GameState`]; the host reads it directly after each frame's fixed steps
//! have drained.

use glam::Vec2;
use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::entity::{Cloud, Obstacle};
use super::pool::EntityPool;
use crate::consts::*;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    /// Simulation advances every fixed step
    Playing,
    /// Run ended; only a buffered restart is honored
    GameOver,
}

/// Background stage. Advances one way, at most once per run, when the score
/// first reaches [`BACKDROP_THRESHOLD`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Backdrop {
    #[default]
    Meadow,
    Dusk,
}

impl Backdrop {
    /// Terminal stage: no further advance, and cloud spawning stays off
    pub fn is_terminal(&self) -> bool {
        matches!(self, Backdrop::Dusk)
    }

    /// One-way advance to the terminal stage
    pub fn advance(&mut self) {
        *self = Backdrop::Dusk;
    }
}

/// Things that happened during the most recent fixed step, for the host to
/// react to (sound cue, backdrop swap) without diffing state. Transient:
/// rebuilt every step, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// An obstacle scrolled past and was scored
    ObstacleCleared,
    /// The backdrop advanced to its terminal stage
    BackdropAdvanced,
    /// The player hit an obstacle; the run is over
    PlayerCrashed,
    /// A buffered restart was consumed and a new run began
    RunRestarted,
}

/// The player character: fixed x lane, 1-D vertical physics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel_y: f32,
    pub on_ground: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PLAYER_X, GROUND_Y),
            vel_y: 0.0,
            on_ground: true,
        }
    }
}

impl Player {
    /// Hitbox derived from the sprite position plus the fixed offset.
    /// Recomputed on demand, never independently settable.
    pub fn hitbox(&self) -> Aabb {
        Aabb::new(self.pos + PLAYER_HITBOX_OFFSET, PLAYER_HITBOX_SIZE)
    }

    /// Full sprite footprint for the renderer; the hitbox sits inside it
    pub fn sprite_rect(&self) -> Aabb {
        Aabb::new(self.pos, PLAYER_SIZE)
    }

    /// One fixed step of vertical motion: semi-implicit Euler, then ground
    /// clamp. Landing zeroes the velocity and re-grounds the player.
    pub fn integrate(&mut self, dt: f32) {
        self.vel_y += GRAVITY * dt;
        self.pos.y += self.vel_y * dt;
        if self.pos.y <= GROUND_Y {
            self.pos.y = GROUND_Y;
            self.vel_y = 0.0;
            self.on_ground = true;
        }
    }

    /// Apply the jump impulse. The caller consumes the buffered request and
    /// has already checked `on_ground`.
    pub fn jump(&mut self) {
        self.vel_y = JUMP_IMPULSE;
        self.on_ground = false;
    }
}

fn obstacle_pool() -> EntityPool<Obstacle> {
    EntityPool::new(Obstacle::new)
}

fn cloud_pool() -> EntityPool<Cloud> {
    EntityPool::new(Cloud::new)
}

/// Decoration RNG state: a live `Pcg32` that serializes as its seed and is
/// rebuilt from it on load, so a restored state replays the same stream as a
/// fresh run under that seed
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "u64", into = "u64")]
pub struct RngState {
    seed: u64,
    rng: Pcg32,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl From<u64> for RngState {
    fn from(seed: u64) -> Self {
        Self::new(seed)
    }
}

impl From<RngState> for u64 {
    fn from(state: RngState) -> u64 {
        state.seed
    }
}

impl RngCore for RngState {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Completed fixed steps since the state was created. Not reset by
    /// restart, so hosts can use it as a monotonic animation clock.
    pub time_ticks: u64,
    /// Current phase
    pub phase: RunPhase,
    /// Obstacles passed this run
    pub score: u32,
    /// Background stage
    pub backdrop: Backdrop,
    /// The player character
    pub player: Player,
    /// Active obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    /// Active clouds in spawn order
    pub clouds: Vec<Cloud>,
    /// Seconds accumulated toward the next obstacle spawn
    pub spawn_timer: f32,
    /// Jump request waiting to be consumed while grounded
    pub jump_buffered: bool,
    /// Restart request waiting to be consumed while game over
    pub restart_buffered: bool,
    /// Events from the most recent step
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Decoration RNG; persists as its seed and reseeds from it on load
    pub(crate) rng: RngState,
    /// Inactive obstacle instances
    #[serde(skip, default = "obstacle_pool")]
    pub(crate) obstacle_pool: EntityPool<Obstacle>,
    /// Inactive cloud instances
    #[serde(skip, default = "cloud_pool")]
    pub(crate) cloud_pool: EntityPool<Cloud>,
}

impl GameState {
    /// Create a fresh run with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            time_ticks: 0,
            phase: RunPhase::Playing,
            score: 0,
            backdrop: Backdrop::default(),
            player: Player::default(),
            obstacles: Vec::new(),
            clouds: Vec::new(),
            spawn_timer: 0.0,
            jump_buffered: false,
            restart_buffered: false,
            events: Vec::new(),
            rng: RngState::new(seed),
            obstacle_pool: obstacle_pool(),
            cloud_pool: cloud_pool(),
        }
    }

    /// Inactive obstacles parked in the pool (inspection/testing)
    pub fn pooled_obstacles(&self) -> usize {
        self.obstacle_pool.free_count()
    }

    /// Inactive clouds parked in the pool (inspection/testing)
    pub fn pooled_clouds(&self) -> usize {
        self.cloud_pool.free_count()
    }
}
