//! Hay Dash - a side-scrolling farm runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player physics, spawning, collision, scoring)
//! - `frame`: Fixed-timestep frame loop that hosts feed real frame time into
//!
//! Rendering, audio and asset loading live outside this crate. A front-end
//! drives [`frame::FrameLoop::advance`] once per drawn frame and then reads
//! the resulting [`sim::GameState`] back for display; it never observes the
//! simulation between fixed steps.

pub mod frame;
pub mod sim;

pub use frame::FrameLoop;
pub use sim::{GameState, RunPhase, TickInput};

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f64 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Frame deltas above this are clamped before accumulation
    pub const MAX_FRAME_DELTA: f64 = 0.1;

    /// Logical world size; the viewport stretches it to the window
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 500.0;

    /// Ground line the player runs along
    pub const GROUND_Y: f32 = 63.0;
    /// Vertical acceleration, negative toward the ground
    pub const GRAVITY: f32 = -1500.0;
    /// Upward velocity applied when a buffered jump is consumed
    pub const JUMP_IMPULSE: f32 = 600.0;

    /// The player's lane is fixed at the left edge
    pub const PLAYER_X: f32 = 0.0;
    /// Sprite footprint (the hitbox is smaller, see below)
    pub const PLAYER_SIZE: Vec2 = Vec2::new(170.0, 170.0);
    /// Hitbox rectangle relative to the sprite origin
    pub const PLAYER_HITBOX_OFFSET: Vec2 = Vec2::new(50.0, 60.0);
    pub const PLAYER_HITBOX_SIZE: Vec2 = Vec2::new(60.0, 50.0);

    /// Obstacles enter at the right edge and scroll left
    pub const OBSTACLE_SPAWN_POS: Vec2 = Vec2::new(WORLD_WIDTH, 80.0);
    pub const OBSTACLE_SPEED: f32 = 400.0;
    pub const OBSTACLE_SIZE: Vec2 = Vec2::new(120.0, 120.0);
    pub const OBSTACLE_HITBOX_OFFSET: Vec2 = Vec2::new(30.0, 30.0);
    pub const OBSTACLE_HITBOX_SIZE: Vec2 = Vec2::new(70.0, 60.0);
    /// Seconds between obstacle spawns (strictly periodic, no jitter)
    pub const OBSTACLE_SPAWN_INTERVAL: f32 = 3.0;

    /// Score at which the backdrop swaps to its final stage
    pub const BACKDROP_THRESHOLD: u32 = 5;

    /// Per-step chance of a cloud entering the sky band
    pub const CLOUD_SPAWN_CHANCE: f64 = 0.005;
    pub const CLOUD_SPAWN_X: f32 = WORLD_WIDTH + 20.0;
    pub const CLOUD_SIZE: Vec2 = Vec2::new(110.0, 60.0);
    /// Vertical band clouds drift through, up near the top of the world
    pub const CLOUD_BAND_MIN_Y: f32 = 320.0;
    pub const CLOUD_BAND_MAX_Y: f32 = WORLD_HEIGHT - 60.0;
    /// Drift speed range; each cloud rolls its own
    pub const CLOUD_MIN_SPEED: f32 = 40.0;
    pub const CLOUD_MAX_SPEED: f32 = 110.0;
}
