//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod pool;
pub mod state;
pub mod tick;

pub use collision::{Aabb, first_hit};
pub use entity::{Cloud, CloudKind, Obstacle};
pub use pool::EntityPool;
pub use state::{Backdrop, GameEvent, GameState, Player, RunPhase};
pub use tick::{TickInput, tick};
