//! Fixed timestep simulation tick
//!
//! One call advances exactly one whole step, in a fixed order: consume jump,
//! integrate the player, spawn, scroll, prune + score, detect collision,
//! advance the backdrop. A pruned obstacle never reaches that step's
//! collision scan.

use rand::Rng;

use super::collision::first_hit;
use super::entity::CloudKind;
use super::state::{Backdrop, GameEvent, GameState, Player, RunPhase};
use crate::consts::*;

/// How far ahead of the player the demo bot reacts to an obstacle
const AUTOPILOT_LOOKAHEAD: f32 = 200.0;

/// Input snapshot for a single host frame (deterministic)
///
/// Each flag is a pressed-this-frame edge, not a held state; the simulation
/// buffers requests internally until they can be consumed. The host feeds a
/// snapshot to the first fixed step of a frame only, so one key-down edge is
/// seen exactly once.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Jump was pressed since the last frame
    pub jump: bool,
    /// Restart was pressed since the last frame
    pub restart: bool,
    /// Let the built-in bot supply jump/restart (demo/attract mode)
    pub autopilot: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();

    let mut input = *input;
    if input.autopilot {
        drive_autopilot(state, &mut input);
    }

    // Latch edge-triggered requests; they survive until consumed
    if input.jump {
        state.jump_buffered = true;
    }
    if input.restart {
        state.restart_buffered = true;
    }

    match state.phase {
        RunPhase::Playing => step(state, dt),
        RunPhase::GameOver => {
            if state.restart_buffered {
                restart(state);
            }
        }
    }
}

/// One whole Playing step
fn step(state: &mut GameState, dt: f32) {
    state.time_ticks += 1;

    // A buffered jump is consumed exactly once, and only while grounded;
    // requests made mid-air wait here until landing
    if state.jump_buffered && state.player.on_ground {
        state.player.jump();
        state.jump_buffered = false;
    }
    state.player.integrate(dt);

    spawn_obstacles(state, dt);
    spawn_clouds(state);

    for obstacle in &mut state.obstacles {
        obstacle.advance(dt);
    }
    for cloud in &mut state.clouds {
        cloud.advance(dt);
    }

    prune_off_screen(state);
    detect_collision(state);
    advance_backdrop(state);
}

/// Strictly periodic obstacle spawning driven by accumulated step time
fn spawn_obstacles(state: &mut GameState, dt: f32) {
    state.spawn_timer += dt;
    if state.spawn_timer >= OBSTACLE_SPAWN_INTERVAL {
        let mut obstacle = state.obstacle_pool.acquire();
        obstacle.reset();
        state.obstacles.push(obstacle);
        state.spawn_timer = 0.0;
    }
}

/// Probabilistic cloud spawning, off for good once the backdrop is terminal
fn spawn_clouds(state: &mut GameState) {
    if state.backdrop.is_terminal() {
        return;
    }
    if !state.rng.random_bool(CLOUD_SPAWN_CHANCE) {
        return;
    }

    let y = state.rng.random_range(CLOUD_BAND_MIN_Y..=CLOUD_BAND_MAX_Y);
    let speed = state.rng.random_range(CLOUD_MIN_SPEED..=CLOUD_MAX_SPEED);
    let kind = CloudKind::ALL[state.rng.random_range(0..CloudKind::ALL.len())];

    let mut cloud = state.cloud_pool.acquire();
    cloud.reset(y, speed, kind);
    state.clouds.push(cloud);
}

/// Release everything fully past the left edge back to its pool. Each
/// pruned obstacle is one point; clouds score nothing. Runs before the
/// collision scan so a cleared obstacle cannot also end the run.
fn prune_off_screen(state: &mut GameState) {
    let mut i = 0;
    while i < state.obstacles.len() {
        if state.obstacles[i].off_screen() {
            let obstacle = state.obstacles.remove(i);
            state.obstacle_pool.release(obstacle);
            state.score += 1;
            state.events.push(GameEvent::ObstacleCleared);
        } else {
            i += 1;
        }
    }

    let mut i = 0;
    while i < state.clouds.len() {
        if state.clouds[i].off_screen() {
            let cloud = state.clouds.remove(i);
            state.cloud_pool.release(cloud);
        } else {
            i += 1;
        }
    }
}

/// The first overlap ends the run; later obstacles are not examined and
/// anything the player had queued is thrown away
fn detect_collision(state: &mut GameState) {
    if first_hit(&state.player.hitbox(), &state.obstacles).is_some() {
        state.phase = RunPhase::GameOver;
        state.jump_buffered = false;
        state.restart_buffered = false;
        state.events.push(GameEvent::PlayerCrashed);
        log::info!("run over at score {}", state.score);
    }
}

/// One-way backdrop swap the first time the score reaches the threshold.
/// Re-crossing the threshold later in the run does nothing.
fn advance_backdrop(state: &mut GameState) {
    if !state.backdrop.is_terminal() && state.score >= BACKDROP_THRESHOLD {
        state.backdrop.advance();
        state.events.push(GameEvent::BackdropAdvanced);
        log::info!("backdrop advanced at score {}", state.score);
    }
}

/// GameOver -> Playing: every active entity goes back to its pool and the
/// run state is rebuilt under the same seed
fn restart(state: &mut GameState) {
    for obstacle in state.obstacles.drain(..) {
        state.obstacle_pool.release(obstacle);
    }
    for cloud in state.clouds.drain(..) {
        state.cloud_pool.release(cloud);
    }
    state.player = Player::default();
    state.score = 0;
    state.spawn_timer = 0.0;
    state.backdrop = Backdrop::default();
    state.phase = RunPhase::Playing;
    state.jump_buffered = false;
    state.restart_buffered = false;
    state.events.push(GameEvent::RunRestarted);
    log::info!("restarting run (seed {})", state.seed);
}

/// Scripted pilot for demo/attract mode: jump when the nearest obstacle
/// enters the reaction window, restart after a crash
fn drive_autopilot(state: &GameState, input: &mut TickInput) {
    match state.phase {
        RunPhase::GameOver => input.restart = true,
        RunPhase::Playing => {
            if state.player.on_ground {
                let threat = state
                    .obstacles
                    .iter()
                    .any(|o| o.pos.x > PLAYER_X && o.pos.x < AUTOPILOT_LOOKAHEAD);
                if threat {
                    input.jump = true;
                }
            }
        }
    }
}
