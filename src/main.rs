//! Hay Dash entry point
//!
//! Headless demo host: feeds synthetic frame deltas into the fixed-timestep
//! loop and lets the autopilot play. A graphical front-end replaces this
//! file wholesale; the library itself never draws or reads input.

use hay_dash::consts::SIM_DT;
use hay_dash::sim::GameEvent;
use hay_dash::{FrameLoop, TickInput};

/// Host-side screens as an explicit variant with explicit transitions, not
/// a swappable handler object
enum Screen {
    Menu,
    Playing,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xFA12);
    log::info!("Hay Dash demo starting (seed {seed})");

    let mut screen = Screen::Menu;
    let mut frame_loop = FrameLoop::new(seed);
    let input = TickInput {
        autopilot: true,
        ..TickInput::default()
    };

    // Roughly a minute of play at a steady 60 fps render cadence
    for _ in 0..3600u32 {
        match screen {
            Screen::Menu => {
                // A real front-end would wait for a key; the demo starts at once
                log::info!("menu: starting a new run");
                screen = Screen::Playing;
            }
            Screen::Playing => {
                frame_loop.advance(SIM_DT, &input);
                for event in &frame_loop.frame_events {
                    match event {
                        GameEvent::ObstacleCleared => {
                            log::debug!("cleared an obstacle, score {}", frame_loop.state.score);
                        }
                        GameEvent::BackdropAdvanced => {
                            log::info!("backdrop swapped; clouds are done for this run");
                        }
                        GameEvent::PlayerCrashed | GameEvent::RunRestarted => {
                            // Already logged by the simulation
                        }
                    }
                }
            }
        }
    }

    let state = &frame_loop.state;
    log::info!(
        "demo finished: score {}, {} steps, phase {:?}, backdrop {:?}",
        state.score,
        state.time_ticks,
        state.phase,
        state.backdrop
    );
}
