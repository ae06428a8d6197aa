//! Space Shooter entry point
//!
//! Windowing and textures belong to a graphical host. This binary checks the
//! assets are in place and drives a session headlessly at 60 Hz with a
//! scripted pilot, logging how the round ends.

use space_shooter::render::{FrameInfo, InstanceBatch, draw_frame};
use space_shooter::{GamePhase, InputSnapshot, Session, Settings, platform};

const FRAME_DT: f32 = 1.0 / 60.0;
const MAX_FRAMES: u32 = 60 * 60;

/// Circle the black hole while firing
fn scripted_input(frame: u32) -> InputSnapshot {
    InputSnapshot {
        thrust: frame % 90 < 30,
        rotate_left: frame % 240 < 20,
        fire: true,
        ..Default::default()
    }
}

fn main() {
    env_logger::init();
    log::info!("Space Shooter (headless) starting...");

    let headless = std::env::args().any(|arg| arg == "--headless");
    if !headless {
        match platform::locate_atlas() {
            Ok(path) => log::info!("Atlas found at {}", path.display()),
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        }
    }

    let settings = Settings::default();
    let seed: u64 = rand::random();
    let mut session = Session::new(seed);
    let mut batch = InstanceBatch::new();

    for frame in 0..MAX_FRAMES {
        session.handle_input(&scripted_input(frame));
        session.advance(FRAME_DT);

        batch.clear();
        let info = FrameInfo {
            elapsed: frame as f64 * FRAME_DT as f64,
            fps: 60,
        };
        draw_frame(&mut batch, &session.snapshot(), &settings, info);
        session.advance_animations();

        if session.phase() != GamePhase::Gameplay {
            log::info!(
                "Round ended after {} frames: {:?}",
                frame + 1,
                session.phase()
            );
            return;
        }
    }

    log::info!("No winner after {} frames", MAX_FRAMES);
}
