//! Ballpit entry point
//!
//! Headless runner: drives a session at a fixed 60 Hz with scripted input
//! and logs the HUD once per simulated second. Pass a JSON config path as
//! the first argument to override the defaults.

use glam::Vec2;

use ballpit::hud::HudText;
use ballpit::{Command, Session, SimConfig};

const FRAME_DT: f32 = 1.0 / 60.0;
const SPAWN_FRAMES: u32 = 600;
const TOTAL_FRAMES: u32 = 1200;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> ballpit::Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };
    let center = config.boundary_center;
    let radius = config.boundary_radius;
    let mut session = Session::new(config)?;

    log::info!("Ballpit headless run: {TOTAL_FRAMES} frames");
    session.handle(Command::SpawnPressed);

    for frame in 0..TOTAL_FRAMES {
        // Sweep the pointer across the upper half of the arena while spawning
        let t = frame as f32 * FRAME_DT;
        let pointer = center + Vec2::new(t.sin() * radius * 0.6, -radius * 0.5);

        if frame == SPAWN_FRAMES {
            session.handle(Command::SpawnReleased);
        }
        session.frame(FRAME_DT, pointer);

        if frame % 60 == 59 {
            let hud = HudText::from_session(&session);
            let [count, energy, fps] = hud.lines();
            log::info!("{count} | {energy} | {fps}");
        }
    }

    Ok(())
}
