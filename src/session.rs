//! Interactive session
//!
//! The layer between raw input and the simulation core: held buttons,
//! toggles, the rate-limited spawner and frame timing.

use std::f32::consts::PI;

use glam::Vec2;
use rand::Rng;

use crate::error::Result;
use crate::settings::SimConfig;
use crate::sim::{Boundary, FrameInput, FrameStats, Particle, World, tick};

/// Input commands (one per key or button edge)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Spawn button pressed (LMB)
    SpawnPressed,
    SpawnReleased,
    /// Attraction button pressed (RMB)
    AttractPressed,
    AttractReleased,
    /// Space
    TogglePause,
    /// D
    ToggleDebug,
    /// G
    ToggleGravity,
    /// C
    Clear,
}

/// Emits particles at a fixed interval while the spawn button is held
#[derive(Debug, Clone)]
pub struct Spawner {
    interval: f32,
    timer: f32,
    held: bool,
}

impl Spawner {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            timer: interval,
            held: false,
        }
    }

    pub fn press(&mut self) {
        self.held = true;
    }

    /// Releasing re-arms the timer so the next press spawns immediately
    pub fn release(&mut self) {
        self.held = false;
        self.timer = self.interval;
    }

    #[inline]
    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Advance by `dt`; true when a particle is due this frame
    pub fn advance(&mut self, dt: f32) -> bool {
        if !self.held {
            return false;
        }
        let due = self.timer >= self.interval;
        if due {
            self.timer -= self.interval;
        }
        self.timer += dt;
        due
    }
}

/// Roll a new particle under the pointer, kept inside the wall
pub fn spawn_particle<R: Rng + ?Sized>(
    config: &SimConfig,
    boundary: &Boundary,
    pointer: Vec2,
    rng: &mut R,
) -> Particle {
    let radius = rng.random_range(config.particle_min_size..=config.particle_max_size) as f32;
    let mass = PI * radius * radius;
    let position = boundary.clamp_spawn_position(pointer, radius);
    let jitter = if config.spawn_jitter > 0 {
        let jx = rng.random_range(0..config.spawn_jitter) as f32;
        let jy = rng.random_range(0..config.spawn_jitter) as f32;
        Vec2::new(jx, jy)
    } else {
        Vec2::ZERO
    };
    Particle::new(radius, mass, position + jitter, Vec2::ZERO)
}

/// A running simulation plus its controls
#[derive(Debug, Clone)]
pub struct Session {
    pub world: World,
    pub spawner: Spawner,
    /// Attraction button held
    pub attracting: bool,
    pub paused: bool,
    pub debug: bool,
    pub gravity: bool,
    /// Stats from the most recent simulated frame
    pub last_frame: FrameStats,
    /// Delta of the most recent frame, after clamping
    pub last_dt: f32,
}

impl Session {
    pub fn new(config: SimConfig) -> Result<Self> {
        let spawner = Spawner::new(config.spawn_speed);
        Ok(Self {
            world: World::new(config)?,
            spawner,
            attracting: false,
            paused: false,
            debug: false,
            gravity: true,
            last_frame: FrameStats::default(),
            last_dt: 0.0,
        })
    }

    pub fn handle(&mut self, command: Command) {
        match command {
            Command::SpawnPressed => self.spawner.press(),
            Command::SpawnReleased => self.spawner.release(),
            Command::AttractPressed => self.attracting = true,
            Command::AttractReleased => self.attracting = false,
            Command::TogglePause => self.paused = !self.paused,
            Command::ToggleDebug => self.debug = !self.debug,
            Command::ToggleGravity => {
                self.gravity = !self.gravity;
                log::info!("Gravity {}", if self.gravity { "on" } else { "off" });
            }
            Command::Clear => self.world.clear(),
        }
    }

    /// Run the spawner and, unless paused, one simulation frame
    pub fn frame(&mut self, dt: f32, pointer: Vec2) -> FrameStats {
        let dt = if dt.is_finite() {
            dt.clamp(0.0, self.world.config.max_frame_dt)
        } else {
            0.0
        };
        self.last_dt = dt;

        if self.spawner.advance(dt) {
            let world = &mut self.world;
            let particle = spawn_particle(&world.config, &world.boundary, pointer, &mut world.rng);
            log::debug!(
                "Spawned r={} at ({:.1}, {:.1}), {} total",
                particle.radius,
                particle.position.x,
                particle.position.y,
                world.particles.len() + 1
            );
            world.spawn(particle);
        }

        if !self.paused {
            let input = FrameInput {
                dt,
                pointer_engaged: self.attracting,
                pointer_position: pointer,
                gravity_enabled: self.gravity,
            };
            self.last_frame = tick(&mut self.world, &input);
        }
        self.last_frame
    }

    /// Whole frames per second implied by the last delta
    pub fn fps(&self) -> u32 {
        if self.last_dt > 0.0 {
            (1.0 / self.last_dt) as u32
        } else {
            0
        }
    }
}
