//! Ballpit - circular particles bouncing around a circular arena
//!
//! Core modules:
//! - `sim`: Per-frame simulation (grid partitioning, kinematics, collisions, containment)
//! - `session`: Interactive layer (spawner, toggles, frame timing)
//! - `hud`: HUD text and debug overlay geometry
//! - `settings`: Data-driven simulation tuning

pub mod error;
pub mod hud;
pub mod session;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use session::{Command, Session};
pub use settings::SimConfig;

/// Simulation configuration constants
pub mod consts {
    /// Window dimensions
    pub const WINDOW_WIDTH: f32 = 1000.0;
    pub const WINDOW_HEIGHT: f32 = 1000.0;

    /// Partition grid dimensions (cells per axis)
    pub const PARTITION_WIDTH: usize = 24;
    pub const PARTITION_HEIGHT: usize = 24;

    /// Arena boundary, centred in the window
    pub const BOUNDARY_CENTER_X: f32 = WINDOW_WIDTH / 2.0;
    pub const BOUNDARY_CENTER_Y: f32 = WINDOW_HEIGHT / 2.0;
    pub const BOUNDARY_RADIUS: f32 = 300.0;

    /// Downward acceleration (pixels/s²)
    pub const GRAVITY: f32 = 1000.0;
    /// Restitution applied after every bounce and collision
    pub const ENERGY_CONSERVATION: f32 = 0.99;
    /// Over-correction factor for penetration resolution
    pub const OVERSHOT_COMPENSATION: f32 = 1.1;
    /// Pointer attraction: acceleration scales with distance / this
    pub const ATTRACTION_FALLOFF: f32 = 50.0;
    /// Kinetic energy divisor for kJ display units
    pub const ENERGY_SCALE: f32 = 1000.0;
    /// Edge cells are also computed at radius - cell_width * this
    pub const EDGE_INSET_FACTOR: f32 = 1.4;
    /// Sub-steps per rendered frame
    pub const SUB_UPDATES: u32 = 4;

    /// Seconds between spawns while the spawn button is held
    pub const SPAWN_SPEED: f32 = 0.05;
    pub const PARTICLE_MIN_SIZE: u32 = 5;
    pub const PARTICLE_MAX_SIZE: u32 = 10;
    /// Spawn position jitter (exclusive upper bound, pixels)
    pub const SPAWN_JITTER: u32 = 5;

    /// Velocity overlay length per unit speed
    pub const DRAW_SCALE: f32 = 0.05;
    /// Longest frame the session will simulate in one go
    pub const MAX_FRAME_DT: f32 = 0.1;
    /// FPS bar is capped at this width
    pub const FPS_BAR_MAX: u32 = 110;
}
