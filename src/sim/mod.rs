//! Simulation core
//!
//! Everything that runs once per rendered frame lives here. This module must
//! stay free of rendering and platform dependencies:
//! - Single-threaded, run to completion
//! - Seeded RNG only
//! - Stages run strictly in order: integrate → collide → edge sweep

pub mod boundary;
pub mod collision;
pub mod grid;
pub mod kinematics;
pub mod particle;
pub mod tick;
pub mod vector;
pub mod world;

pub use boundary::{Boundary, Penetration};
pub use collision::{CollisionParams, check_collision_cluster, check_collisions, collision_formula};
pub use grid::{CellCoord, PartitionGrid};
pub use kinematics::{Acceleration, update_kinematics};
pub use particle::{Particle, ParticleStore};
pub use tick::{FrameInput, FrameStats, substep, tick};
pub use world::World;
