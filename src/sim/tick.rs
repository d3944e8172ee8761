//! Frame driver
//!
//! Splits a frame into equal substeps; each substep integrates, resolves
//! collisions over the rebuilt grid, then sweeps the edge cells.

use glam::Vec2;

use super::collision::check_collisions;
use super::kinematics::{Acceleration, update_kinematics};
use super::world::World;

/// Input for a single rendered frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Frame delta in seconds
    pub dt: f32,
    /// Attraction button held
    pub pointer_engaged: bool,
    /// Pointer position in screen coordinates
    pub pointer_position: Vec2,
    pub gravity_enabled: bool,
}

/// What a frame produced besides the particle state
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameStats {
    /// Substep-averaged kinetic energy (kJ display units)
    pub energy: f32,
    /// Overlapping pair visits resolved across all substeps
    pub contacts: usize,
    /// Edge-cell wall corrections across all substeps
    pub wall_hits: usize,
}

/// Non-finite or negative deltas become zero
#[inline]
fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() { dt.max(0.0) } else { 0.0 }
}

/// Run one substep of length `dt`, adding into `stats`
pub fn substep(world: &mut World, field: Acceleration, dt: f32, stats: &mut FrameStats) {
    stats.energy += update_kinematics(world, dt, field);
    stats.contacts += check_collisions(world);
    stats.wall_hits += world
        .boundary
        .check_boundary(&world.edge_cells, &world.grid, &mut world.particles);
}

/// Advance the world by one frame
pub fn tick(world: &mut World, input: &FrameInput) -> FrameStats {
    let dt = sanitize_dt(input.dt);
    let sub_updates = world.config.sub_updates;
    let sub_dt = dt / sub_updates as f32;
    let field = Acceleration::from_input(
        input.pointer_engaged,
        input.pointer_position,
        input.gravity_enabled,
    );

    let mut stats = FrameStats::default();
    for _ in 0..sub_updates {
        substep(world, field, sub_dt, &mut stats);
    }

    log::trace!(
        "frame dt={:.4} particles={} energy={:.1} contacts={}",
        dt,
        world.particles.len(),
        stats.energy,
        stats.contacts
    );
    stats
}
