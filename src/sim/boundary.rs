//! Circular boundary containment
//!
//! Two restraint variants exist and are kept apart on purpose: the full
//! sweep run during integration corrects by the *squared* overshoot, the
//! edge-cell sweep run after collisions corrects by the linear overshoot.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::grid::{CellCoord, PartitionGrid};
use super::particle::{Particle, ParticleStore};
use super::vector::{distance, reflect, unit};

/// The arena wall
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Boundary {
    pub center: Vec2,
    pub radius: f32,
    /// Restitution applied to the reflected velocity
    pub energy_conservation: f32,
    /// Over-correction factor for the push back inside
    pub overshot_compensation: f32,
}

/// Outcome of checking one particle against the wall
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Penetration {
    /// Unit vector from the particle toward the boundary centre
    pub normal: Vec2,
    /// How far the disc pokes past the wall
    pub overshoot: f32,
}

impl Boundary {
    /// Some(penetration) when a disc of `radius` at `position` pokes outside
    pub fn penetration(&self, position: Vec2, radius: f32) -> Option<Penetration> {
        let dist = distance(position, self.center);
        if dist > self.radius - radius {
            Some(Penetration {
                normal: unit(self.center - position),
                overshoot: dist - self.radius + radius,
            })
        } else {
            None
        }
    }

    /// Full-sweep restraint: push in by overshoot² · compensation and bounce
    ///
    /// Returns true if the particle was corrected.
    pub fn restrain_particle(&self, p: &mut Particle) -> bool {
        match self.penetration(p.position, p.radius) {
            Some(hit) => {
                p.position += hit.normal * hit.overshoot * hit.overshoot * self.overshot_compensation;
                p.velocity = reflect(p.velocity, hit.normal) * self.energy_conservation;
                true
            }
            None => false,
        }
    }

    /// Edge-cell restraint: push in by overshoot · compensation and bounce
    pub fn restrain_edge_particle(&self, p: &mut Particle) -> bool {
        match self.penetration(p.position, p.radius) {
            Some(hit) => {
                p.position += hit.normal * hit.overshoot * self.overshot_compensation;
                p.velocity = reflect(p.velocity, hit.normal) * self.energy_conservation;
                true
            }
            None => false,
        }
    }

    /// Run the edge-cell restraint over every particle registered in `cells`
    ///
    /// Cells listed twice are swept twice. Returns the number of corrections.
    pub fn check_boundary(
        &self,
        cells: &[CellCoord],
        grid: &PartitionGrid,
        particles: &mut ParticleStore,
    ) -> usize {
        let store = particles.as_mut_slice();
        let mut corrected = 0;
        for &(x, y) in cells {
            for &index in grid.cell(x, y) {
                if self.restrain_edge_particle(&mut store[index]) {
                    corrected += 1;
                }
            }
        }
        corrected
    }

    /// Pull a spawn point back inside so a disc of `radius` fits (no compensation)
    pub fn clamp_spawn_position(&self, position: Vec2, radius: f32) -> Vec2 {
        match self.penetration(position, radius) {
            Some(hit) => position + hit.normal * hit.overshoot,
            None => position,
        }
    }

    /// Cells whose rectangle straddles the circle of `test_radius`
    ///
    /// A cell straddles when some but not all of its four corners lie within
    /// `test_radius` of the centre. Scan order is column-major.
    pub fn straddling_cells(&self, grid: &PartitionGrid, test_radius: f32) -> Vec<CellCoord> {
        let size = grid.cell_size();
        let mut cells = Vec::new();
        for x in 0..grid.width() {
            for y in 0..grid.height() {
                let top_left = grid.partition_to_position(x, y);
                let corners = [
                    top_left,
                    top_left + Vec2::new(size.x, 0.0),
                    top_left + Vec2::new(0.0, size.y),
                    top_left + size,
                ];
                let within = corners
                    .iter()
                    .filter(|&&c| distance(c, self.center) <= test_radius)
                    .count();
                if within > 0 && within < 4 {
                    cells.push((x, y));
                }
            }
        }
        cells
    }

    /// Edge-cell set: straddlers of the true wall followed by straddlers of
    /// the wall inset by `cell_width * inset_factor`
    pub fn edge_cells(&self, grid: &PartitionGrid, inset_factor: f32) -> Vec<CellCoord> {
        let mut cells = self.straddling_cells(grid, self.radius);
        let inset = self.radius - grid.cell_size().x * inset_factor;
        cells.extend(self.straddling_cells(grid, inset));
        cells
    }
}
