//! Simulation world
//!
//! Everything a frame mutates lives here; no global state.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::boundary::Boundary;
use super::grid::{CellCoord, PartitionGrid};
use super::particle::{Particle, ParticleStore};
use crate::error::Result;
use crate::settings::SimConfig;

#[derive(Debug, Clone)]
pub struct World {
    pub config: SimConfig,
    pub particles: ParticleStore,
    pub grid: PartitionGrid,
    pub boundary: Boundary,
    /// Cells straddling the wall; fixed for the life of the world
    pub edge_cells: Vec<CellCoord>,
    /// Source for degenerate collision normals and spawn rolls
    pub rng: Pcg32,
    /// Scratch buffer reused by the collision pass
    pub(crate) pool: Vec<usize>,
}

impl World {
    /// Build an empty world for a validated config
    pub fn new(config: SimConfig) -> Result<Self> {
        config.validate()?;

        let boundary = Boundary {
            center: config.boundary_center,
            radius: config.boundary_radius,
            energy_conservation: config.energy_conservation,
            overshot_compensation: config.overshot_compensation,
        };
        let grid = PartitionGrid::around_circle(
            config.partition_width,
            config.partition_height,
            config.boundary_center,
            config.boundary_radius,
        );
        let edge_cells = boundary.edge_cells(&grid, config.edge_inset_factor);

        log::info!(
            "World {}x{} grid, cell {:.1}x{:.1}, {} edge cells",
            grid.width(),
            grid.height(),
            grid.cell_size().x,
            grid.cell_size().y,
            edge_cells.len()
        );

        Ok(Self {
            rng: Pcg32::seed_from_u64(config.seed),
            config,
            particles: ParticleStore::new(),
            grid,
            boundary,
            edge_cells,
            pool: Vec::new(),
        })
    }

    /// Append a particle as-is; no placement adjustment
    pub fn spawn(&mut self, particle: Particle) -> usize {
        self.particles.push(particle)
    }

    /// Remove every particle
    pub fn clear(&mut self) {
        log::info!("Clearing {} particles", self.particles.len());
        self.particles.clear();
        self.grid.clear();
    }

    /// Read-only view for drawing
    pub fn particles(&self) -> &[Particle] {
        self.particles.as_slice()
    }
}
