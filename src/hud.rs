//! HUD text and debug overlay geometry
//!
//! Pure data for whatever frontend draws the frame. Nothing here touches a
//! window or a GPU.

use glam::Vec2;

use crate::consts::FPS_BAR_MAX;
use crate::session::Session;
use crate::sim::vector::{angle, magnitude};
use crate::sim::{Particle, PartitionGrid, World};

/// Key bindings shown in the bottom-left corner
pub const CONTROLS_TEXT: &str = "spawn particle - LMB\n\
gravitate mouse - RMB\n\
toggle gravity - G\n\
debug - D\n\
clear - C\n\
exit - ESC\n";

/// Gap between neighbouring overlay cells (pixels)
const CELL_GAP: f32 = 2.0;

/// HUD lines for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudText {
    pub particle_count: String,
    pub kinetic_energy: String,
    pub fps: String,
    /// Width of the FPS bar in pixels
    pub fps_bar: u32,
}

impl HudText {
    pub fn new(particle_count: usize, energy: f32, fps: u32) -> Self {
        // Display truncates to whole kJ; negative or NaN shows as 0
        let energy_kj = energy as u64;
        Self {
            particle_count: format!("particle_count: {particle_count}"),
            kinetic_energy: format!("kinetic_energy: {energy_kj} kJ"),
            fps: format!("fps: {fps}"),
            fps_bar: fps.min(FPS_BAR_MAX),
        }
    }

    pub fn from_session(session: &Session) -> Self {
        Self::new(
            session.world.particles().len(),
            session.last_frame.energy,
            session.fps(),
        )
    }

    /// The three text lines, top to bottom
    pub fn lines(&self) -> [&str; 3] {
        [self.particle_count.as_str(), self.kinetic_energy.as_str(), self.fps.as_str()]
    }
}

/// An axis-aligned rectangle to outline or fill
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub center: Vec2,
    pub size: Vec2,
}

/// A thin bar rotated about its centre
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub center: Vec2,
    pub length: f32,
    /// Degrees
    pub rotation: f32,
}

/// Velocity indicator for one particle
pub fn velocity_bar(p: &Particle, draw_scale: f32) -> Bar {
    Bar {
        center: p.position + p.velocity * draw_scale / 2.0,
        length: magnitude(p.velocity) * draw_scale,
        rotation: angle(Vec2::ZERO, p.velocity).to_degrees(),
    }
}

/// Rectangle for cell `(x, y)`, shrunk so neighbours stay distinguishable
pub fn cell_rect(grid: &PartitionGrid, x: usize, y: usize) -> Rect {
    let size = grid.cell_size();
    Rect {
        center: grid.partition_to_position(x, y) + size / 2.0,
        size: size - Vec2::splat(CELL_GAP),
    }
}

/// Everything the debug view draws on top of the particles
#[derive(Debug, Clone, Default)]
pub struct DebugOverlay {
    pub cells: Vec<Rect>,
    pub edge_cells: Vec<Rect>,
    pub velocities: Vec<Bar>,
}

impl DebugOverlay {
    pub fn build(world: &World) -> Self {
        let grid = &world.grid;
        let mut cells = Vec::with_capacity(grid.width() * grid.height());
        for x in 0..grid.width() {
            for y in 0..grid.height() {
                cells.push(cell_rect(grid, x, y));
            }
        }
        let edge_cells = world
            .edge_cells
            .iter()
            .map(|&(x, y)| cell_rect(grid, x, y))
            .collect();
        let velocities = world
            .particles()
            .iter()
            .map(|p| velocity_bar(p, world.config.draw_scale))
            .collect();

        Self {
            cells,
            edge_cells,
            velocities,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SimConfig;

    #[test]
    fn test_hud_lines() {
        let hud = HudText::new(42, 1234.9, 144);
        assert_eq!(
            hud.lines(),
            ["particle_count: 42", "kinetic_energy: 1234 kJ", "fps: 144"]
        );
        assert_eq!(hud.fps_bar, 110);
        assert_eq!(HudText::new(0, 0.0, 30).fps_bar, 30);
    }

    #[test]
    fn test_velocity_bar() {
        let p = Particle::with_radius(5.0, Vec2::new(100.0, 100.0), Vec2::new(0.0, 200.0));
        let bar = velocity_bar(&p, 0.05);
        assert!((bar.length - 10.0).abs() < 1e-4);
        assert_eq!(bar.center, Vec2::new(100.0, 105.0));
        assert!((bar.rotation.abs() - 90.0).abs() < 1e-3);
    }

    #[test]
    fn test_overlay_counts() {
        let mut world = World::new(SimConfig::default()).expect("default config is valid");
        world.spawn(Particle::with_radius(5.0, Vec2::new(500.0, 500.0), Vec2::new(1.0, 0.0)));
        let overlay = DebugOverlay::build(&world);
        assert_eq!(overlay.cells.len(), 24 * 24);
        assert_eq!(overlay.edge_cells.len(), world.edge_cells.len());
        assert_eq!(overlay.velocities.len(), 1);
        assert_eq!(
            overlay.cells[0],
            Rect {
                center: Vec2::new(212.5, 212.5),
                size: Vec2::new(23.0, 23.0),
            }
        );
    }

    #[test]
    fn test_from_session() {
        let session = Session::new(SimConfig::default()).expect("default config is valid");
        let hud = HudText::from_session(&session);
        assert_eq!(hud.particle_count, "particle_count: 0");
        assert_eq!(hud.fps, "fps: 0");
        assert!(CONTROLS_TEXT.contains("toggle gravity - G"));
    }
}
