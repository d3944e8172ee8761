//! Per-substep integration
//!
//! Applies gravity or pointer attraction, advances each particle, restrains
//! it against the wall and registers it in the freshly cleared grid.

use glam::Vec2;

use super::vector::{distance, magnitude, unit};
use super::world::World;

/// Which force field acts on the particles this substep
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Acceleration {
    /// Pull toward the pointer, growing linearly with distance
    Attract(Vec2),
    /// Constant downward gravity
    Gravity,
    None,
}

impl Acceleration {
    pub fn from_input(pointer_engaged: bool, pointer: Vec2, gravity_enabled: bool) -> Self {
        if pointer_engaged {
            Acceleration::Attract(pointer)
        } else if gravity_enabled {
            Acceleration::Gravity
        } else {
            Acceleration::None
        }
    }

    /// Acceleration felt by a particle at `position`
    #[inline]
    pub fn at(&self, position: Vec2, gravity: f32, falloff: f32) -> Vec2 {
        match *self {
            Acceleration::Attract(pointer) => {
                unit(pointer - position) * gravity * distance(pointer, position) / falloff
            }
            Acceleration::Gravity => Vec2::new(0.0, gravity),
            Acceleration::None => Vec2::ZERO,
        }
    }
}

/// Advance every particle by `dt` and rebuild the grid
///
/// Returns the kinetic energy contributed by this substep, already divided
/// by the display scale and the substep count.
pub fn update_kinematics(world: &mut World, dt: f32, field: Acceleration) -> f32 {
    let config = &world.config;
    let gravity = config.gravity;
    let falloff = config.attraction_falloff;
    let energy_divisor = config.energy_scale * config.sub_updates as f32;

    world.grid.clear();

    let mut energy = 0.0;
    for (index, p) in world.particles.as_mut_slice().iter_mut().enumerate() {
        let a = field.at(p.position, gravity, falloff);
        p.position += p.velocity * dt + a * dt * dt / 2.0;
        p.velocity += a * dt;

        let speed = magnitude(p.velocity);
        energy += p.mass * speed * speed / 2.0 / energy_divisor;

        world.boundary.restrain_particle(p);

        world.grid.assign(index, p.position);
    }
    energy
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SimConfig;
    use crate::sim::particle::Particle;

    fn world() -> World {
        World::new(SimConfig::default()).expect("default config is valid")
    }

    #[test]
    fn test_acceleration_selection() {
        let pointer = Vec2::new(600.0, 500.0);
        assert_eq!(
            Acceleration::from_input(true, pointer, true),
            Acceleration::Attract(pointer)
        );
        assert_eq!(
            Acceleration::from_input(false, pointer, true),
            Acceleration::Gravity
        );
        assert_eq!(
            Acceleration::from_input(false, pointer, false),
            Acceleration::None
        );
    }

    #[test]
    fn test_attraction_grows_with_distance() {
        let pointer = Vec2::new(600.0, 500.0);
        let field = Acceleration::Attract(pointer);
        let near = field.at(Vec2::new(550.0, 500.0), 1000.0, 50.0);
        let far = field.at(Vec2::new(400.0, 500.0), 1000.0, 50.0);
        assert!((near.x - 1000.0).abs() < 1e-2);
        assert!((far.x - 4000.0).abs() < 1e-2);
        assert_eq!(field.at(pointer, 1000.0, 50.0), Vec2::ZERO);
    }

    #[test]
    fn test_free_flight_without_field() {
        let mut w = world();
        w.spawn(Particle::with_radius(5.0, Vec2::new(500.0, 500.0), Vec2::new(40.0, 0.0)));
        let energy = update_kinematics(&mut w, 0.5, Acceleration::None);

        let p = &w.particles.as_slice()[0];
        assert!((p.position.x - 520.0).abs() < 1e-4);
        assert_eq!(p.velocity, Vec2::new(40.0, 0.0));
        let expected = p.mass * 1600.0 / 2.0 / 1000.0 / 4.0;
        assert!((energy - expected).abs() < 1e-3);
    }

    #[test]
    fn test_grid_rebuilt_each_pass() {
        let mut w = world();
        w.spawn(Particle::with_radius(5.0, Vec2::new(500.0, 500.0), Vec2::new(100.0, 0.0)));
        update_kinematics(&mut w, 0.0, Acceleration::None);
        assert_eq!(w.grid.cell(12, 12), &[0]);

        update_kinematics(&mut w, 0.25, Acceleration::None);
        assert_eq!(w.grid.occupancy(), 1);
        assert!(w.grid.cell(12, 12).is_empty());
        assert_eq!(w.grid.cell(13, 12), &[0]);
    }

    #[test]
    fn test_integration_restrains_escapees() {
        let mut w = world();
        w.spawn(Particle::with_radius(5.0, Vec2::new(790.0, 500.0), Vec2::new(200.0, 0.0)));
        update_kinematics(&mut w, 0.05, Acceleration::None);
        let p = &w.particles.as_slice()[0];
        assert!(p.velocity.x < 0.0);
        assert!(p.position.x < 795.0);
    }
}
