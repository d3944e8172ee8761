//! Pairwise disc collisions
//!
//! Each interior cell gathers its 3×3 neighbourhood into a pool and every
//! ordered pair in the pool is checked. Unordered pairs are visited twice,
//! once per order; the halved separation step depends on it.

use glam::Vec2;
use rand::Rng;

use super::particle::{Particle, ParticleStore};
use super::vector::{distance, dot, magnitude, unit};
use super::world::World;

/// Factors applied when resolving an overlap
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionParams {
    pub energy_conservation: f32,
    pub overshot_compensation: f32,
}

/// Elastic-collision velocity of `p1` after striking `p2`
///
/// v1' = v1 - (x1-x2)·dot(v1-v2, x1-x2)/|x1-x2|² · 2m2/(m1+m2)
pub fn collision_formula(p1: &Particle, p2: &Particle) -> Vec2 {
    let offset = p1.position - p2.position;
    let dist = magnitude(offset);
    p1.velocity
        - offset * dot(p1.velocity - p2.velocity, offset) / (dist * dist)
            * (2.0 * p2.mass / (p1.mass + p2.mass))
}

/// Normal for a coincident pair: random integer direction in [-50, 50]²
fn degenerate_normal<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    loop {
        let x = rng.random_range(-50i32..=50);
        let y = rng.random_range(-50i32..=50);
        if x != 0 || y != 0 {
            return unit(Vec2::new(x as f32, y as f32));
        }
    }
}

/// Separate and bounce two discs if they overlap
///
/// Returns true if they were touching.
pub fn resolve_pair<R: Rng + ?Sized>(
    p1: &mut Particle,
    p2: &mut Particle,
    params: CollisionParams,
    rng: &mut R,
) -> bool {
    let overshoot = p1.radius + p2.radius - distance(p1.position, p2.position);
    if overshoot <= 0.0 {
        return false;
    }

    let norm = if p1.position == p2.position {
        degenerate_normal(rng)
    } else {
        unit(p1.position - p2.position)
    };

    let correction = norm * overshoot / 2.0 * params.overshot_compensation;
    p1.position += correction;
    p2.position -= correction;

    let v1 = collision_formula(p1, p2);
    let v2 = collision_formula(p2, p1);
    p1.velocity = v1 * params.energy_conservation;
    p2.velocity = v2 * params.energy_conservation;
    true
}

/// Check every ordered pair of distinct particles in `pool`
///
/// Returns the number of overlapping visits resolved.
pub fn check_collision_cluster<R: Rng + ?Sized>(
    pool: &[usize],
    particles: &mut ParticleStore,
    params: CollisionParams,
    rng: &mut R,
) -> usize {
    let mut contacts = 0;
    for &i in pool {
        for &j in pool {
            if i == j {
                continue;
            }
            let (p1, p2) = particles.pair_mut(i, j);
            if resolve_pair(p1, p2, params, rng) {
                contacts += 1;
            }
        }
    }
    contacts
}

/// Resolve collisions over every non-empty interior cell of the grid
///
/// The outermost ring of cells is never a pool centre.
pub fn check_collisions(world: &mut World) -> usize {
    let params = CollisionParams {
        energy_conservation: world.config.energy_conservation,
        overshot_compensation: world.config.overshot_compensation,
    };
    let width = world.grid.width();
    let height = world.grid.height();

    let mut pool = std::mem::take(&mut world.pool);
    let mut contacts = 0;
    for x in 1..width - 1 {
        for y in 1..height - 1 {
            if world.grid.cell(x, y).is_empty() {
                continue;
            }
            pool.clear();
            world.grid.gather_neighborhood(x, y, &mut pool);
            contacts += check_collision_cluster(&pool, &mut world.particles, params, &mut world.rng);
        }
    }
    world.pool = pool;
    contacts
}
