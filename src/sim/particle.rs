//! Particles and the store that owns them

use std::f32::consts::PI;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::vector::magnitude;

/// A simulated disc
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub radius: f32,
    pub mass: f32,
    pub position: Vec2,
    pub velocity: Vec2,
}

impl Particle {
    pub fn new(radius: f32, mass: f32, position: Vec2, velocity: Vec2) -> Self {
        Self {
            radius,
            mass,
            position,
            velocity,
        }
    }

    /// Particle with uniform areal density: mass = π·r²
    pub fn with_radius(radius: f32, position: Vec2, velocity: Vec2) -> Self {
        Self::new(radius, PI * radius * radius, position, velocity)
    }

    /// m·|v|²/2, in raw simulation units
    #[inline]
    pub fn kinetic_energy(&self) -> f32 {
        let speed = magnitude(self.velocity);
        self.mass * speed * speed / 2.0
    }
}

/// Contiguous arena of particles; the partition grid refers to them by index
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParticleStore {
    particles: Vec<Particle>,
}

impl ParticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a particle, returning its index
    pub fn push(&mut self, particle: Particle) -> usize {
        self.particles.push(particle);
        self.particles.len() - 1
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Particle> {
        self.particles.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    pub fn as_mut_slice(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// Mutable access to two distinct particles at once
    ///
    /// Panics if `a == b` or either index is out of range.
    pub fn pair_mut(&mut self, a: usize, b: usize) -> (&mut Particle, &mut Particle) {
        assert_ne!(a, b, "pair_mut needs two distinct particles");
        if a < b {
            let (lo, hi) = self.particles.split_at_mut(b);
            (&mut lo[a], &mut hi[0])
        } else {
            let (lo, hi) = self.particles.split_at_mut(a);
            (&mut hi[0], &mut lo[b])
        }
    }
}

impl<'a> IntoIterator for &'a ParticleStore {
    type Item = &'a Particle;
    type IntoIter = std::slice::Iter<'a, Particle>;

    fn into_iter(self) -> Self::IntoIter {
        self.particles.iter()
    }
}
