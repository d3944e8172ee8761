//! Simulation tuning
//!
//! Loaded from JSON on native builds; every field falls back to `consts`.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};

/// Tunable simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === Partition grid ===
    /// Cells along x
    pub partition_width: usize,
    /// Cells along y
    pub partition_height: usize,

    // === Boundary ===
    pub boundary_center: Vec2,
    pub boundary_radius: f32,
    /// Second edge-cell pass runs at radius - cell_width * this
    pub edge_inset_factor: f32,

    // === World ===
    pub gravity: f32,
    pub energy_conservation: f32,
    pub overshot_compensation: f32,
    pub attraction_falloff: f32,
    pub energy_scale: f32,
    pub sub_updates: u32,

    // === Spawner ===
    /// Seconds between spawns while held
    pub spawn_speed: f32,
    pub particle_min_size: u32,
    pub particle_max_size: u32,
    pub spawn_jitter: u32,

    // === Session ===
    pub draw_scale: f32,
    pub max_frame_dt: f32,
    /// Seed for the world RNG (degenerate normals, spawn radii)
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            partition_width: PARTITION_WIDTH,
            partition_height: PARTITION_HEIGHT,

            boundary_center: Vec2::new(BOUNDARY_CENTER_X, BOUNDARY_CENTER_Y),
            boundary_radius: BOUNDARY_RADIUS,
            edge_inset_factor: EDGE_INSET_FACTOR,

            gravity: GRAVITY,
            energy_conservation: ENERGY_CONSERVATION,
            overshot_compensation: OVERSHOT_COMPENSATION,
            attraction_falloff: ATTRACTION_FALLOFF,
            energy_scale: ENERGY_SCALE,
            sub_updates: SUB_UPDATES,

            spawn_speed: SPAWN_SPEED,
            particle_min_size: PARTICLE_MIN_SIZE,
            particle_max_size: PARTICLE_MAX_SIZE,
            spawn_jitter: SPAWN_JITTER,

            draw_scale: DRAW_SCALE,
            max_frame_dt: MAX_FRAME_DT,
            seed: 0,
        }
    }
}

impl SimConfig {
    /// Parse a JSON document; missing fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Size of one partition cell in world units
    pub fn cell_size(&self) -> Vec2 {
        Vec2::new(
            self.boundary_radius * 2.0 / self.partition_width as f32,
            self.boundary_radius * 2.0 / self.partition_height as f32,
        )
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        fn positive(name: &str, value: f32) -> Result<()> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(Error::InvalidConfig(format!("{name} must be finite and > 0")))
            }
        }

        if self.partition_width < 3 || self.partition_height < 3 {
            return Err(Error::InvalidConfig(
                "partition grid must be at least 3x3".into(),
            ));
        }
        if !self.boundary_center.is_finite() {
            return Err(Error::InvalidConfig("boundary_center must be finite".into()));
        }
        positive("boundary_radius", self.boundary_radius)?;
        positive("attraction_falloff", self.attraction_falloff)?;
        positive("energy_scale", self.energy_scale)?;
        positive("spawn_speed", self.spawn_speed)?;
        positive("max_frame_dt", self.max_frame_dt)?;
        for (name, value) in [
            ("gravity", self.gravity),
            ("energy_conservation", self.energy_conservation),
            ("overshot_compensation", self.overshot_compensation),
            ("edge_inset_factor", self.edge_inset_factor),
            ("draw_scale", self.draw_scale),
        ] {
            if !value.is_finite() {
                return Err(Error::InvalidConfig(format!("{name} must be finite")));
            }
        }
        if self.sub_updates == 0 {
            return Err(Error::InvalidConfig("sub_updates must be >= 1".into()));
        }
        if self.particle_min_size == 0 {
            return Err(Error::InvalidConfig("particle_min_size must be >= 1".into()));
        }
        if self.particle_min_size > self.particle_max_size {
            return Err(Error::InvalidConfig(
                "particle_min_size must not exceed particle_max_size".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SimConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.cell_size(), Vec2::new(25.0, 25.0));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = SimConfig::from_json_str(r#"{ "gravity": 250.0, "sub_updates": 8 }"#)
            .expect("valid config");
        assert_eq!(config.gravity, 250.0);
        assert_eq!(config.sub_updates, 8);
        assert_eq!(config.boundary_radius, BOUNDARY_RADIUS);
    }

    #[test]
    fn rejects_tiny_grid() {
        let config = SimConfig {
            partition_width: 2,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn rejects_inverted_size_range() {
        let err = SimConfig::from_json_str(r#"{ "particle_min_size": 12, "particle_max_size": 4 }"#)
            .unwrap_err();
        assert!(err.to_string().contains("particle_min_size"));
    }

    #[test]
    fn rejects_zero_sub_updates() {
        let config = SimConfig {
            sub_updates: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = SimConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
