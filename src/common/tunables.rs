//! Tunable gameplay constants.
//!
//! Defaults match the shipped `assets/tunables.ron`. Any field missing from the
//! file keeps its default, so the file only needs the values you change.

use std::fs;
use std::path::Path;

use bevy::prelude::*;
use serde::Deserialize;

use crate::common::arena::Arena;

pub const TUNABLES_PATH: &str = "assets/tunables.ron";

#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Tunables {
    pub arena_width: f32,
    pub arena_height: f32,

    pub ship_width: f32,
    pub ship_height: f32,
    pub ship_speed: f32,
    pub ship_accel: f32,
    pub ship_decel: f32,
    pub ship_health: f32,
    /// Spawn inset from the arena corner.
    pub ship_margin: f32,

    pub bullet_speed: f32,
    pub bullet_width: f32,
    pub bullet_height: f32,
    pub bullet_damage: f32,
    pub bullet_limit: usize,

    pub energy_speed: f32,
    pub energy_radius: f32,
    pub energy_damage: f32,
    pub energy_homing_secs: f32,
    pub energy_homing_strength: f32,
    pub max_energy_shots: usize,

    /// How fast human movement ramps toward the pressed direction (per second).
    pub human_ramp: f32,

    /// Fixed seed for AI dice. `None` seeds from the OS at spawn.
    pub ai_seed: Option<u64>,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            arena_width: 1600.0,
            arena_height: 900.0,

            ship_width: 60.0,
            ship_height: 40.0,
            ship_speed: 500.0,
            ship_accel: 600.0,
            ship_decel: 12_000.0,
            ship_health: 10.0,
            ship_margin: 10.0,

            bullet_speed: 530.0,
            bullet_width: 15.0,
            bullet_height: 5.0,
            bullet_damage: 1.0,
            bullet_limit: 5,

            energy_speed: 300.0,
            energy_radius: 10.0,
            energy_damage: 2.5,
            energy_homing_secs: 4.0,
            energy_homing_strength: 5.0,
            max_energy_shots: 1,

            human_ramp: 6.5,

            ai_seed: None,
        }
    }
}

impl Tunables {
    pub fn arena(&self) -> Arena {
        Arena::new(self.arena_width, self.arena_height)
    }

    #[inline]
    pub fn ship_size(&self) -> Vec2 {
        Vec2::new(self.ship_width, self.ship_height)
    }

    pub fn from_ron_str(src: &str) -> Result<Self, String> {
        ron::de::from_str::<Tunables>(src).map_err(|e| e.to_string())
    }

    /// Read `path`; a missing file is `Ok(None)`.
    pub fn read_file(path: impl AsRef<Path>) -> Result<Option<Self>, String> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(path).map_err(|e| e.to_string())?;
        Self::from_ron_str(&contents).map(Some)
    }

    /// Load overrides from `path`, falling back to defaults on any problem.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::read_file(path) {
            Ok(Some(t)) => {
                info!("Loaded tunables from {}", path.display());
                t
            }
            Ok(None) => Self::default(),
            Err(error) => {
                warn!("Ignoring {}: {}", path.display(), error);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_ron_keeps_defaults_for_missing_fields() {
        let t = Tunables::from_ron_str("(ship_speed: 250.0, ai_seed: Some(7))").unwrap();
        assert_eq!(t.ship_speed, 250.0);
        assert_eq!(t.ai_seed, Some(7));
        assert_eq!(t.bullet_speed, Tunables::default().bullet_speed);
    }

    #[test]
    fn malformed_ron_is_an_error() {
        assert!(Tunables::from_ron_str("(ship_speed: \"fast\")").is_err());
    }

    #[test]
    fn missing_file_reads_as_none() {
        let r = Tunables::read_file("definitely/not/here.ron").unwrap();
        assert!(r.is_none());
    }

    #[test]
    fn shipped_file_matches_defaults() {
        let shipped = Tunables::read_file(TUNABLES_PATH).unwrap().unwrap();
        assert_eq!(shipped, Tunables::default());
    }
}
