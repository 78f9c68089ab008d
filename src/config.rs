//! # Configuration Module
//!
//! Simulation parameters for cave generation. A `CaveConfig` is an explicit
//! value owned by whoever drives the engine; nothing here is global.
//!
//! Two default sets exist. [`CaveConfig::default`] is what a freshly started
//! generator uses, while [`CaveConfig::regeneration_defaults`] is what the
//! "New World" action resets to. They differ in `chance_to_start_alive` and
//! `steps`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CaveError, Result};

/// Default map width, in cells.
pub const DEFAULT_WIDTH: usize = 100;
/// Default map height, in cells.
pub const DEFAULT_HEIGHT: usize = 100;

/// Largest value a birth or death limit may take (a cell has 8 neighbors).
pub const MAX_NEIGHBOR_LIMIT: u8 = 8;

/// Largest grid, in cells, a configuration may ask for (4096 x 4096).
pub const MAX_CELLS: usize = 1 << 24;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaveConfig {
    pub width: usize,
    pub height: usize,
    /// Probability that a cell starts out as a wall.
    pub chance_to_start_alive: f64,
    /// A dead cell with more alive neighbors than this becomes alive.
    pub birth_limit: u8,
    /// An alive cell with fewer alive neighbors than this dies.
    pub death_limit: u8,
    /// Smoothing passes applied by `generate`.
    pub steps: usize,
}

impl Default for CaveConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            chance_to_start_alive: 0.45,
            birth_limit: 4,
            death_limit: 3,
            steps: 3,
        }
    }
}

impl CaveConfig {
    /// The parameters restored by a "New World" request. Dimensions are kept.
    pub fn regeneration_defaults(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            chance_to_start_alive: 0.4,
            birth_limit: 4,
            death_limit: 3,
            steps: 2,
        }
    }

    /// Checks every field is within its documented range.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CaveError::InvalidConfig(format!(
                "grid dimensions must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        match self.width.checked_mul(self.height) {
            Some(cells) if cells <= MAX_CELLS => {}
            _ => {
                return Err(CaveError::InvalidConfig(format!(
                    "grid of {}x{} exceeds the {} cell limit",
                    self.width, self.height, MAX_CELLS
                )))
            }
        }
        if !(0.0..=1.0).contains(&self.chance_to_start_alive) {
            return Err(CaveError::InvalidConfig(format!(
                "chance_to_start_alive must be in [0, 1], got {}",
                self.chance_to_start_alive
            )));
        }
        if self.birth_limit > MAX_NEIGHBOR_LIMIT {
            return Err(CaveError::InvalidConfig(format!(
                "birth_limit must be at most {}, got {}",
                MAX_NEIGHBOR_LIMIT, self.birth_limit
            )));
        }
        if self.death_limit > MAX_NEIGHBOR_LIMIT {
            return Err(CaveError::InvalidConfig(format!(
                "death_limit must be at most {}, got {}",
                MAX_NEIGHBOR_LIMIT, self.death_limit
            )));
        }
        Ok(())
    }

    /// Parses a JSON document. Missing fields take their `Default` value.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: CaveConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a JSON configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_initial_defaults() {
        let config = CaveConfig::default();
        assert_eq!(config.width, 100);
        assert_eq!(config.height, 100);
        assert_approx_eq!(config.chance_to_start_alive, 0.45);
        assert_eq!(config.birth_limit, 4);
        assert_eq!(config.death_limit, 3);
        assert_eq!(config.steps, 3);
    }

    #[test]
    fn test_regeneration_defaults_differ_from_initial() {
        let config = CaveConfig {
            width: 40,
            height: 30,
            birth_limit: 7,
            ..CaveConfig::default()
        };
        let reset = config.regeneration_defaults();
        assert_eq!((reset.width, reset.height), (40, 30));
        assert_approx_eq!(reset.chance_to_start_alive, 0.4);
        assert_eq!(reset.birth_limit, 4);
        assert_eq!(reset.death_limit, 3);
        assert_eq!(reset.steps, 2);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let zero = CaveConfig { width: 0, ..CaveConfig::default() };
        assert!(matches!(zero.validate(), Err(CaveError::InvalidConfig(_))));

        let prob = CaveConfig { chance_to_start_alive: 1.5, ..CaveConfig::default() };
        assert!(prob.validate().is_err());

        let nan = CaveConfig { chance_to_start_alive: f64::NAN, ..CaveConfig::default() };
        assert!(nan.validate().is_err());

        let birth = CaveConfig { birth_limit: 9, ..CaveConfig::default() };
        assert!(birth.validate().is_err());

        let death = CaveConfig { death_limit: 9, ..CaveConfig::default() };
        assert!(death.validate().is_err());

        assert!(CaveConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_oversized_grids() {
        let overflow = CaveConfig::from_json_str(
            r#"{ "width": 18446744073709551615, "height": 2, "steps": 0 }"#,
        );
        assert!(matches!(overflow, Err(CaveError::InvalidConfig(_))));

        let too_many = CaveConfig { width: 4097, height: 4096, ..CaveConfig::default() };
        assert!(too_many.validate().is_err());

        let largest = CaveConfig { width: 4096, height: 4096, ..CaveConfig::default() };
        assert!(largest.validate().is_ok());
    }

    #[test]
    fn test_from_json_fills_missing_fields() {
        let config = CaveConfig::from_json_str(r#"{ "width": 20, "steps": 5 }"#).unwrap();
        assert_eq!(config.width, 20);
        assert_eq!(config.height, DEFAULT_HEIGHT);
        assert_eq!(config.steps, 5);
        assert_approx_eq!(config.chance_to_start_alive, 0.45);
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(
            CaveConfig::from_json_str("not json"),
            Err(CaveError::Json(_))
        ));
        assert!(matches!(
            CaveConfig::from_json_str(r#"{ "death_limit": 12 }"#),
            Err(CaveError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = CaveConfig::load("/nonexistent/cave_gen/config.json");
        assert!(matches!(result, Err(CaveError::Io(_))));
    }
}
