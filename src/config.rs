//! Engine configuration
//!
//! Only the playfield size and RNG seed are configurable; physics tuning is
//! fixed in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::error::EngineError;
use crate::sim::Playfield;

/// Construction parameters for a [`crate::SimulationEngine`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Playfield width in world units
    pub width: f32,
    /// Playfield height in world units
    pub height: f32,
    /// Seed for asteroid generation
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed: 0,
        }
    }
}

impl EngineConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| EngineError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!(
            "Loaded config from {}: {}x{} seed {}",
            path.display(),
            config.width,
            config.height,
            config.seed
        );
        Ok(config)
    }

    /// Validate the dimensions into a playfield
    pub fn playfield(&self) -> Result<Playfield, EngineError> {
        Playfield::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_canvas() {
        let config = EngineConfig::default();
        assert_eq!(config.width, 600.0);
        assert_eq!(config.height, 400.0);
        assert!(config.playfield().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = EngineConfig::from_json(r#"{ "seed": 42 }"#).unwrap();
        assert_eq!(config.seed, 42);
        assert_eq!(config.width, 600.0);
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let err = EngineConfig::from_json("{ width: ").unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }

    #[test]
    fn test_bad_dimensions_rejected() {
        let config = EngineConfig {
            width: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.playfield(),
            Err(EngineError::InvalidPlayfield { .. })
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = EngineConfig::load("/nonexistent/rock-drift.json").unwrap_err();
        assert!(matches!(err, EngineError::Io { .. }));
    }
}
