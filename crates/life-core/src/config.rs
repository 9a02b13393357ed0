//! Configuration types for a simulation run.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// World configuration parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Width of the world grid
    pub width: u32,
    /// Height of the world grid
    pub height: u32,
    /// Wrap neighbours around the edges
    pub toroidal: bool,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            toroidal: false,
        }
    }
}

/// Random soup parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Random seed for reproducibility
    pub seed: u64,
    /// Probability of a cell starting alive (0.0 to 1.0)
    pub density: f32,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            density: 0.25,
        }
    }
}

/// Full run configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Number of generations to advance
    pub generations: u64,
    /// Log progress every N generations (0 disables progress logging)
    pub report_interval: u64,
    /// Named pattern to place at the centre of the world
    pub pattern: Option<String>,
    /// Grid file to load as the initial state
    pub input: Option<PathBuf>,
    /// Grid file to write the final state to
    pub output: Option<PathBuf>,
    pub world: WorldConfig,
    pub seed: SeedConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            generations: 100,
            report_interval: 10,
            pattern: None,
            input: None,
            output: None,
            world: WorldConfig::default(),
            seed: SeedConfig::default(),
        }
    }
}

impl RunConfig {
    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading run configuration");
        let contents = std::fs::read_to_string(path)?;
        let config: RunConfig = serde_json::from_str(&contents)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.seed.density) {
            return Err(Error::InvalidConfig(format!(
                "density must be within [0, 1], got {}",
                self.seed.density
            )));
        }

        // An input file brings its own dimensions
        if self.world.toroidal
            && self.input.is_none()
            && (self.world.width == 0 || self.world.height == 0)
        {
            return Err(Error::InvalidConfig(format!(
                "toroidal world needs non-zero dimensions, got {}x{}",
                self.world.width, self.world.height
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configs() {
        let world_config = WorldConfig::default();
        assert_eq!(world_config.width, 64);
        assert_eq!(world_config.height, 64);
        assert!(!world_config.toroidal);

        let run_config = RunConfig::default();
        assert_eq!(run_config.generations, 100);
        assert!(run_config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{ "generations": 5, "world": { "toroidal": true } }"#;
        let config: RunConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.generations, 5);
        assert!(config.world.toroidal);
        assert_eq!(config.world.width, 64);
        assert_eq!(config.seed, SeedConfig::default());
    }

    #[test]
    fn test_validate_rejects_bad_density() {
        let mut config = RunConfig::default();
        config.seed.density = 1.5;
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_rejects_empty_torus() {
        let mut config = RunConfig::default();
        config.world.toroidal = true;
        config.world.width = 0;
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        config.input = Some(PathBuf::from("start.gol"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_file() {
        let path = std::env::temp_dir().join(format!("life-core-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "pattern": "glider", "seed": { "seed": 7 } }"#).unwrap();

        let config = RunConfig::from_json_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.pattern.as_deref(), Some("glider"));
        assert_eq!(config.seed.seed, 7);
        assert_eq!(config.seed.density, 0.25);
    }

    #[test]
    fn test_from_json_file_missing() {
        let result = RunConfig::from_json_file("/nonexistent/life-config.json");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
