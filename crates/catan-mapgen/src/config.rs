//! Generator settings: seed and retry limits.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Retry caps for every rejection-sampling loop, plus an optional seed.
///
/// The defaults are generous; hitting one means the tables cannot satisfy
/// the fairness rules, not that the generator was unlucky.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Fixed seed for reproducible boards; `None` seeds from entropy
    pub seed: Option<u64>,
    /// Terrain attempts before giving up
    pub terrain_restart_limit: usize,
    /// Shuffles tried per token partition
    pub partition_attempt_limit: usize,
    /// Layouts tried per partition before it is discarded
    pub mapping_attempt_limit: usize,
    /// Partitions discarded before giving up
    pub partition_round_limit: usize,
    /// Harbor layouts tried before giving up
    pub harbor_attempt_limit: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            terrain_restart_limit: 10_000,
            partition_attempt_limit: 1_000_000,
            mapping_attempt_limit: 100_000,
            partition_round_limit: 1_000,
            harbor_attempt_limit: 100_000,
        }
    }
}

impl GeneratorConfig {
    /// Default limits with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Load from a JSON file; missing fields keep their defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self, ConfigLoadError> {
        Ok(serde_json::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GeneratorConfig::from_json_str(r#"{ "seed": 9, "harbor_attempt_limit": 5 }"#).unwrap();
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.harbor_attempt_limit, 5);
        assert_eq!(config.mapping_attempt_limit, 100_000);
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let err = GeneratorConfig::from_json_str("{ seed: }").unwrap_err();
        assert!(matches!(err, ConfigLoadError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = GeneratorConfig::from_json_file("/nonexistent/mapgen.json").unwrap_err();
        assert!(matches!(err, ConfigLoadError::Io(_)));
    }

    #[test]
    fn test_seeded() {
        let config = GeneratorConfig::seeded(3);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.terrain_restart_limit, GeneratorConfig::default().terrain_restart_limit);
    }
}
