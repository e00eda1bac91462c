// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Engine configuration.
//!
//! Loaded from TOML, for example
//!
//! ```toml
//! prime = 2
//! hensel_levels = 20
//! empirical_levels = 10
//! run_lift = true
//! ```
//!
//! Missing fields take their defaults; command-line flags override fields
//! after loading.

use crate::ring::Prime;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{field} must be at least 1")]
    ZeroLevel { field: &'static str },
}

/// Numeric configuration of the obstruction engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Prime for the congruence check, the lift and the edge-digit check.
    pub prime: Prime,

    /// Highest Hensel level `K_max`.
    pub hensel_levels: u32,

    /// Highest power `p^k` tried by the empirical edge-digit check.
    pub empirical_levels: u32,

    /// Whether each record carries a Hensel lift outcome.
    pub run_lift: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            prime: Prime::TWO,
            hensel_levels: 20,
            empirical_levels: 10,
            run_lift: true,
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hensel_levels == 0 {
            return Err(ConfigError::ZeroLevel { field: "hensel_levels" });
        }
        if self.empirical_levels == 0 {
            return Err(ConfigError::ZeroLevel { field: "empirical_levels" });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.prime, Prime::TWO);
    }

    #[test]
    fn test_partial_override() {
        let config = EngineConfig::from_toml_str("prime = 5\nhensel_levels = 64").unwrap();
        assert_eq!(config.prime.get(), 5);
        assert_eq!(config.hensel_levels, 64);
        assert_eq!(config.empirical_levels, 10);
    }

    #[test]
    fn test_rejects_composite_prime() {
        assert!(matches!(EngineConfig::from_toml_str("prime = 9"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_rejects_unknown_field() {
        assert!(EngineConfig::from_toml_str("kmax = 3").is_err());
    }

    #[test]
    fn test_rejects_zero_levels() {
        let err = EngineConfig::from_toml_str("empirical_levels = 0").unwrap_err();
        assert_eq!(err.to_string(), "empirical_levels must be at least 1");
    }

    #[test]
    fn test_load_missing_file() {
        let err = EngineConfig::load(Path::new("/nonexistent/lychrel.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
