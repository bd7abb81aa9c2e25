//! Crate configuration.
//!
//! Type-safe configuration loading from environment variables using the
//! `config` crate. Values are read with the `NOTEBOOK_SCRATCH_` prefix, e.g.
//! `NOTEBOOK_SCRATCH_TEMP_ROOT=/var/scratch`.

use config::{Config, Environment};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration for scratch storage.
///
/// The only tunable is where scratch directories live; everything else the
/// bridge does is fixed by contract.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScratchConfig {
    /// Root directory for generated temp directories. Falls back to the
    /// platform temp root when unset.
    #[serde(default)]
    pub temp_root: Option<PathBuf>,
}

impl ScratchConfig {
    /// Load configuration from `NOTEBOOK_SCRATCH_`-prefixed environment
    /// variables.
    pub fn load() -> Result<Self, ConfigError> {
        let cfg = Config::builder()
            .add_source(Environment::with_prefix("NOTEBOOK_SCRATCH"))
            .build()?;
        Ok(cfg.try_deserialize()?)
    }

    /// The temp root scratch directories are created under.
    pub fn effective_temp_root(&self) -> PathBuf {
        self.temp_root.clone().unwrap_or_else(std::env::temp_dir)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(root) = &self.temp_root {
            if !root.is_absolute() {
                return Err(ConfigError::Validation(format!(
                    "temp_root must be absolute, got {}",
                    root.display()
                )));
            }
        }
        Ok(())
    }
}

/// Errors loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the environment source failed.
    #[error(transparent)]
    Load(#[from] config::ConfigError),

    /// Configuration loaded but failed validation.
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_platform_temp_root() {
        let cfg = ScratchConfig::default();
        assert_eq!(cfg.effective_temp_root(), std::env::temp_dir());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn explicit_temp_root_is_used() {
        let cfg = ScratchConfig {
            temp_root: Some(PathBuf::from("/var/scratch")),
        };
        assert_eq!(cfg.effective_temp_root(), PathBuf::from("/var/scratch"));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn relative_temp_root_fails_validation() {
        let cfg = ScratchConfig {
            temp_root: Some(PathBuf::from("relative/scratch")),
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("must be absolute"));
    }
}
