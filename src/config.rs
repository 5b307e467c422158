//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/avltree/avltree.toml`
//! 3. Explicit config file (`--config`)
//! 4. Environment variables: `AVLTREE_*` prefix, `__` between sections
//!    (e.g. `AVLTREE_STRESS__COUNT=5000`)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;

/// Size and key range of a random sample.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SampleSettings {
    /// Number of distinct keys to draw
    pub count: usize,
    /// Smallest key (inclusive)
    pub key_min: i64,
    /// Largest key (exclusive)
    pub key_max: i64,
}

/// Unified configuration for avltree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// `demo` command sample
    pub demo: SampleSettings,
    /// `stress` command sample
    pub stress: SampleSettings,
    /// Fixed RNG seed; random when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            demo: SampleSettings {
                count: 10,
                key_min: 1,
                key_max: 100,
            },
            stress: SampleSettings {
                count: 100_000,
                key_min: 1,
                key_max: 1_000_000,
            },
            seed: None,
        }
    }
}

/// Get the XDG config directory for avltree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "avltree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("avltree.toml"))
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// `explicit` must exist if given; the global file is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ApplicationError> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("demo.count", defaults.demo.count as u64)
            .map_err(config_err)?
            .set_default("demo.key_min", defaults.demo.key_min)
            .map_err(config_err)?
            .set_default("demo.key_max", defaults.demo.key_max)
            .map_err(config_err)?
            .set_default("stress.count", defaults.stress.count as u64)
            .map_err(config_err)?
            .set_default("stress.key_min", defaults.stress.key_min)
            .map_err(config_err)?
            .set_default("stress.key_max", defaults.stress.key_max)
            .map_err(config_err)?;

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("load: global config {}", global_path.display());
                builder = builder.add_source(File::from(global_path).required(false));
            }
        }

        if let Some(path) = explicit {
            debug!("load: explicit config {}", path.display());
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("AVLTREE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_err)?;
        let settings: Self = config.try_deserialize().map_err(config_err)?;
        settings.check()?;
        Ok(settings)
    }

    /// Reject empty key ranges.
    fn check(&self) -> Result<(), ApplicationError> {
        for (name, sample) in [("demo", &self.demo), ("stress", &self.stress)] {
            if sample.key_min >= sample.key_max {
                return Err(ApplicationError::Config {
                    message: format!(
                        "{name}: key_min ({}) must be below key_max ({})",
                        sample.key_min, sample.key_max
                    ),
                });
            }
        }
        Ok(())
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_defaults_then_ranges_are_valid() {
        let settings = Settings::default();

        assert!(settings.check().is_ok());
        assert_eq!(settings.stress.count, 100_000);
        assert_eq!(settings.demo.key_max, 100);
    }

    #[test]
    fn given_inverted_range_then_check_fails() {
        let mut settings = Settings::default();
        settings.demo.key_min = 50;
        settings.demo.key_max = 10;

        assert!(matches!(
            settings.check(),
            Err(ApplicationError::Config { .. })
        ));
    }

    #[test]
    fn given_settings_when_to_toml_then_sections_are_present() {
        let toml = Settings::default().to_toml().unwrap();

        assert!(toml.contains("[demo]"));
        assert!(toml.contains("[stress]"));
        assert!(!toml.contains("seed"));
    }
}
