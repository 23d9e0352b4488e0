//! Configuration for the map validator
//!
//! Supports loading configuration from:
//! - Default values
//! - Config file (map-validator.toml)
//! - Environment variables (MAP_VALIDATOR__*)
//! - An explicit file passed with `--config`
//!
//! Only an explicit file can make a run fail; a broken automatic source is
//! logged and ignored.
//!
//! ## Example config file (map-validator.toml):
//! ```toml
//! [output]
//! format = "compact"
//! ```

use config_crate::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Main configuration for the validator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// JSON layout of the printed result
    #[serde(default)]
    pub format: OutputFormat,
}

/// Output format for JSON
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Pretty,
    Compact,
}

impl ValidatorConfig {
    /// Load configuration for one run
    ///
    /// An explicit `config_path` is used on its own and must load cleanly.
    /// Without one, the automatic sources are consulted and any failure
    /// among them falls back to defaults.
    pub fn load_from(config_path: Option<&str>) -> Result<Self, ConfigError> {
        match config_path {
            Some(path) => Config::builder()
                .add_source(File::with_name(path).required(true))
                .build()?
                .try_deserialize(),
            None => Ok(Self::discover().unwrap_or_else(|e| {
                warn!(error = %e, "Ignoring map-validator configuration");
                Self::default()
            })),
        }
    }

    /// Layer the working directory, the user config dir, and the environment
    pub fn discover() -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        for location in ["map-validator.toml", ".map-validator.toml"] {
            builder = builder.add_source(File::with_name(location).required(false));
        }

        if let Some(dirs) = directories::ProjectDirs::from("dev", "familiar", "map-validator") {
            let user_config = dirs.config_dir().join("map-validator.toml");
            if user_config.exists() {
                builder = builder.add_source(File::from(user_config).required(false));
            }
        }

        // MAP_VALIDATOR__OUTPUT__FORMAT=compact
        builder = builder.add_source(
            Environment::with_prefix("MAP_VALIDATOR")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }
}
