// Configuration module
// Author: kelexine (https://github.com/kelexine)

mod models;

pub use models::*;

use crate::error::{NodeError, Result};
use config::{Config, Environment, File};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Where `AppConfig::load_from` looks for its layers.
///
/// `Default` reads the real home directory and process environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigSources {
    /// Directory holding `.vision-node/config.toml`. `None` uses the user's home.
    pub home_dir: Option<PathBuf>,

    /// Extra file layered over the home file; must exist when set.
    pub explicit_file: Option<PathBuf>,

    /// Environment snapshot. `None` reads the process environment.
    pub env: Option<HashMap<String, String>>,
}

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (highest, prefix `VISION_NODE`, `__` separator)
    /// 2. Explicit config file, if given
    /// 3. `~/.vision-node/config.toml`, if present
    /// 4. Defaults (lowest)
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::load_from(ConfigSources {
            explicit_file: explicit.map(Path::to_path_buf),
            ..ConfigSources::default()
        })
    }

    pub fn load_from(sources: ConfigSources) -> Result<Self> {
        let home_dir = sources
            .home_dir
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        let mut builder = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(File::from(Self::config_path_in(&home_dir)).required(false));

        if let Some(path) = sources.explicit_file {
            builder = builder.add_source(File::from(path).required(true));
        }

        let config = builder
            .add_source(
                Environment::with_prefix("VISION_NODE")
                    .prefix_separator("_")
                    .separator("__")
                    .source(sources.env),
            )
            .build()
            .map_err(|e| NodeError::Configuration(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| NodeError::Configuration(e.to_string()))
    }

    fn config_path_in(home_dir: &Path) -> PathBuf {
        home_dir.join(".vision-node").join("config.toml")
    }
}
