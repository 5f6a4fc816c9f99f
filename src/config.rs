use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::model::FieldBounds;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Application configuration, read from a TOML file.
///
/// ```toml
/// [data]
/// kicks_path = "data/kicks.csv"
/// fixtures_path = "data/fixtures.csv"
///
/// [field]
/// x = [-100.0, 1100.0]
/// y = [0.0, 700.0]
/// game_seconds = [0.0, 4800.0]
/// tackle_number = [0, 6]
/// default_rounds = [1, 30]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data: DataConfig,
    pub field: FieldBounds,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub kicks_path: PathBuf,
    /// May point at a file that does not exist.
    pub fixtures_path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        DataConfig {
            kicks_path: PathBuf::from("data/kicks.csv"),
            fixtures_path: PathBuf::from("data/fixtures.csv"),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Like [`Config::load`], but a missing file gives the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        Self::load(path)
    }
}
