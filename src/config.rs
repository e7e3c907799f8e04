//! Explorer configuration.
//! Read from `fifa_explorer.json` in the working directory when present.

use crate::data::{LoadOptions, SampleOptions};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE: &str = "fifa_explorer.json";
pub const DEFAULT_DATA_PATH: &str = "male_players (legacy).csv";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Whether the whole CSV is loaded or a trimmed sample of it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadVariant {
    #[default]
    Full,
    Sampled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    pub data_path: PathBuf,
    pub variant: LoadVariant,
    /// Sampled variant only.
    pub sample_size: usize,
    pub seed: u64,
    pub drop_columns: Vec<String>,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            variant: LoadVariant::Full,
            sample_size: 20_000,
            seed: 42,
            drop_columns: [
                "player_url",
                "fifa_update_date",
                "player_tags",
                "player_traits",
                "real_face",
            ]
            .iter()
            .map(|c| c.to_string())
            .collect(),
        }
    }
}

impl ExplorerConfig {
    /// Load `path`, or defaults if it does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Loader options for the configured variant.
    pub fn load_options(&self) -> LoadOptions {
        match self.variant {
            LoadVariant::Full => LoadOptions::default(),
            LoadVariant::Sampled => LoadOptions {
                drop_columns: self.drop_columns.clone(),
                sample: Some(SampleOptions {
                    size: self.sample_size,
                    seed: self.seed,
                }),
            },
        }
    }
}
