//! Store configuration, read from `config.toml` in the data directory.

use crate::{
    domain::ColumnTitles,
    error::{BoardError, Result},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct StoreConfig {
    /// Directory holding persisted slots, relative to the project root
    pub data_dir: PathBuf,
    /// Slot the board is saved under
    pub storage_key: String,
    /// Titles used when a fresh board is created
    pub column_titles: ColumnTitles,
}

impl StoreConfig {
    pub const CONFIG_FILE: &'static str = "config.toml";
    pub const DEFAULT_DATA_DIR: &'static str = ".taskboard";
    pub const DEFAULT_STORAGE_KEY: &'static str = "kanban-data";

    /// Parses a TOML document; keys left out keep their defaults
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: StoreConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `config.toml` from `dir`, falling back to defaults when the file
    /// does not exist
    pub async fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let path = dir.as_ref().join(Self::CONFIG_FILE);
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path).await?;
        Self::from_toml_str(&contents)
    }

    /// The storage key doubles as a file name, so it is restricted to
    /// ASCII letters, digits, '-' and '_'
    pub fn validate(&self) -> Result<()> {
        if self.storage_key.is_empty() {
            return Err(BoardError::ConfigError(
                "storage-key must not be empty".to_string(),
            ));
        }
        if !self
            .storage_key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(BoardError::ConfigError(format!(
                "storage-key '{}' may only contain letters, digits, '-' and '_'",
                self.storage_key
            )));
        }
        Ok(())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(Self::DEFAULT_DATA_DIR),
            storage_key: Self::DEFAULT_STORAGE_KEY.to_string(),
            column_titles: ColumnTitles::default(),
        }
    }
}
