use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SejourError};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PAGE_SIZE: usize = 8;
const DEFAULT_FAVORITES_FILE: &str = "favorites.json";

/// Configuration for the browsing views, stored as `config.json` in the
/// app data directory. Unknown or missing fields fall back to defaults so
/// old config files keep loading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BrowseConfig {
    /// Cards per catalog page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// File name of the favorites store inside the data directory.
    #[serde(default = "default_favorites_file")]
    pub favorites_file: String,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_favorites_file() -> String {
    DEFAULT_FAVORITES_FILE.to_string()
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            favorites_file: DEFAULT_FAVORITES_FILE.to_string(),
        }
    }
}

impl BrowseConfig {
    /// Load config from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(SejourError::Io)?;
        let config: BrowseConfig =
            serde_json::from_str(&content).map_err(SejourError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(SejourError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(SejourError::Serialization)?;
        fs::write(config_path, content).map_err(SejourError::Io)?;
        Ok(())
    }
}
