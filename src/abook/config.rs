use crate::error::{AbookError, Result};
use crate::store::DEFAULT_PAGE_SIZE;
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "contacts.json";

/// Configuration for abook, stored in `<home>/config.json`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AbookConfig {
    /// Contacts file name, relative to the abook home directory
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Records per page for the `page` command
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for AbookConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            page_size: default_page_size(),
        }
    }
}

impl AbookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: AbookConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(AbookError::Validation(
                "page_size must be at least 1".to_string(),
            ));
        }
        if self.data_file.trim().is_empty() {
            return Err(AbookError::Validation(
                "data_file must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Full path of the contacts file under `home`.
    pub fn data_path(&self, home: &Path) -> PathBuf {
        home.join(&self.data_file)
    }
}

/// The abook home directory: `explicit` when given, otherwise the platform data dir.
pub fn resolve_home(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    ProjectDirs::from("com", "abook", "abook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| AbookError::Store("Could not determine a home directory".to_string()))
}
