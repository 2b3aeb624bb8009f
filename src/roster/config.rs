use crate::error::{Result, RosterError};
use crate::i18n::Language;
use crate::listing::{ViewMode, DEFAULT_PAGE_SIZE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for roster, stored next to the data in config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterConfig {
    /// Interface language ("tr" or "en")
    #[serde(default)]
    pub language: Language,

    /// Rows per list page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Table or card layout for the list
    #[serde(default)]
    pub view_mode: ViewMode,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            page_size: DEFAULT_PAGE_SIZE,
            view_mode: ViewMode::default(),
        }
    }
}

impl RosterConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RosterError::Io)?;
        let config: RosterConfig =
            serde_json::from_str(&content).map_err(RosterError::Serialization)?;
        config.validated()
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RosterError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RosterError::Serialization)?;
        fs::write(config_path, content).map_err(RosterError::Io)?;
        Ok(())
    }

    /// Set the language from its code, rejecting unsupported ones
    pub fn set_language(&mut self, code: &str) -> Result<()> {
        self.language = code.parse()?;
        Ok(())
    }

    fn validated(self) -> Result<Self> {
        if self.page_size == 0 {
            return Err(RosterError::Api("page_size must be at least 1".to_string()));
        }
        Ok(self)
    }
}
