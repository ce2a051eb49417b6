//! Configuration management for the taskboard application.
//!
//! The configuration is a small JSON file stored in the platform data
//! directory next to the database. It currently covers a single concern:
//! which file the SQLite database lives in. `Config::read` tolerates a
//! missing file and falls back to defaults; a file that exists but does not
//! parse is surfaced as an error instead of being silently replaced.

use super::data_storage::DataStorage;
use crate::db::db::DB_FILE_NAME;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Database-related settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// File name of the SQLite database inside the data directory.
    pub file: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseConfig>,
}

impl Config {
    /// Reads the stored configuration, falling back to defaults when no
    /// configuration file exists yet.
    pub fn read() -> Result<Self> {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(&config_path)?;
        serde_json::from_str(&contents).map_err(|_| msg_error_anyhow!(Message::ConfigParseError))
    }

    pub fn save(&self) -> Result<()> {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let file = File::create(config_path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Interactive configuration wizard behind `taskboard init`.
    pub fn init() -> Result<Self> {
        let current = Self::read().unwrap_or_default();

        let file: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDatabaseFile.to_string())
            .default(current.db_file_name())
            .interact_text()?;

        Ok(Self {
            database: Some(DatabaseConfig { file }),
        })
    }

    /// Removes the stored configuration file, if any.
    pub fn delete() -> Result<()> {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_path.exists() {
            fs::remove_file(config_path)?;
        }
        Ok(())
    }

    /// The database file name to open, configured or default.
    pub fn db_file_name(&self) -> String {
        self.database
            .as_ref()
            .map(|database| database.file.clone())
            .unwrap_or_else(|| DB_FILE_NAME.to_string())
    }
}
