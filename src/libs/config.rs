//! Configuration management for the timer application.
//!
//! Settings are stored as pretty-printed JSON in `config.json` inside the
//! platform data directory (see [`DataStorage`]). The file is optional: when
//! it is absent every command runs against the default local database
//! `timer_db` and collection `timer`.
//!
//! ```rust,no_run
//! use timer::libs::config::Config;
//!
//! let config = Config::read()?;
//! let storage = config.storage();
//! println!("{} / {}", storage.database, storage.collection);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_print, msg_warning};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DEFAULT_DATABASE: &str = "timer_db";
pub const DEFAULT_COLLECTION: &str = "timer";

/// Database name that opens a transient in-memory store.
pub const IN_MEMORY_DATABASE: &str = ":memory:";

/// File extension appended to relative database names.
const DATABASE_EXTENSION: &str = "sqlite";

/// Location of the document collection holding time logs.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StorageConfig {
    /// Database name resolved inside the data directory, an absolute path
    /// to a database file, or `:memory:`.
    pub database: String,
    /// Collection (table) holding the time-log documents.
    pub collection: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            database: DEFAULT_DATABASE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
        }
    }
}

impl StorageConfig {
    /// Resolves the database file to open.
    pub fn database_path(&self) -> io::Result<PathBuf> {
        if self.database == IN_MEMORY_DATABASE {
            return Ok(PathBuf::from(IN_MEMORY_DATABASE));
        }
        let path = Path::new(&self.database);
        if path.is_absolute() {
            return Ok(path.to_path_buf());
        }
        DataStorage::new().get_path(&format!("{}.{}", self.database, DATABASE_EXTENSION))
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageConfig>,
}

impl Config {
    /// Path of the configuration file in the data directory.
    pub fn path() -> Result<PathBuf> {
        Ok(DataStorage::new().get_path(CONFIG_FILE_NAME)?)
    }

    /// Storage settings, falling back to the defaults.
    pub fn storage(&self) -> StorageConfig {
        self.storage.clone().unwrap_or_default()
    }

    pub fn read() -> Result<Config> {
        Self::read_from(&Self::path()?)
    }

    /// Reads the configuration at `path`, or the default one if no file exists.
    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file at `path`. Returns `false` when there
    /// was nothing to remove.
    pub fn delete_at(path: &Path) -> Result<bool> {
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(path)?;
        Ok(true)
    }

    /// Reads the file at `path`, falling back to defaults with a warning
    /// when it exists but cannot be parsed.
    pub fn read_or_warn(path: &Path) -> Self {
        match Self::read_from(path) {
            Ok(config) => config,
            Err(error) => {
                msg_warning!(Message::ConfigUnreadable(error.to_string()));
                Self::default()
            }
        }
    }

    /// Runs the interactive setup wizard, using the current settings as defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read_or_warn(&Self::path()?);
        let default = config.storage();

        msg_print!(Message::ConfigModuleStorage);
        config.storage = Some(StorageConfig {
            database: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptDatabaseName.to_string())
                .default(default.database)
                .interact_text()?,
            collection: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptCollectionName.to_string())
                .default(default.collection)
                .interact_text()?,
        });

        Ok(config)
    }
}
