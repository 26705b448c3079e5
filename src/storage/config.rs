//! JSON configuration file.
//!
//! Stores settings in `config.json` in the working directory by default.
//!
//! Loading never fails: a missing file is replaced by defaults (and written
//! back), an unreadable or malformed file falls back to defaults. The origin
//! of the returned configuration is reported so the fallback stays visible.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::model::constants::CONFIG_FILE_NAME;
use crate::model::Configuration;

/// Where a loaded configuration came from.
#[derive(Debug)]
pub enum ConfigOrigin {
    /// Parsed from the existing file.
    File,
    /// File did not exist; defaults were returned and written.
    CreatedDefault,
    /// File could not be read or parsed; defaults were returned.
    Fallback(ConfigError),
}

/// Result of [`ConfigStore::load`].
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: Configuration,
    pub origin: ConfigOrigin,
}

/// Reads and writes the configuration file.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store backed by `config.json` in the working directory.
    pub fn in_working_dir() -> Self {
        Self::new(CONFIG_FILE_NAME)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the configuration, substituting defaults on any failure.
    pub fn load(&self) -> LoadedConfig {
        if !self.path.exists() {
            let config = Configuration::default();
            if let Err(e) = self.save(&config) {
                tracing::warn!("Could not write default configuration: {}", e);
            } else {
                tracing::info!("Created default configuration at {}", self.path.display());
            }
            return LoadedConfig {
                config,
                origin: ConfigOrigin::CreatedDefault,
            };
        }

        match self.try_load() {
            Ok(config) => LoadedConfig {
                config,
                origin: ConfigOrigin::File,
            },
            Err(e) => {
                tracing::warn!("Using default configuration: {}", e);
                LoadedConfig {
                    config: Configuration::default(),
                    origin: ConfigOrigin::Fallback(e),
                }
            }
        }
    }

    /// Load the configuration, reporting any failure.
    pub fn try_load(&self) -> Result<Configuration, ConfigError> {
        let contents = fs::read_to_string(&self.path).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })?;
        let mut config: Configuration =
            serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: self.path.clone(),
                source,
            })?;
        config.validate();
        Ok(config)
    }

    /// Write the configuration as indented JSON.
    pub fn save(&self, config: &Configuration) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(config).map_err(ConfigError::Serialize)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(&self.path, json).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn working_dir_store_uses_config_json() {
        let store = ConfigStore::in_working_dir();
        assert_eq!(store.path(), Path::new("config.json"));
    }

    #[test]
    fn saved_file_is_indented() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join("config.json"));
        store.save(&Configuration::default()).unwrap();

        let text = fs::read_to_string(store.path()).unwrap();
        assert!(text.contains("\n  \"iconPaths\""));
    }

    #[test]
    fn save_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join("nested").join("config.json"));
        store.save(&Configuration::default()).unwrap();
        assert!(store.path().exists());
    }
}
