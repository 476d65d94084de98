//! Configuration for Gradebook
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::DEFAULT_DATA_FILE;

/// Main configuration for a Gradebook session
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Data file loaded at startup and written on save
    pub data_file: PathBuf,

    // -------------------------------------------------------------------------
    // Session Configuration
    // -------------------------------------------------------------------------
    /// Save the roster back to `data_file` when the session ends
    pub autosave_on_exit: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            autosave_on_exit: true,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data file path
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_file = path.into();
        self
    }

    /// Enable or disable saving on exit
    pub fn autosave_on_exit(mut self, enabled: bool) -> Self {
        self.config.autosave_on_exit = enabled;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
