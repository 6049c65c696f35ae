//! Configuration File Loading
//!
//! Finds and parses the configuration file from an ordered list of
//! locations, falling back to built-in defaults when nothing is found.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use super::Config;
use crate::error::{Error, Result};

/// Configuration file loader
pub struct ConfigLoader {
    /// Search paths for configuration files, highest priority first
    search_paths: Vec<PathBuf>,
}

impl ConfigLoader {
    /// Create a loader with the default search paths
    ///
    /// Order: `$TERMBLOG_CONFIG`, the platform config directory
    /// (`~/.config/termblog/config.toml` on Linux), `~/.termblog.toml`,
    /// then `./termblog.toml`.
    pub fn new() -> Self {
        let mut search_paths = Vec::new();

        if let Some(path) = env::var_os("TERMBLOG_CONFIG") {
            search_paths.push(PathBuf::from(path));
        }
        if let Some(config_dir) = dirs::config_dir() {
            search_paths.push(config_dir.join("termblog").join("config.toml"));
        }
        if let Some(home) = dirs::home_dir() {
            search_paths.push(home.join(".termblog.toml"));
        }
        search_paths.push(PathBuf::from("termblog.toml"));

        Self { search_paths }
    }

    /// Load from the first search path that exists
    pub fn load(&self) -> Result<Config> {
        for path in &self.search_paths {
            if path.is_file() {
                debug!("loading config from {}", path.display());
                return Self::load_from_file(path);
            }
        }
        Err(Error::ConfigNotFound)
    }

    /// Load from the search paths, falling back to defaults
    pub fn load_or_default(&self) -> Config {
        match self.load() {
            Ok(config) => config,
            Err(Error::ConfigNotFound) => {
                debug!("no config file found, using defaults");
                Config::default()
            }
            Err(err) => {
                warn!("failed to load configuration: {}. Using defaults", err);
                Config::default()
            }
        }
    }

    /// Load a specific configuration file
    pub fn load_from_file(path: &Path) -> Result<Config> {
        let text = fs::read_to_string(path).map_err(|e| Error::ConfigLoadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let config = toml::from_str(&text).map_err(|e| Error::ConfigParseFailed {
            format: "TOML".to_string(),
            reason: e.to_string(),
        })?;
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
