//! Path management for salesdash
//!
//! Provides XDG-compliant path resolution for configuration data.
//!
//! ## Path Resolution Order
//!
//! 1. `SALESDASH_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/salesdash` or `~/.config/salesdash`
//! 3. Windows: `%APPDATA%\salesdash`

use std::path::PathBuf;

use crate::error::SalesError;

/// Manages all paths used by salesdash
#[derive(Debug, Clone)]
pub struct SalesPaths {
    /// Base directory for all salesdash data
    base_dir: PathBuf,
}

impl SalesPaths {
    /// Create a new SalesPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, SalesError> {
        let base_dir = if let Ok(custom) = std::env::var("SALESDASH_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create SalesPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/salesdash/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), SalesError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SalesError::Io(format!("Failed to create base directory: {}", e)))?;
        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, SalesError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .map_err(|_| {
                    SalesError::Config("HOME environment variable not set".to_string())
                })
        })?;

    Ok(config_base.join("salesdash"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, SalesError> {
    let appdata = std::env::var("APPDATA")
        .map(PathBuf::from)
        .map_err(|_| SalesError::Config("APPDATA environment variable not set".to_string()))?;

    Ok(appdata.join("salesdash"))
}
