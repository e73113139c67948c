//! User settings for salesdash
//!
//! Persists preferences as JSON: the default reporting period, leaderboard
//! size, currency symbol, and the RNG seed the demo dataset is generated
//! from. Command-line flags always win over settings; settings win over the
//! built-in defaults.

use serde::{Deserialize, Serialize};

use super::paths::SalesPaths;
use crate::error::SalesError;

/// User settings for salesdash
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Period selector used when no --period flag is given
    #[serde(default = "default_period")]
    pub default_period: String,

    /// Leaderboard size used when no --top flag is given
    #[serde(default = "default_top_n")]
    pub default_top_n: usize,

    /// Currency symbol for display
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Seed for the demo dataset generator
    #[serde(default = "default_seed")]
    pub seed: u64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_period() -> String {
    "past-12-months".to_string()
}

fn default_top_n() -> usize {
    10
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_seed() -> u64 {
    crate::generator::DEFAULT_SEED
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_period: default_period(),
            default_top_n: default_top_n(),
            currency_symbol: default_currency(),
            seed: default_seed(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults when no file exists yet
    pub fn load_or_create(paths: &SalesPaths) -> Result<Self, SalesError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| SalesError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| SalesError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SalesPaths) -> Result<(), SalesError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| SalesError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| SalesError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
