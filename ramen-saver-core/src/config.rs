//! Configuration management
//!
//! Settings live in `settings.json` inside the data directory:
//! ```json
//! { "defaultRamenPrice": 800 }
//! ```
//! A missing file, or contents that fail to parse, fall back to defaults;
//! an IO failure while reading an existing file is an error.

use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::DEFAULT_RAMEN_PRICE;

/// Raw settings.json structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default = "default_ramen_price")]
    default_ramen_price: f64,
}

impl Default for SettingsFile {
    fn default() -> Self {
        Self {
            default_ramen_price: DEFAULT_RAMEN_PRICE,
        }
    }
}

fn default_ramen_price() -> f64 {
    DEFAULT_RAMEN_PRICE
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Price used when a profile is auto-initialized before onboarding
    pub default_ramen_price: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_ramen_price: DEFAULT_RAMEN_PRICE,
        }
    }
}

impl Config {
    /// Load config from the data directory
    ///
    /// The default price can be overridden via the environment variable
    /// `RAMEN_SAVER_DEFAULT_PRICE` (for CI/testing).
    pub fn load(data_dir: &Path) -> Result<Self> {
        let settings_path = data_dir.join("settings.json");

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        let default_ramen_price = match std::env::var("RAMEN_SAVER_DEFAULT_PRICE")
            .ok()
            .and_then(|v| v.parse::<f64>().ok())
        {
            Some(price) if price.is_finite() && price >= 0.0 => price,
            _ => raw.default_ramen_price,
        };

        Ok(Self {
            default_ramen_price,
        })
    }

    /// Save config to the data directory
    pub fn save(&self, data_dir: &Path) -> Result<()> {
        let settings_path = data_dir.join("settings.json");
        let settings = SettingsFile {
            default_ramen_price: self.default_ramen_price,
        };
        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_settings_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.default_ramen_price, DEFAULT_RAMEN_PRICE);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            default_ramen_price: 950.0,
        };
        config.save(dir.path()).unwrap();

        let reloaded = Config::load(dir.path()).unwrap();
        assert_eq!(reloaded.default_ramen_price, 950.0);
    }

    #[test]
    fn test_corrupt_settings_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("settings.json"), "not json at all").unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.default_ramen_price, DEFAULT_RAMEN_PRICE);
    }
}
