/// Configuration for the availability server
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// 4-digit admin PIN. This gates the admin panel UX only; it is not a
    /// security boundary and is trivially bypassable by anyone who can read
    /// this config or replay the header.
    #[serde(default = "default_admin_pin")]
    pub admin_pin: String,

    /// Path of the SQLite settings database
    #[serde(default = "default_storage_path")]
    pub storage_path: String,
}

fn default_bind_address() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_admin_pin() -> String {
    "4334".to_string()
}

fn default_storage_path() -> String {
    "noisewindow.db".to_string()
}

impl AppConfig {
    /// Loads configuration from a JSON file.
    ///
    /// # Arguments
    /// * `path` - Path to the config file; a missing file yields defaults
    ///
    /// # Returns
    /// * `Ok(AppConfig)` - Loaded (or default) configuration, with the
    ///   `NOISEWINDOW_ADMIN_PIN` environment variable applied on top
    /// * `Err` - If the file exists but can't be read or parsed
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = if path.exists() {
            let content = fs::read_to_string(path)?;
            serde_json::from_str(&content)?
        } else {
            AppConfig::default()
        };

        if let Ok(pin) = std::env::var("NOISEWINDOW_ADMIN_PIN") {
            if !pin.is_empty() {
                config.admin_pin = pin;
            }
        }

        Ok(config)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            bind_address: default_bind_address(),
            admin_pin: default_admin_pin(),
            storage_path: default_storage_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.admin_pin, "4334");
        assert_eq!(config.bind_address, "127.0.0.1:8080");
        assert_eq!(config.storage_path, "noisewindow.db");
    }

    #[test]
    fn test_partial_config_fills_in_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"admin_pin": "9999"}"#).unwrap();
        assert_eq!(config.admin_pin, "9999");
        assert_eq!(config.bind_address, "127.0.0.1:8080");
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = AppConfig::load_from_file(Path::new("does-not-exist.json")).unwrap();
        assert_eq!(config.storage_path, "noisewindow.db");
    }
}
