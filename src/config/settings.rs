//! Application settings loaded from `config.toml`.
//!
//! The file is optional: without it the crate runs on defaults. Environment
//! variables (usually from `.env`) override the file:
//!
//! * `FOLIO_CONFIG` - path of the TOML file (default `config.toml`)
//! * `FOLIO_DATA_DIR` - directory holding the collection snapshots

use super::orders::DomainOrders;
use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Environment variable naming the config file
pub const CONFIG_PATH_VAR: &str = "FOLIO_CONFIG";
/// Environment variable overriding `data_dir`
pub const DATA_DIR_VAR: &str = "FOLIO_DATA_DIR";
/// Config file used when nothing else is specified
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Parsed `config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory containing `<collection>.json` snapshots
    pub data_dir: PathBuf,
    /// Domain ordering arrays
    pub orders: DomainOrders,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            orders: DomainOrders::default(),
        }
    }
}

/// Loads settings from a TOML file.
///
/// # Errors
/// Returns [`Error::Config`] if the file cannot be read or is not valid TOML.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;

    parse_config(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {}: {e}", path_ref.display()),
    })
}

/// Parses settings from TOML text.
pub fn parse_config(contents: &str) -> std::result::Result<AppConfig, toml::de::Error> {
    toml::from_str(contents)
}

/// Resolves the effective configuration.
///
/// `explicit_path` (a CLI flag) wins over `FOLIO_CONFIG`, which wins over
/// `config.toml`. A missing file falls back to defaults; an unreadable or
/// malformed one is an error. `FOLIO_DATA_DIR` is applied last.
pub fn load_app_configuration(explicit_path: Option<&Path>) -> Result<AppConfig> {
    let path = explicit_path.map_or_else(
        || {
            std::env::var(CONFIG_PATH_VAR)
                .map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from)
        },
        Path::to_path_buf,
    );

    let mut config = if path.exists() {
        let config = load_config(&path)?;
        info!("Loaded configuration from {}", path.display());
        config
    } else if explicit_path.is_some() {
        return Err(Error::Config {
            message: format!("Config file {} does not exist", path.display()),
        });
    } else {
        warn!(
            "No configuration file at {}, using defaults",
            path.display()
        );
        AppConfig::default()
    };

    if let Ok(data_dir) = std::env::var(DATA_DIR_VAR) {
        debug!("{DATA_DIR_VAR} overrides data_dir with {data_dir}");
        config.data_dir = PathBuf::from(data_dir);
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
            data_dir = "/var/lib/folio"

            [orders]
            application_status = ["Applied", "Interview", "Offer"]
        "#;

        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/folio"));
        assert_eq!(
            config.orders.application_status,
            ["Applied", "Interview", "Offer"]
        );
        assert_eq!(config.orders.todo_priority, ["High", "Medium", "Low"]);
    }

    #[test]
    fn test_empty_config_is_default() {
        let config = parse_config("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_malformed_config_is_config_error() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "data_dir = [1, 2").unwrap();

        let result = load_config(&path);
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_load_config_from_file() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[orders]\ntodo_priority = [\"Urgent\", \"Later\"]\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.orders.todo_priority, ["Urgent", "Later"]);
        assert_eq!(config.data_dir, PathBuf::from("data"));
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("missing.toml");
        let result = load_app_configuration(Some(&path));
        assert!(matches!(result, Err(Error::Config { .. })));
    }
}
