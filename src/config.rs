//! User preferences persisted to a `settings.toml` file.
//!
//! ```no_run
//! use coursedeck::config;
//!
//! let mut settings = config::load().unwrap_or_default();
//! settings.view_mode = coursedeck::state::ViewMode::List;
//! config::save(&settings).expect("failed to save settings");
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::query::SortKey;
use crate::state::ViewMode;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "CourseDeck";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("settings file I/O: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings file is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("could not serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Sort applied when the courses page opens.
    pub default_sort: SortKey,
    pub view_mode: ViewMode,
    /// Catalog file loaded at startup instead of the built-in courses.
    pub catalog_path: Option<PathBuf>,
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Load settings from the platform config directory. A missing file yields defaults.
pub fn load() -> Result<Config> {
    if let Some(path) = default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Read settings from `path`. Unparseable content is logged and replaced by defaults.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match parse(&content) {
        Ok(config) => Ok(config),
        Err(e) => {
            log::warn!("Ignoring {}: {e}", path.display());
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

fn parse(content: &str) -> Result<Config> {
    Ok(toml::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_preserves_settings() {
        let config = Config {
            default_sort: SortKey::PriceHigh,
            view_mode: ViewMode::List,
            catalog_path: Some(PathBuf::from("/tmp/catalog.json")),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &path).expect("failed to save config");
        let loaded = load_from_path(&path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn sort_keys_use_their_kebab_names() {
        let config = parse("default_sort = \"price-low\"\nview_mode = \"list\"\n").unwrap();
        assert_eq!(config.default_sort, SortKey::PriceLow);
        assert_eq!(config.view_mode, ViewMode::List);
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn unknown_sort_key_keeps_catalog_order() {
        let config = parse("default_sort = \"newest\"\n").unwrap();
        assert_eq!(config.default_sort, SortKey::Unsorted);
    }

    #[test]
    fn invalid_toml_falls_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("settings.toml");
        fs::write(&path, "not = valid = toml").expect("failed to write invalid toml");

        assert!(matches!(parse("not = valid = toml"), Err(ConfigError::Parse(_))));
        let loaded = load_from_path(&path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let err = load_from_path(&temp_dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn defaults_are_popular_grid() {
        let config = Config::default();
        assert_eq!(config.default_sort, SortKey::Popular);
        assert_eq!(config.view_mode, ViewMode::Grid);
    }
}
