use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const HOME_ENV: &str = "ECOLIFE_HOME";
pub const API_URL_ENV: &str = "ECOLIFE_API_URL";

const CONFIG_FILE: &str = "config.json";
const DEFAULT_API_URL: &str = "http://localhost:8080";
const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api_base_url: String,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Settings {
    /// Backend URL after applying the `ECOLIFE_API_URL` override.
    pub fn effective_api_url(&self) -> String {
        match env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => url,
            _ => self.api_base_url.clone(),
        }
    }
}

/// Directory holding config, progress and session files.
pub fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let home = dirs::home_dir().ok_or(Error::NoHomeDir)?;
    Ok(home.join(".config").join("ecolife"))
}

pub fn config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE)
}

pub fn load_settings(dir: &Path) -> Result<Settings> {
    let path = config_path(dir);
    if !path.exists() {
        debug!("no config at {}, using defaults", path.display());
        return Ok(Settings::default());
    }

    let contents = fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
    serde_json::from_str(&contents).map_err(|e| Error::parse(&path, e))
}

pub fn save_settings(dir: &Path, settings: &Settings) -> Result<()> {
    let path = config_path(dir);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let contents = serde_json::to_string_pretty(settings).map_err(|source| Error::Serialize {
        what: "settings",
        source,
    })?;
    fs::write(&path, contents).map_err(|e| Error::io(&path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings(dir.path()).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.api_base_url, "http://localhost:8080");
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");
        let settings = Settings {
            api_base_url: "https://eco.example".into(),
            log_level: "debug".into(),
        };
        save_settings(&nested, &settings).unwrap();
        assert_eq!(load_settings(&nested).unwrap(), settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(config_path(dir.path()), r#"{"log_level":"info"}"#).unwrap();
        let settings = load_settings(dir.path()).unwrap();
        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.api_base_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(config_path(dir.path()), "{not json").unwrap();
        assert!(matches!(load_settings(dir.path()), Err(Error::Parse { .. })));
    }
}
