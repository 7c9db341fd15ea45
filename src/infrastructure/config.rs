//! Configuration management
//!
//! Resolution order, later wins: built-in defaults, `config.toml`, the
//! `DATA_DIR` / `APP_TITLE` environment variables. The CLI `--data-dir` flag
//! is applied on top by the binary.

use crate::error::{Result, TrackerError};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Directory under the user's home used when nothing else is configured
pub const DEFAULT_DATA_DIR: &str = ".babytracker";
pub const DEFAULT_APP_TITLE: &str = "Baby Tracker";

/// Overrides the location of `config.toml`
pub const CONFIG_PATH_ENV: &str = "BABYTRACKER_CONFIG";
pub const DATA_DIR_ENV: &str = "DATA_DIR";
pub const APP_TITLE_ENV: &str = "APP_TITLE";

/// Keys persisted in `config.toml`; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_title: Option<String>,
}

impl ConfigFile {
    /// Location of `config.toml`: `$BABYTRACKER_CONFIG`, else the platform config dir
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }

        dirs::config_dir()
            .map(|dir| dir.join("babytracker").join("config.toml"))
            .ok_or_else(|| {
                TrackerError::Config(format!(
                    "Cannot determine the configuration directory; set {}",
                    CONFIG_PATH_ENV
                ))
            })
    }

    /// Load the file at `path`; a missing file is an empty config
    pub fn load(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No config file at {}, using defaults", path.display());
                return Ok(ConfigFile::default());
            }
            Err(e) => return Err(TrackerError::Io(e)),
        };

        let file = toml::from_str(&contents).map_err(|e| {
            TrackerError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        debug!("Loaded config from {}", path.display());
        Ok(file)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }
}

/// Effective configuration after defaults, file and environment are merged
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub app_title: String,
}

impl Config {
    /// Load from the default config path and the process environment
    pub fn load() -> Result<Self> {
        Self::load_from(&ConfigFile::default_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let file = ConfigFile::load(path)?;
        Self::resolve(file, |key| std::env::var(key).ok(), dirs::home_dir())
    }

    /// Merge a config file with environment lookups and a home directory
    pub fn resolve<F>(file: ConfigFile, env: F, home: Option<PathBuf>) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let from_env = |key: &str| env(key).filter(|value| !value.trim().is_empty());

        let data_dir = match from_env(DATA_DIR_ENV).map(PathBuf::from).or(file.data_dir) {
            Some(dir) => dir,
            None => home
                .map(|home| home.join(DEFAULT_DATA_DIR))
                .ok_or_else(missing_home)?,
        };

        let app_title = from_env(APP_TITLE_ENV)
            .or(file.app_title)
            .unwrap_or_else(|| DEFAULT_APP_TITLE.to_string());

        debug!("Resolved data directory {}", data_dir.display());
        Ok(Config {
            data_dir,
            app_title,
        })
    }
}

/// `<home>/.babytracker`, the root used when no directory was configured
pub fn default_data_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(DEFAULT_DATA_DIR))
        .ok_or_else(missing_home)
}

fn missing_home() -> TrackerError {
    TrackerError::Directory {
        path: PathBuf::from("~").join(DEFAULT_DATA_DIR),
        source: io::Error::new(
            io::ErrorKind::NotFound,
            "home directory could not be determined",
        ),
    }
}
