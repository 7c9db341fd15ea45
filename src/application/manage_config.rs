//! Config management use case

use crate::error::{Result, TrackerError};
use crate::infrastructure::{Config, ConfigFile};
use std::path::PathBuf;

const VALID_KEYS: &str = "data_dir, app_title";

/// Service for reading and editing `config.toml`
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    pub fn new(path: PathBuf) -> Self {
        ConfigService { path }
    }

    /// Effective value of a key, after environment overrides
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.list()?;

        match key {
            "data_dir" => Ok(config.data_dir.display().to_string()),
            "app_title" => Ok(config.app_title),
            _ => Err(unknown_key(key)),
        }
    }

    /// Persist a value in the config file
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut file = ConfigFile::load(&self.path)?;
        let value = value.trim();
        if value.is_empty() {
            return Err(TrackerError::Config(format!(
                "Value for '{}' cannot be empty",
                key
            )));
        }

        match key {
            "data_dir" => file.data_dir = Some(PathBuf::from(value)),
            "app_title" => file.app_title = Some(value.to_string()),
            _ => return Err(unknown_key(key)),
        }

        file.save(&self.path)
    }

    pub fn list(&self) -> Result<Config> {
        Config::load_from(&self.path)
    }
}

fn unknown_key(key: &str) -> TrackerError {
    TrackerError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key, VALID_KEYS
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_writes_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        let service = ConfigService::new(path.clone());

        service.set("app_title", "Nursery Log").unwrap();
        service.set("data_dir", "/srv/baby").unwrap();

        let file = ConfigFile::load(&path).unwrap();
        assert_eq!(file.app_title.as_deref(), Some("Nursery Log"));
        assert_eq!(file.data_dir, Some(PathBuf::from("/srv/baby")));
    }

    #[test]
    fn test_unknown_key() {
        let temp = TempDir::new().unwrap();
        let service = ConfigService::new(temp.path().join("config.toml"));

        assert!(matches!(service.get("mode"), Err(TrackerError::Config(_))));
        assert!(matches!(
            service.set("mode", "daily"),
            Err(TrackerError::Config(_))
        ));
        assert!(!temp.path().join("config.toml").exists());
    }

    #[test]
    fn test_empty_value_rejected() {
        let temp = TempDir::new().unwrap();
        let service = ConfigService::new(temp.path().join("config.toml"));

        assert!(service.set("app_title", "  ").is_err());
    }
}
