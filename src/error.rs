//! Error types for babytracker

use crate::domain::Category;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for babytracker
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Cannot create data directory {}: {source}", .path.display())]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to access {category} records: {source}")]
    Storage {
        category: Category,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {category} records: {source}")]
    Parse {
        category: Category,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    /// A command-line value that names no known type, quality or category
    #[error("{0}")]
    InvalidValue(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("No {category} entry with id {id}")]
    NotFound { category: Category, id: u64 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl TrackerError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TrackerError::InvalidEntry(_)
            | TrackerError::InvalidValue(_)
            | TrackerError::InvalidDate(_)
            | TrackerError::InvalidTime(_) => 2,
            TrackerError::NotFound { .. } => 3,
            TrackerError::Storage { .. } | TrackerError::Parse { .. } => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TrackerError::Directory { path, .. } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check the permissions of {}\n\
                    • Point DATA_DIR at a writable directory\n\
                    • Pass --data-dir to use a different location",
                    self,
                    path.display()
                )
            }
            TrackerError::Parse { category, .. } => {
                format!(
                    "{}\n\n\
                    The {} file is not a valid JSON array of entries.\n\
                    Nothing was written; fix or move the file aside and try again.",
                    self,
                    category.file_name()
                )
            }
            TrackerError::InvalidDate(input) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Valid dates:\n\
                    • today, yesterday\n\
                    • monday, tuesday, ..., sunday (most recent)\n\
                    • last monday, last friday, etc.\n\
                    • Specific dates: YYYY-MM-DD (e.g., 2025-06-22)",
                    input
                )
            }
            TrackerError::InvalidTime(input) => {
                format!(
                    "Invalid time: '{}'\n\n\
                    Expected HH:MM or HH:MM:SS in 24-hour format, or 'now'\n\
                    Example: babytracker feed --type bottle --time 14:30",
                    input
                )
            }
            TrackerError::NotFound { category, .. } => {
                format!(
                    "{}\n\n\
                    Use 'babytracker list {}' to see the recorded ids",
                    self, category
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TrackerError
pub type Result<T> = std::result::Result<T, TrackerError>;
