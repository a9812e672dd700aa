//! Path management for DocHunt
//!
//! ## Path Resolution Order
//!
//! 1. `DOCHUNT_DATA_DIR` environment variable (if set)
//! 2. The platform config directory reported by `directories`
//!    (`~/.config/dochunt` on Linux, `%APPDATA%\dochunt\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::DocHuntError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "DOCHUNT_DATA_DIR";

/// Manages all paths used by DocHunt
#[derive(Debug, Clone)]
pub struct DocHuntPaths {
    /// Base directory for all DocHunt files
    base_dir: PathBuf,
}

impl DocHuntPaths {
    /// Create a new DocHuntPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, DocHuntError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create DocHuntPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the log file used while the form is on screen
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("dochunt.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), DocHuntError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| DocHuntError::Io(format!("Failed to create base directory: {}", e)))?;
        Ok(())
    }

    /// Check if settings have been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, DocHuntError> {
    ProjectDirs::from("", "", "dochunt")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| DocHuntError::Config("Could not determine a home directory".into()))
}
