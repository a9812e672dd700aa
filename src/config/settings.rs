//! User settings for DocHunt
//!
//! Manages the year checks run against, the values the form is pre-filled
//! with, and the default log filter.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::paths::DocHuntPaths;
use crate::error::DocHuntError;
use crate::models::{DateKey, WeekdayLabel};
use crate::services::DEFAULT_YEAR;

/// User settings for DocHunt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Year that MMDD keys are resolved against
    #[serde(default = "default_year")]
    pub year: i32,

    /// Pre-filled start date (MMDD)
    #[serde(default = "default_start")]
    pub default_start: String,

    /// Pre-filled end date (MMDD)
    #[serde(default = "default_end")]
    pub default_end: String,

    /// Pre-selected starting weekday
    #[serde(default)]
    pub default_weekday: WeekdayLabel,

    /// Whether weekend-labelled days are excluded by default
    #[serde(default = "default_skip_weekends")]
    pub skip_weekends: bool,

    /// Pre-filled held dates (whitespace separated)
    #[serde(default = "default_held")]
    pub default_held: String,

    /// Log filter used when `DOCHUNT_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_year() -> i32 {
    DEFAULT_YEAR
}

fn default_start() -> String {
    "0818".to_string()
}

fn default_end() -> String {
    "0909".to_string()
}

fn default_skip_weekends() -> bool {
    true
}

fn default_held() -> String {
    "0818 0819 0822".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            year: default_year(),
            default_start: default_start(),
            default_end: default_end(),
            default_weekday: WeekdayLabel::default(),
            skip_weekends: default_skip_weekends(),
            default_held: default_held(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &DocHuntPaths) -> Result<Self, DocHuntError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                DocHuntError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                DocHuntError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &DocHuntPaths) -> Result<(), DocHuntError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            DocHuntError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            DocHuntError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Check that the configured year and default keys are usable
    pub fn validate(&self) -> Result<(), DocHuntError> {
        if NaiveDate::from_ymd_opt(self.year, 1, 1).is_none() {
            return Err(DocHuntError::Config(format!(
                "Year {} is out of range",
                self.year
            )));
        }

        for (field, value) in [
            ("default_start", &self.default_start),
            ("default_end", &self.default_end),
        ] {
            DateKey::parse(value)
                .and_then(|key| key.to_date(self.year))
                .map_err(|e| DocHuntError::Config(format!("{}: {}", field, e)))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.year, 2025);
        assert_eq!(settings.default_start, "0818");
        assert_eq!(settings.default_end, "0909");
        assert_eq!(settings.default_weekday, WeekdayLabel::Mon);
        assert!(settings.skip_weekends);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DocHuntPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.year = 2024;
        settings.default_weekday = WeekdayLabel::Wed;
        settings.skip_weekends = false;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.year, 2024);
        assert_eq!(loaded.default_weekday, WeekdayLabel::Wed);
        assert!(!loaded.skip_weekends);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"year": 2026}"#).unwrap();
        assert_eq!(settings.year, 2026);
        assert_eq!(settings.default_held, "0818 0819 0822");
        assert_eq!(settings.log_level, "warn");
    }

    #[test]
    fn test_invalid_default_key_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DocHuntPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"default_start": "0230"}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, DocHuntError::Config(_)));
    }

    #[test]
    fn test_unparseable_file_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DocHuntPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, DocHuntError::Config(_)));
        assert!(err.to_string().contains("Failed to parse settings file"));
    }

    #[test]
    fn test_default_save_replaces_unparseable_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DocHuntPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        Settings::default().save(&paths).unwrap();
        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.year, Settings::default().year);
    }
}
