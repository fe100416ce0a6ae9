//! User settings, stored as TOML.
//!
//! The review core only reads `card_review_limit` and `enable_spaced_repetition`;
//! the rest is for the desktop app.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the settings file location.
pub const SETTINGS_PATH_ENV: &str = "FLASHCARDS_SETTINGS";
pub const DEFAULT_SETTINGS_FILE: &str = "settings.toml";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Maximum number of cards in one daily review.
    #[serde(alias = "cardReviewLimit")]
    pub card_review_limit: u32,
    /// When false, daily review ranks every card instead of only due ones.
    #[serde(alias = "enableSpacedRepetition")]
    pub enable_spaced_repetition: bool,
    /// Show elapsed seconds while a question is on screen.
    #[serde(alias = "showAnswerTimer")]
    pub show_answer_timer: bool,
    #[serde(alias = "darkMode")]
    pub dark_mode: bool,
    pub database_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            card_review_limit: 20,
            enable_spaced_repetition: true,
            show_answer_timer: false,
            dark_mode: false,
            database_path: PathBuf::from("db.sqlite3"),
        }
    }
}

impl Settings {
    pub fn settings_path() -> PathBuf {
        std::env::var_os(SETTINGS_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE))
    }

    /// Reads settings from `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::info!("No settings file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        self.validate()?;
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.card_review_limit == 0 {
            return Err(ConfigError::Invalid(
                "card_review_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("settings.toml")).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.card_review_limit, 20);
        assert!(settings.enable_spaced_repetition);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "card_review_limit = 35\nenable_spaced_repetition = false\n").unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.card_review_limit, 35);
        assert!(!settings.enable_spaced_repetition);
        assert_eq!(settings.database_path, PathBuf::from("db.sqlite3"));
    }

    #[test]
    fn test_zero_limit_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "card_review_limit = 0\n").unwrap();

        assert!(matches!(Settings::load(&path), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        let settings = Settings {
            show_answer_timer: true,
            card_review_limit: 5,
            ..Default::default()
        };

        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path).unwrap(), settings);
    }

    #[test]
    fn test_garbage_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "card_review_limit = \"many\"").unwrap();

        assert!(matches!(Settings::load(&path), Err(ConfigError::Parse(_))));
    }
}
