//! Error types shared by storage, import, settings and review sessions.

use thiserror::Error;

/// Failures of the deck store.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Database connection lock poisoned: {0}")]
    Lock(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Corrupt stored value in {table}.{column}: {value}")]
    Corrupt {
        table: &'static str,
        column: &'static str,
        value: i64,
    },
}

/// Failures while turning text or JSON into decks.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Please paste some content first")]
    Empty,

    #[error("Could not find any valid flashcards in the text")]
    NoValidCards,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A grading request that the current review session cannot accept.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("Card '{0}' is not part of this review session")]
    CardNotInSession(String),

    #[error("Card '{0}' was already graded in this session")]
    AlreadyGraded(String),

    #[error("Card '{0}' is not the card on screen")]
    NotCurrentCard(String),

    #[error("The answer must be shown before grading")]
    AnswerHidden,

    #[error("No card is being reviewed")]
    NoActiveCard,
}

/// Failures of the settings file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read/write settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse settings TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize settings TOML: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid setting: {0}")]
    Invalid(String),
}
