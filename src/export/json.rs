//! JSON import/export for decks and full backups.
//! A deck file holds one deck with its cards and review state; a backup holds
//! every deck plus the settings.

use crate::config::Settings;
use crate::error::ImportError;
use crate::models::Deck;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Exports a deck to a JSON file at the specified path.
pub fn export_deck_to_path(deck: &Deck, path: &Path) -> std::io::Result<()> {
    let json_string = serde_json::to_string_pretty(deck)?;
    fs::write(path, json_string)?;
    log::info!("Deck '{}' exported to {:?}", deck.title, path);
    Ok(())
}

/// Imports a deck from a JSON file.
/// Fails if the file doesn't exist or doesn't contain a deck.
pub fn import_deck(path: &Path) -> Result<Deck, ImportError> {
    let contents = fs::read_to_string(path)?;
    let deck: Deck = serde_json::from_str(&contents)?;

    log::info!("Deck '{}' imported from {:?}", deck.title, path);
    Ok(deck)
}

/// Everything the app stores, in one document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Backup {
    #[serde(default)]
    pub decks: Vec<Deck>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<Settings>,
}

pub fn export_backup(decks: &[Deck], settings: &Settings) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Backup {
        decks: decks.to_vec(),
        settings: Some(settings.clone()),
    })
}

pub fn import_backup(data: &str) -> Result<Backup, ImportError> {
    let backup: Backup = serde_json::from_str(data)?;
    log::info!("Backup with {} decks read", backup.decks.len());
    Ok(backup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Flashcard;
    use chrono::{TimeZone, Utc};

    fn create_test_deck() -> Deck {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        let mut deck = Deck::with_id("test-deck", "Test Deck", now);
        deck.add_card(Flashcard::with_id("c1", "hello", "cześć", now));
        deck.add_card(Flashcard::with_id("c2", "goodbye", "do widzenia", now));
        deck
    }

    #[test]
    fn test_export_deck_to_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.json");

        export_deck_to_path(&create_test_deck(), &path).unwrap();
        assert!(fs::metadata(&path).is_ok(), "File should exist");
        assert_eq!(import_deck(&path).unwrap(), create_test_deck());
    }

    #[test]
    fn test_import_deck_with_sparse_cards() {
        let json_content = r#"{
  "id": "world-capitals",
  "title": "World Capitals",
  "createdAt": 1709283600000,
  "cards": [
    {
      "id": "capital-1",
      "question": "What is the capital of Japan?",
      "answer": "Tokyo",
      "createdAt": 1709283600000,
      "incorrectCount": 2
    }
  ]
}"#;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("import.json");
        fs::write(&path, json_content).unwrap();

        let deck = import_deck(&path).unwrap();
        assert_eq!(deck.title, "World Capitals");
        assert_eq!(deck.cards.len(), 1);
        assert_eq!(deck.cards[0].answer, "Tokyo");
        assert_eq!(deck.cards[0].incorrect_count, 2);
        assert_eq!(deck.cards[0].ease_factor, 2.5);
    }

    #[test]
    fn test_import_nonexistent_file() {
        let result = import_deck(Path::new("nonexistent_file_xyz123.json"));
        assert!(matches!(result, Err(ImportError::Io(_))));
    }

    #[test]
    fn test_import_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("invalid.json");
        fs::write(&path, "{ this is not valid json }").unwrap();

        assert!(matches!(import_deck(&path), Err(ImportError::Json(_))));
    }

    #[test]
    fn test_backup_keeps_decks_and_settings() {
        let settings = Settings {
            card_review_limit: 7,
            ..Default::default()
        };
        let data = export_backup(&[create_test_deck()], &settings).unwrap();

        let backup = import_backup(&data).unwrap();
        assert_eq!(backup.decks, vec![create_test_deck()]);
        assert_eq!(backup.settings, Some(settings));
    }

    #[test]
    fn test_backup_without_settings() {
        let backup = import_backup(r#"{"decks": []}"#).unwrap();
        assert!(backup.decks.is_empty());
        assert!(backup.settings.is_none());
    }

    #[test]
    fn test_backup_accepts_camel_case_settings() {
        let backup =
            import_backup(r#"{"settings": {"cardReviewLimit": 12, "enableSpacedRepetition": false}}"#)
                .unwrap();
        let settings = backup.settings.unwrap();
        assert_eq!(settings.card_review_limit, 12);
        assert!(!settings.enable_spaced_repetition);
    }
}
