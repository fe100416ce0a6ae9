//! Deck is an ordered set of flashcards
use super::Flashcard;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type DeckId = String;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deck {
    pub id: DeckId,
    pub title: String,
    #[serde(default)]
    pub cards: Vec<Flashcard>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub last_reviewed: Option<DateTime<Utc>>,
}

impl Deck {
    pub fn new(title: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), title, now)
    }

    pub fn with_id(id: impl Into<String>, title: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            cards: Vec::new(),
            created_at: now,
            last_reviewed: None,
        }
    }

    pub fn add_card(&mut self, card: Flashcard) {
        self.cards.push(card);
    }

    pub fn card(&self, card_id: &str) -> Option<&Flashcard> {
        self.cards.iter().find(|c| c.id == card_id)
    }

    pub fn contains(&self, card_id: &str) -> bool {
        self.card(card_id).is_some()
    }

    /// Returns a copy of this deck with `card` swapped in and `last_reviewed` set.
    /// `None` when the deck doesn't own a card with that id.
    pub fn with_reviewed_card(&self, card: Flashcard, reviewed_at: DateTime<Utc>) -> Option<Deck> {
        let pos = self.cards.iter().position(|c| c.id == card.id)?;
        let mut deck = self.clone();
        deck.cards[pos] = card;
        deck.last_reviewed = Some(reviewed_at);
        Some(deck)
    }
}
