//! Container for all available decks
use super::{Deck, due};
use chrono::{DateTime, Utc};

#[derive(Clone, Default)]
pub struct DeckSet {
    pub decks: Vec<Deck>,
}

impl DeckSet {
    pub fn new(decks: Vec<Deck>) -> Self {
        Self { decks }
    }

    pub fn get(&self, deck_id: &str) -> Option<&Deck> {
        self.decks.iter().find(|d| d.id == deck_id)
    }

    pub fn get_mut(&mut self, deck_id: &str) -> Option<&mut Deck> {
        self.decks.iter_mut().find(|d| d.id == deck_id)
    }

    /// Inserts or replaces by deck id, keeping the position of an existing deck.
    pub fn upsert(&mut self, deck: Deck) {
        match self.get_mut(&deck.id) {
            Some(existing) => *existing = deck,
            None => self.decks.push(deck),
        }
    }

    pub fn remove(&mut self, deck_id: &str) -> Option<Deck> {
        let pos = self.decks.iter().position(|d| d.id == deck_id)?;
        Some(self.decks.remove(pos))
    }

    pub fn due_count(&self, now: DateTime<Utc>) -> usize {
        due::due_count(&self.decks, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_upsert_keeps_position() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        let mut set = DeckSet::new(vec![
            Deck::with_id("a", "A", now),
            Deck::with_id("b", "B", now),
        ]);

        set.upsert(Deck::with_id("a", "A renamed", now));
        set.upsert(Deck::with_id("c", "C", now));

        let titles: Vec<_> = set.decks.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(titles, vec!["A renamed", "B", "C"]);

        assert!(set.remove("b").is_some());
        assert!(set.remove("b").is_none());
        assert_eq!(set.decks.len(), 2);
    }
}
