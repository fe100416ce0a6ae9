//! Due-card selection.

use super::{Deck, Flashcard};
use chrono::{DateTime, Utc};

/// A card is due when it was never reviewed, its review time has come,
/// or it has been missed more often than recalled.
pub fn is_due(card: &Flashcard, now: DateTime<Utc>) -> bool {
    card.is_new() || card.next_review.is_some_and(|next| next <= now) || card.is_struggling()
}

/// Cards of `deck` that are due at `now`, in deck order.
pub fn due_cards(deck: &Deck, now: DateTime<Utc>) -> Vec<&Flashcard> {
    deck.cards.iter().filter(|card| is_due(card, now)).collect()
}

pub fn due_count(decks: &[Deck], now: DateTime<Utc>) -> usize {
    decks
        .iter()
        .map(|deck| deck.cards.iter().filter(|card| is_due(card, now)).count())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap()
    }

    fn reviewed(id: &str, next_review: DateTime<Utc>) -> Flashcard {
        let mut card = Flashcard::with_id(id, "q", "a", now() - Duration::days(30));
        card.last_reviewed = Some(now() - Duration::days(3));
        card.next_review = Some(next_review);
        card.review_count = 1;
        card.correct_count = 1;
        card
    }

    fn sample_deck() -> Deck {
        let mut deck = Deck::with_id("d1", "Sample", now() - Duration::days(30));
        deck.add_card(reviewed("later", now() + Duration::days(2)));
        deck.add_card(Flashcard::with_id("new", "q", "a", now()));
        deck.add_card(reviewed("exact", now()));
        deck.add_card(reviewed("overdue", now() - Duration::hours(5)));
        deck
    }

    #[test]
    fn test_due_cards_in_deck_order() {
        let deck = sample_deck();
        let ids: Vec<_> = due_cards(&deck, now()).iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "exact", "overdue"]);
    }

    #[test]
    fn test_struggling_card_is_due_regardless_of_schedule() {
        let mut card = reviewed("hard", now() + Duration::days(40));
        card.correct_count = 1;
        card.incorrect_count = 2;
        assert!(is_due(&card, now()));

        card.incorrect_count = 1;
        assert!(!is_due(&card, now()));
    }

    #[test]
    fn test_due_cards_is_idempotent() {
        let deck = sample_deck();
        let first: Vec<_> = due_cards(&deck, now()).into_iter().cloned().collect();
        let second: Vec<_> = due_cards(&deck, now()).into_iter().cloned().collect();
        assert_eq!(first, second);
        assert_eq!(due_count(std::slice::from_ref(&deck), now()), 3);
    }

    #[test]
    fn test_reviewed_card_without_next_review_is_not_due() {
        let mut card = reviewed("odd", now());
        card.next_review = None;
        assert!(!is_due(&card, now()));
    }
}
