//! Daily review selection across decks.
//!
//! Due cards from every deck are scored and the highest scores are reviewed first:
//! - days overdue (fractional)
//! - 10 points per answer the card is "in the red" (incorrect minus correct)
//! - 5 points if never reviewed
//! - up to 7 points for cards created during the last week, decaying linearly
//!
//! Equal scores keep the order the decks and cards were listed in.

use super::sm2::MS_PER_DAY;
use super::{DeckId, Deck, Flashcard, due};
use chrono::{DateTime, Utc};

pub const DEFAULT_MAX_CARDS: usize = 20;

const STRUGGLING_WEIGHT: f64 = 10.0;
const NEVER_REVIEWED_BONUS: f64 = 5.0;
const NEW_CARD_WINDOW_DAYS: f64 = 7.0;

/// A card selected for review together with the deck that owns it.
#[derive(Clone, Debug, PartialEq)]
pub struct ReviewItem {
    pub card: Flashcard,
    pub deck_id: DeckId,
}

fn days_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> f64 {
    (later - earlier).num_milliseconds() as f64 / MS_PER_DAY as f64
}

pub fn priority_score(card: &Flashcard, now: DateTime<Utc>) -> f64 {
    let mut score = 0.0;

    if let Some(next) = card.next_review {
        if next < now {
            score += days_between(next, now);
        }
    }

    if card.is_struggling() {
        score += STRUGGLING_WEIGHT * f64::from(card.incorrect_count - card.correct_count);
    }

    if card.is_new() {
        score += NEVER_REVIEWED_BONUS;
    }

    let age_days = days_between(card.created_at, now);
    if age_days < NEW_CARD_WINDOW_DAYS {
        score += NEW_CARD_WINDOW_DAYS - age_days;
    }

    score
}

fn rank<'a>(
    candidates: impl Iterator<Item = (&'a Flashcard, &'a DeckId)>,
    now: DateTime<Utc>,
    max_cards: usize,
) -> Vec<ReviewItem> {
    let mut scored: Vec<(f64, ReviewItem)> = candidates
        .map(|(card, deck_id)| {
            (
                priority_score(card, now),
                ReviewItem {
                    card: card.clone(),
                    deck_id: deck_id.clone(),
                },
            )
        })
        .collect();

    // sort_by is stable, so ties keep their listing order
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));

    scored
        .into_iter()
        .take(max_cards)
        .map(|(_, item)| item)
        .collect()
}

/// Builds today's review list: due cards from all decks, best first, at most `max_cards`.
/// An empty result means there is nothing to review.
pub fn build_daily_review(decks: &[Deck], now: DateTime<Utc>, max_cards: usize) -> Vec<ReviewItem> {
    let candidates = decks
        .iter()
        .flat_map(|deck| due::due_cards(deck, now).into_iter().map(move |card| (card, &deck.id)));
    rank(candidates, now, max_cards)
}

/// Same ranking as [`build_daily_review`] but over every card, due or not.
/// Used when spaced repetition is switched off in the settings.
pub fn build_full_review(decks: &[Deck], now: DateTime<Utc>, max_cards: usize) -> Vec<ReviewItem> {
    let candidates = decks
        .iter()
        .flat_map(|deck| deck.cards.iter().map(move |card| (card, &deck.id)));
    rank(candidates, now, max_cards)
}
