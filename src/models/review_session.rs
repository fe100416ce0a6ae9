//! One review session: a fixed list of cards and the answers recorded so far.

use super::{CardId, DeckId};
use crate::error::InvariantViolation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Where the session's cards came from. Serialized as the deck id,
/// or `"multiple"` for the cross-deck daily review.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SessionOrigin {
    Deck(DeckId),
    Multiple,
}

const MULTIPLE_DECKS: &str = "multiple";

impl From<String> for SessionOrigin {
    fn from(value: String) -> Self {
        if value == MULTIPLE_DECKS {
            SessionOrigin::Multiple
        } else {
            SessionOrigin::Deck(value)
        }
    }
}

impl From<SessionOrigin> for String {
    fn from(origin: SessionOrigin) -> Self {
        match origin {
            SessionOrigin::Deck(id) => id,
            SessionOrigin::Multiple => MULTIPLE_DECKS.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardResult {
    pub card_id: CardId,
    pub correct: bool,
    pub time_spent_ms: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSession {
    pub id: String,
    pub origin: SessionOrigin,
    card_ids: Vec<CardId>,
    results: Vec<CardResult>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl ReviewSession {
    /// Starts a session over `card_ids`. The list is fixed from here on;
    /// a repeated id is kept only at its first position.
    pub fn new(origin: SessionOrigin, card_ids: Vec<CardId>, now: DateTime<Utc>) -> Self {
        let mut unique: Vec<CardId> = Vec::with_capacity(card_ids.len());
        for id in card_ids {
            if unique.contains(&id) {
                log::warn!("Dropping repeated card id '{}' from review session", id);
            } else {
                unique.push(id);
            }
        }

        Self {
            id: Uuid::new_v4().to_string(),
            origin,
            card_ids: unique,
            results: Vec::new(),
            created_at: now,
            completed_at: None,
        }
    }

    pub fn card_ids(&self) -> &[CardId] {
        &self.card_ids
    }

    pub fn results(&self) -> &[CardResult] {
        &self.results
    }

    pub fn contains(&self, card_id: &str) -> bool {
        self.card_ids.iter().any(|id| id == card_id)
    }

    pub fn is_graded(&self, card_id: &str) -> bool {
        self.results.iter().any(|r| r.card_id == card_id)
    }

    /// First card of the list without a recorded result.
    pub fn next_pending(&self) -> Option<&CardId> {
        self.card_ids.iter().find(|id| !self.is_graded(id))
    }

    /// Rejects ids outside the session and ids that already have a result.
    pub fn check_gradable(&self, card_id: &str) -> Result<(), InvariantViolation> {
        if !self.contains(card_id) {
            return Err(InvariantViolation::CardNotInSession(card_id.to_string()));
        }
        if self.is_graded(card_id) {
            return Err(InvariantViolation::AlreadyGraded(card_id.to_string()));
        }
        Ok(())
    }

    pub fn record_result(&mut self, result: CardResult) -> Result<(), InvariantViolation> {
        self.check_gradable(&result.card_id)?;
        self.results.push(result);
        Ok(())
    }

    pub fn complete(&mut self, now: DateTime<Utc>) {
        if self.completed_at.is_none() {
            self.completed_at = Some(now);
        }
    }

    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    pub fn summary(&self) -> SessionSummary {
        let total_cards = self.results.len();
        let correct_cards = self.results.iter().filter(|r| r.correct).count();
        let accuracy = if total_cards == 0 {
            0.0
        } else {
            correct_cards as f64 / total_cards as f64 * 100.0
        };

        SessionSummary {
            session_id: self.id.clone(),
            total_cards,
            correct_cards,
            accuracy,
        }
    }
}

/// What the learner sees once a session is over.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub session_id: String,
    pub total_cards: usize,
    pub correct_cards: usize,
    pub accuracy: f64,
}

impl SessionSummary {
    pub fn message(&self) -> &'static str {
        if self.accuracy >= 80.0 {
            "Great job! Keep up the good work!"
        } else if self.accuracy >= 60.0 {
            "Good effort! Keep practicing to improve!"
        } else {
            "Don't worry! Practice makes perfect!"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap()
    }

    fn ids(list: &[&str]) -> Vec<CardId> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn answer(card_id: &str, correct: bool) -> CardResult {
        CardResult {
            card_id: card_id.to_string(),
            correct,
            time_spent_ms: 4_000,
        }
    }

    #[test]
    fn test_next_pending_follows_list_order() {
        let mut session = ReviewSession::new(SessionOrigin::Multiple, ids(&["a", "b", "c"]), now());
        assert_eq!(session.next_pending().map(String::as_str), Some("a"));

        session.record_result(answer("a", true)).unwrap();
        assert_eq!(session.next_pending().map(String::as_str), Some("b"));
        assert_eq!(session.results().len(), 1);
    }

    #[test]
    fn test_rejects_double_grading() {
        let mut session = ReviewSession::new(SessionOrigin::Multiple, ids(&["a", "b"]), now());
        session.record_result(answer("a", true)).unwrap();

        let err = session.record_result(answer("a", false)).unwrap_err();
        assert_eq!(err, InvariantViolation::AlreadyGraded("a".to_string()));
        assert_eq!(session.results().len(), 1);
        assert!(session.results()[0].correct);
    }

    #[test]
    fn test_rejects_unknown_card() {
        let mut session = ReviewSession::new(SessionOrigin::Deck("d1".into()), ids(&["a"]), now());
        let err = session.record_result(answer("x", true)).unwrap_err();
        assert_eq!(err, InvariantViolation::CardNotInSession("x".to_string()));
        assert!(session.results().is_empty());
    }

    #[test]
    fn test_repeated_ids_are_collapsed() {
        let session = ReviewSession::new(SessionOrigin::Multiple, ids(&["a", "b", "a"]), now());
        assert_eq!(session.card_ids(), ids(&["a", "b"]).as_slice());
    }

    #[test]
    fn test_summary_of_empty_session_is_zero() {
        let session = ReviewSession::new(SessionOrigin::Multiple, Vec::new(), now());
        let summary = session.summary();
        assert_eq!(summary.total_cards, 0);
        assert_eq!(summary.accuracy, 0.0);
        assert!(!summary.accuracy.is_nan());
    }

    #[test]
    fn test_summary_accuracy() {
        let mut session = ReviewSession::new(SessionOrigin::Multiple, ids(&["a", "b", "c", "d"]), now());
        session.record_result(answer("a", true)).unwrap();
        session.record_result(answer("b", true)).unwrap();
        session.record_result(answer("c", true)).unwrap();
        session.record_result(answer("d", false)).unwrap();

        let summary = session.summary();
        assert_eq!(summary.correct_cards, 3);
        assert_eq!(summary.accuracy, 75.0);
        assert_eq!(summary.message(), "Good effort! Keep practicing to improve!");
    }

    #[test]
    fn test_origin_serializes_multiple_sentinel() {
        assert_eq!(serde_json::to_string(&SessionOrigin::Multiple).unwrap(), "\"multiple\"");
        assert_eq!(serde_json::to_string(&SessionOrigin::Deck("d1".into())).unwrap(), "\"d1\"");
        let parsed: SessionOrigin = serde_json::from_str("\"multiple\"").unwrap();
        assert_eq!(parsed, SessionOrigin::Multiple);
    }
}
