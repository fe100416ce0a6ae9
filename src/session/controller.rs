//! Daily review controller.
//!
//! Drives one review session from loading the decks to the final summary:
//!
//! ```text
//! Loading --start--> NothingDue
//!         --start--> Question <--flip--> Answer --grade--> Question | Finished
//! ```
//!
//! The list of cards is fixed when the session starts. The next card is always the
//! first card of that list without a recorded result; due status is not recomputed
//! while the session runs.

use super::write_queue::DeckWriteQueue;
use crate::config::Settings;
use crate::database::DeckStore;
use crate::error::{InvariantViolation, StorageError};
use crate::models::daily_review::DEFAULT_MAX_CARDS;
use crate::models::{
    CardId, CardResult, Deck, DeckId, DeckSet, Flashcard, ReviewSession, SessionOrigin,
    SessionSummary, apply_outcome, build_daily_review, build_full_review,
};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;

/// Session parameters, taken from the settings when the controller is built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReviewConfig {
    pub max_cards: usize,
    /// When off, every card is eligible instead of only the due ones.
    pub spaced_repetition: bool,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            max_cards: DEFAULT_MAX_CARDS,
            spaced_repetition: true,
        }
    }
}

impl From<&Settings> for ReviewConfig {
    fn from(settings: &Settings) -> Self {
        Self {
            max_cards: settings.card_review_limit.max(1) as usize,
            spaced_repetition: settings.enable_spaced_repetition,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReviewPhase {
    Loading,
    /// Terminal: no card was eligible, there is no summary.
    NothingDue,
    Question,
    Answer,
    Finished,
}

/// A graded card whose deck could not be written back.
#[derive(Clone, Debug, PartialEq)]
pub struct FailedWrite {
    pub deck_id: DeckId,
    pub card_id: CardId,
    pub error: String,
}

pub struct ReviewController {
    store: Arc<dyn DeckStore>,
    writes: Arc<DeckWriteQueue>,
    config: ReviewConfig,
    decks: DeckSet,
    owners: HashMap<CardId, DeckId>,
    session: Option<ReviewSession>,
    phase: ReviewPhase,
    shown_at: Option<DateTime<Utc>>,
    failed_writes: Vec<FailedWrite>,
    summary: Option<SessionSummary>,
}

impl ReviewController {
    pub fn new(store: Arc<dyn DeckStore>, writes: Arc<DeckWriteQueue>, config: ReviewConfig) -> Self {
        Self {
            store,
            writes,
            config,
            decks: DeckSet::default(),
            owners: HashMap::new(),
            session: None,
            phase: ReviewPhase::Loading,
            shown_at: None,
            failed_writes: Vec::new(),
            summary: None,
        }
    }

    /// Loads all decks and snapshots today's cards into a new session.
    ///
    /// A storage failure leaves the controller in `Loading`, so `start` can simply be
    /// called again. Calling it on a running or finished session does nothing.
    pub async fn start(&mut self, now: DateTime<Utc>) -> Result<ReviewPhase, StorageError> {
        if self.phase != ReviewPhase::Loading {
            return Ok(self.phase);
        }

        let decks = self.store.get_all_decks().await?;

        let items = if self.config.spaced_repetition {
            build_daily_review(&decks, now, self.config.max_cards)
        } else {
            build_full_review(&decks, now, self.config.max_cards)
        };

        if items.is_empty() {
            log::info!("No cards due for review");
            self.phase = ReviewPhase::NothingDue;
            return Ok(self.phase);
        }

        let mut card_ids = Vec::with_capacity(items.len());
        for item in items {
            if let Some(owner) = self.owners.get(&item.card.id) {
                log::warn!(
                    "Card id '{}' appears in decks '{}' and '{}', reviewing only the one from '{}'",
                    item.card.id,
                    owner,
                    item.deck_id,
                    owner
                );
                continue;
            }
            self.owners.insert(item.card.id.clone(), item.deck_id);
            card_ids.push(item.card.id);
        }

        let session = ReviewSession::new(SessionOrigin::Multiple, card_ids, now);
        log::info!(
            "Started review session {} with {} cards from {} decks",
            session.id,
            session.card_ids().len(),
            decks.len()
        );

        self.decks = DeckSet::new(decks);
        self.session = Some(session);
        self.phase = ReviewPhase::Question;
        self.shown_at = Some(now);
        Ok(self.phase)
    }

    pub fn phase(&self) -> ReviewPhase {
        self.phase
    }

    pub fn session(&self) -> Option<&ReviewSession> {
        self.session.as_ref()
    }

    /// Decks as the session sees them, including every committed update.
    pub fn decks(&self) -> &[Deck] {
        &self.decks.decks
    }

    pub fn current_card_id(&self) -> Option<&CardId> {
        match self.phase {
            ReviewPhase::Question | ReviewPhase::Answer => self.session.as_ref()?.next_pending(),
            _ => None,
        }
    }

    pub fn current_card(&self) -> Option<&Flashcard> {
        let card_id = self.current_card_id()?;
        let deck_id = self.owners.get(card_id)?;
        self.decks.get(deck_id)?.card(card_id)
    }

    /// When the current card was first shown.
    pub fn shown_at(&self) -> Option<DateTime<Utc>> {
        self.shown_at
    }

    /// `(answered, total)` for progress display.
    pub fn progress(&self) -> (usize, usize) {
        self.session
            .as_ref()
            .map(|s| (s.results().len(), s.card_ids().len()))
            .unwrap_or((0, 0))
    }

    /// Toggles between question and answer. Has no effect on any data.
    pub fn flip(&mut self) {
        self.phase = match self.phase {
            ReviewPhase::Question => ReviewPhase::Answer,
            ReviewPhase::Answer => ReviewPhase::Question,
            other => other,
        };
    }

    /// Grades the card on screen. The time spent is measured from when the card was shown.
    pub async fn grade(
        &mut self,
        correct: bool,
        now: DateTime<Utc>,
    ) -> Result<ReviewPhase, InvariantViolation> {
        let card_id = match self.current_card_id() {
            Some(id) => id.clone(),
            None => return Err(self.reject(InvariantViolation::NoActiveCard)),
        };
        self.grade_card(&card_id, correct, now).await
    }

    /// Grades `card_id`, which must be the card on screen with its answer revealed.
    ///
    /// Rejected requests change nothing. A failed write keeps the previous in-memory
    /// card, still records the answer and is listed in [`Self::failed_writes`].
    pub async fn grade_card(
        &mut self,
        card_id: &str,
        correct: bool,
        now: DateTime<Utc>,
    ) -> Result<ReviewPhase, InvariantViolation> {
        let Some(session) = self.session.as_ref() else {
            return Err(self.reject(InvariantViolation::NoActiveCard));
        };
        if let Err(violation) = session.check_gradable(card_id) {
            return Err(self.reject(violation));
        }
        if self.current_card_id().map(String::as_str) != Some(card_id) {
            return Err(self.reject(InvariantViolation::NotCurrentCard(card_id.to_string())));
        }
        if self.phase != ReviewPhase::Answer {
            return Err(self.reject(InvariantViolation::AnswerHidden));
        }

        let time_spent_ms = self
            .shown_at
            .map(|shown| (now - shown).num_milliseconds().max(0) as u64)
            .unwrap_or(0);

        let deck_id = self.owners.get(card_id).cloned();
        let updated_deck = deck_id.as_deref().and_then(|deck_id| {
            let deck = self.decks.get(deck_id)?;
            let card = deck.card(card_id)?;
            deck.with_reviewed_card(apply_outcome(card, correct, time_spent_ms, now), now)
        });

        match updated_deck {
            Some(deck) => self.persist(deck, card_id).await,
            None => log::warn!("Card '{}' is no longer in its deck, skipping update", card_id),
        }

        if let Some(session) = self.session.as_mut() {
            session.record_result(CardResult {
                card_id: card_id.to_string(),
                correct,
                time_spent_ms,
            })?;
        }

        self.advance(now);
        Ok(self.phase)
    }

    async fn persist(&mut self, deck: Deck, card_id: &str) {
        match self.writes.save(self.store.as_ref(), &deck).await {
            Ok(()) => self.decks.upsert(deck),
            Err(e) => {
                log::warn!(
                    "Failed to save card '{}' in deck '{}': {}",
                    card_id,
                    deck.id,
                    e
                );
                self.failed_writes.push(FailedWrite {
                    deck_id: deck.id,
                    card_id: card_id.to_string(),
                    error: e.to_string(),
                });
            }
        }
    }

    fn advance(&mut self, now: DateTime<Utc>) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        if session.next_pending().is_some() {
            self.phase = ReviewPhase::Question;
            self.shown_at = Some(now);
            return;
        }

        session.complete(now);
        let summary = session.summary();
        log::info!(
            "Finished review session {}: {}/{} correct ({:.1}%)",
            summary.session_id,
            summary.correct_cards,
            summary.total_cards,
            summary.accuracy
        );
        if !self.failed_writes.is_empty() {
            log::warn!(
                "{} card updates in session {} were not saved",
                self.failed_writes.len(),
                summary.session_id
            );
        }

        self.summary = Some(summary);
        self.phase = ReviewPhase::Finished;
        self.shown_at = None;
    }

    fn reject(&self, violation: InvariantViolation) -> InvariantViolation {
        log::warn!("Rejected grading request: {}", violation);
        violation
    }

    /// Available once the session is `Finished`.
    pub fn summary(&self) -> Option<&SessionSummary> {
        self.summary.as_ref()
    }

    /// Card updates that could not be persisted during this session.
    pub fn failed_writes(&self) -> &[FailedWrite] {
        &self.failed_writes
    }
}
