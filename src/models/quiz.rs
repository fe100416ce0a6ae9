//! Quiz mode: one pass through a deck with a running score.
//! Answers here don't touch the review schedule.

use super::{Deck, Flashcard};

pub struct QuizSession {
    pub deck_title: String,
    pub cards: Vec<Flashcard>,
    pub current_index: usize,
    pub show_answer: bool,
    pub correct_answers: usize,
}

impl QuizSession {
    pub fn new(deck: &Deck) -> Self {
        Self {
            deck_title: deck.title.clone(),
            cards: deck.cards.clone(),
            current_index: 0,
            show_answer: false,
            correct_answers: 0,
        }
    }

    pub fn current_card(&self) -> Option<&Flashcard> {
        self.cards.get(self.current_index)
    }

    pub fn toggle_answer(&mut self) {
        self.show_answer = !self.show_answer;
    }

    pub fn answer(&mut self, correct: bool) {
        if self.is_completed() {
            return;
        }
        if correct {
            self.correct_answers += 1;
        }
        self.current_index += 1;
        self.show_answer = false;
    }

    pub fn restart(&mut self) {
        self.current_index = 0;
        self.correct_answers = 0;
        self.show_answer = false;
    }

    pub fn total_count(&self) -> usize {
        self.cards.len()
    }

    pub fn is_completed(&self) -> bool {
        self.current_index >= self.cards.len()
    }

    /// Percentage of the deck answered correctly; 0 for an empty deck.
    pub fn score(&self) -> f64 {
        if self.cards.is_empty() {
            0.0
        } else {
            self.correct_answers as f64 / self.cards.len() as f64 * 100.0
        }
    }

    pub fn progress_message(&self) -> String {
        format!(
            "Card {} of {}",
            (self.current_index + 1).min(self.total_count()),
            self.total_count()
        )
    }
}
