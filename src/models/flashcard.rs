//! Flashcard is a question/answer pair plus the state the scheduler keeps for it.
use super::sm2::{INITIAL_EASE_FACTOR, INITIAL_INTERVAL};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type CardId = String;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flashcard {
    pub id: CardId,
    pub question: String,
    pub answer: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub last_reviewed: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub next_review: Option<DateTime<Utc>>,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub correct_count: u32,
    #[serde(default)]
    pub incorrect_count: u32,
    #[serde(default = "default_ease_factor")]
    pub ease_factor: f64,
    #[serde(default = "default_interval")]
    pub interval: u32,
}

fn default_ease_factor() -> f64 {
    INITIAL_EASE_FACTOR
}

fn default_interval() -> u32 {
    INITIAL_INTERVAL
}

impl Flashcard {
    /// Creates a never-reviewed card with a fresh id.
    pub fn new(question: impl Into<String>, answer: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), question, answer, now)
    }

    pub fn with_id(
        id: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            answer: answer.into(),
            created_at: now,
            last_reviewed: None,
            next_review: None,
            review_count: 0,
            correct_count: 0,
            incorrect_count: 0,
            ease_factor: INITIAL_EASE_FACTOR,
            interval: INITIAL_INTERVAL,
        }
    }

    /// Ease factor used for scheduling; zero or garbage values fall back to the initial one.
    pub fn effective_ease_factor(&self) -> f64 {
        if self.ease_factor.is_finite() && self.ease_factor > 0.0 {
            self.ease_factor
        } else {
            INITIAL_EASE_FACTOR
        }
    }

    pub fn effective_interval(&self) -> u32 {
        if self.interval == 0 {
            INITIAL_INTERVAL
        } else {
            self.interval
        }
    }

    pub fn is_new(&self) -> bool {
        self.last_reviewed.is_none()
    }

    /// True when the card has been answered wrong more often than right.
    pub fn is_struggling(&self) -> bool {
        self.incorrect_count > self.correct_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_flashcard_creation() {
        let card = Flashcard::new("hello", "cześć", now());

        assert_eq!(card.question, "hello");
        assert_eq!(card.answer, "cześć");
        assert!(card.is_new());
        assert_eq!(card.ease_factor, 2.5);
        assert_eq!(card.interval, 1);
        assert!(!card.id.is_empty());
    }

    #[test]
    fn test_missing_review_fields_take_defaults() {
        let json = r#"{"id":"math-1","question":"What is 7 x 8?","answer":"56","createdAt":1709283600000}"#;
        let card: Flashcard = serde_json::from_str(json).unwrap();

        assert_eq!(card.id, "math-1");
        assert_eq!(card.created_at, now());
        assert_eq!(card.last_reviewed, None);
        assert_eq!(card.review_count, 0);
        assert_eq!(card.ease_factor, 2.5);
        assert_eq!(card.interval, 1);
    }

    #[test]
    fn test_zero_values_fall_back_to_initial() {
        let mut card = Flashcard::new("q", "a", now());
        card.ease_factor = 0.0;
        card.interval = 0;

        assert_eq!(card.effective_ease_factor(), 2.5);
        assert_eq!(card.effective_interval(), 1);
    }
}
