pub mod daily_review;
pub mod deck;
pub mod deck_set;
pub mod due;
pub mod flashcard;
pub mod grade;
pub mod quiz;
pub mod review_session;
pub mod sm2;
pub mod starter;

pub use daily_review::{ReviewItem, build_daily_review, build_full_review};
pub use deck::{Deck, DeckId};
pub use deck_set::DeckSet;
pub use due::{due_cards, is_due};
pub use flashcard::{CardId, Flashcard};
pub use grade::Grade;
pub use quiz::QuizSession;
pub use review_session::{CardResult, ReviewSession, SessionOrigin, SessionSummary};
pub use sm2::{ScheduleUpdate, apply_outcome, compute_update};
pub use starter::starter_decks;
