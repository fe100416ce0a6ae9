pub mod config;
pub mod database;
pub mod error;
pub mod export;
pub mod models;
pub mod session;

pub use config::Settings;
pub use models::{Deck, DeckSet, Flashcard, Grade, ReviewSession};
pub use session::{ReviewController, ReviewPhase};
