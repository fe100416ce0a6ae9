pub mod controller;
pub mod write_queue;

pub use controller::{FailedWrite, ReviewConfig, ReviewController, ReviewPhase};
pub use write_queue::DeckWriteQueue;
