pub mod db;
pub mod memory;
pub mod store;

pub use memory::MemoryDeckStore;
pub use store::{DeckStore, SqliteDeckStore};
