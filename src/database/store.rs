//! Async deck storage used by review sessions and the app.

use super::db;
use crate::error::StorageError;
use crate::models::Deck;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Key-value store of decks keyed by deck id. Each deck embeds its cards.
#[async_trait]
pub trait DeckStore: Send + Sync {
    async fn get_all_decks(&self) -> Result<Vec<Deck>, StorageError>;

    async fn get_deck(&self, deck_id: &str) -> Result<Option<Deck>, StorageError>;

    /// Inserts or replaces the deck with the same id.
    async fn save_deck(&self, deck: &Deck) -> Result<(), StorageError>;

    async fn delete_deck(&self, deck_id: &str) -> Result<(), StorageError>;
}

/// SQLite-backed store. Queries run on the caller's task; the connection is
/// never held across an await point.
#[derive(Clone)]
pub struct SqliteDeckStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteDeckStore {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    pub fn open(path: &Path) -> Result<Self, StorageError> {
        Ok(Self::new(db::open_database(path)?))
    }

    pub fn in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        db::init_schema(&conn)?;
        Ok(Self::new(conn))
    }

    fn with_conn<T>(
        &self,
        f: impl FnOnce(&Connection) -> Result<T, StorageError>,
    ) -> Result<T, StorageError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| StorageError::Lock(e.to_string()))?;
        f(&conn)
    }

    pub fn current_date(&self) -> Result<DateTime<Utc>, StorageError> {
        self.with_conn(db::get_current_date)
    }

    pub fn advance_day(&self) -> Result<(), StorageError> {
        self.with_conn(db::advance_day)
    }
}

#[async_trait]
impl DeckStore for SqliteDeckStore {
    async fn get_all_decks(&self) -> Result<Vec<Deck>, StorageError> {
        self.with_conn(db::load_all_decks)
    }

    async fn get_deck(&self, deck_id: &str) -> Result<Option<Deck>, StorageError> {
        self.with_conn(|conn| db::get_deck(deck_id, conn))
    }

    async fn save_deck(&self, deck: &Deck) -> Result<(), StorageError> {
        self.with_conn(|conn| db::save_deck(deck, conn))?;
        log::debug!("Saved deck '{}' ({} cards)", deck.id, deck.cards.len());
        Ok(())
    }

    async fn delete_deck(&self, deck_id: &str) -> Result<(), StorageError> {
        self.with_conn(|conn| db::delete_deck(deck_id, conn))?;
        log::info!("Deleted deck '{}'", deck_id);
        Ok(())
    }
}
