//! In-memory deck store. Used by tests and for running sessions without a database file.

use super::store::DeckStore;
use crate::error::StorageError;
use crate::models::Deck;
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

#[derive(Default)]
pub struct MemoryDeckStore {
    decks: Mutex<Vec<Deck>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    saves: AtomicUsize,
}

impl MemoryDeckStore {
    pub fn new(decks: Vec<Deck>) -> Self {
        Self {
            decks: Mutex::new(decks),
            ..Default::default()
        }
    }

    /// Makes every following read fail with `StorageError::Unavailable`.
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Makes every following write fail with `StorageError::Unavailable`.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    fn decks(&self) -> Result<std::sync::MutexGuard<'_, Vec<Deck>>, StorageError> {
        self.decks
            .lock()
            .map_err(|e| StorageError::Lock(e.to_string()))
    }

    fn check(&self, flag: &AtomicBool, what: &str) -> Result<(), StorageError> {
        if flag.load(Ordering::SeqCst) {
            Err(StorageError::Unavailable(format!("{what} disabled")))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl DeckStore for MemoryDeckStore {
    async fn get_all_decks(&self) -> Result<Vec<Deck>, StorageError> {
        self.check(&self.fail_reads, "reads")?;
        Ok(self.decks()?.clone())
    }

    async fn get_deck(&self, deck_id: &str) -> Result<Option<Deck>, StorageError> {
        self.check(&self.fail_reads, "reads")?;
        Ok(self.decks()?.iter().find(|d| d.id == deck_id).cloned())
    }

    async fn save_deck(&self, deck: &Deck) -> Result<(), StorageError> {
        self.check(&self.fail_writes, "writes")?;
        let mut decks = self.decks()?;
        match decks.iter_mut().find(|d| d.id == deck.id) {
            Some(existing) => *existing = deck.clone(),
            None => decks.push(deck.clone()),
        }
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn delete_deck(&self, deck_id: &str) -> Result<(), StorageError> {
        self.check(&self.fail_writes, "writes")?;
        self.decks()?.retain(|d| d.id != deck_id);
        Ok(())
    }
}
