//! Per-deck serialization of storage writes.
//!
//! Every deck id gets its own lane (an async mutex). A write holds its lane for the
//! whole storage call, so two writes to the same deck never overlap while writes to
//! different decks proceed independently.

use crate::database::DeckStore;
use crate::error::StorageError;
use crate::models::{Deck, DeckId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Default)]
pub struct DeckWriteQueue {
    lanes: Mutex<HashMap<DeckId, Arc<tokio::sync::Mutex<()>>>>,
}

impl DeckWriteQueue {
    pub fn new() -> Self {
        Self::default()
    }

    fn lane(&self, deck_id: &str) -> Arc<tokio::sync::Mutex<()>> {
        // the map only ever grows, so a poisoned lock still holds valid lanes
        let mut lanes = self.lanes.lock().unwrap_or_else(|e| e.into_inner());
        Arc::clone(lanes.entry(deck_id.to_string()).or_default())
    }

    pub async fn save(&self, store: &dyn DeckStore, deck: &Deck) -> Result<(), StorageError> {
        let lane = self.lane(&deck.id);
        let _turn = lane.lock().await;
        store.save_deck(deck).await
    }

    pub async fn delete(&self, store: &dyn DeckStore, deck_id: &str) -> Result<(), StorageError> {
        let lane = self.lane(deck_id);
        let _turn = lane.lock().await;
        store.delete_deck(deck_id).await
    }
}
