mod app;

use app::FlashcardsApp;
use spaced_flashcards::Settings;
use spaced_flashcards::database::{DeckStore, SqliteDeckStore};
use spaced_flashcards::models::starter_decks;
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let settings_path = Settings::settings_path();
    let settings = Settings::load(&settings_path)?;

    let runtime = tokio::runtime::Builder::new_current_thread().build()?;
    let store = Arc::new(SqliteDeckStore::open(&settings.database_path)?);

    let mut decks = runtime.block_on(store.get_all_decks())?;
    if decks.is_empty() {
        let now = store.current_date()?;
        for deck in starter_decks(now) {
            runtime.block_on(store.save_deck(&deck))?;
        }
        log::info!("Sample data created!");
        decks = runtime.block_on(store.get_all_decks())?;
    }

    log::info!("Loaded {} decks from database", decks.len());
    for deck in &decks {
        log::debug!("  - {} ({} cards)", deck.title, deck.cards.len());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([500.0, 700.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Flashcards App",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(FlashcardsApp::new(
                runtime,
                store,
                settings,
                settings_path,
                decks,
            )))
        }),
    )?;
    Ok(())
}
