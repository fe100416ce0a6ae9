//! Main application UI and state management.
//! Handles deck management, daily review sessions, quizzes and import/export.

use chrono::{DateTime, Local, Utc};
use eframe::egui;
use spaced_flashcards::config::Settings;
use spaced_flashcards::database::{DeckStore, SqliteDeckStore};
use spaced_flashcards::export::{
    export_backup, export_deck_to_path, import_backup, import_deck, parse_card_text,
};
use spaced_flashcards::models::{Deck, DeckSet, Flashcard, QuizSession, due};
use spaced_flashcards::session::{DeckWriteQueue, ReviewConfig, ReviewController, ReviewPhase};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Application screen states
#[derive(Default, PartialEq)]
enum AppScreen {
    #[default]
    Main,
    DailyReview,
    Quiz,
}

/// Main application state
pub struct FlashcardsApp {
    runtime: Runtime,
    store: Arc<SqliteDeckStore>,
    writes: Arc<DeckWriteQueue>,
    settings: Settings,
    settings_path: PathBuf,

    show_confirmation_dialog: bool,
    allowed_to_close: bool,
    all_decks: DeckSet,
    selected_deck_index: Option<usize>,
    current_question: String,
    current_answer: String,
    new_deck_title: String,

    current_screen: AppScreen,
    review: Option<ReviewController>,
    review_error: Option<String>,
    quiz: Option<QuizSession>,

    current_date_display: String,

    show_export_dialog: bool,
    show_text_import_dialog: bool,
    import_text: String,
    show_settings_dialog: bool,
    show_result_dialog: bool,
    result_message: String,
}

/// Formats a timestamp as YYYY-MM-DD in local time
fn format_date(time: DateTime<Utc>) -> String {
    let datetime: DateTime<Local> = time.into();
    datetime.format("%Y-%m-%d").to_string()
}

impl eframe::App for FlashcardsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(if self.settings.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        match self.current_screen {
            AppScreen::Main => self.render_main_screen(ctx),
            AppScreen::DailyReview => self.render_review_screen(ctx),
            AppScreen::Quiz => self.render_quiz_screen(ctx),
        }

        // Handle window close requests with confirmation dialog
        if ctx.input(|i| i.viewport().close_requested()) && !self.allowed_to_close {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            self.show_confirmation_dialog = true;
        }

        if self.show_confirmation_dialog {
            egui::Window::new("Do you want to quit?")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        if ui.button("No").clicked() {
                            self.show_confirmation_dialog = false;
                            self.allowed_to_close = false;
                        }

                        if ui.button("Yes").clicked() {
                            self.show_confirmation_dialog = false;
                            self.allowed_to_close = true;
                            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                    });
                });
        }

        if self.show_export_dialog {
            self.render_export_dialog(ctx);
        }
        if self.show_text_import_dialog {
            self.render_text_import_dialog(ctx);
        }
        if self.show_settings_dialog {
            self.render_settings_dialog(ctx);
        }

        if self.show_result_dialog {
            egui::Window::new("Result")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(&self.result_message);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.show_result_dialog = false;
                    }
                });
        }
    }
}

impl FlashcardsApp {
    pub fn new(
        runtime: Runtime,
        store: Arc<SqliteDeckStore>,
        settings: Settings,
        settings_path: PathBuf,
        decks: Vec<Deck>,
    ) -> Self {
        let has_decks = !decks.is_empty();
        let mut app = Self {
            runtime,
            store,
            writes: Arc::new(DeckWriteQueue::new()),
            settings,
            settings_path,
            show_confirmation_dialog: false,
            allowed_to_close: false,
            all_decks: DeckSet::new(decks),
            selected_deck_index: if has_decks { Some(0) } else { None },
            current_question: String::new(),
            current_answer: String::new(),
            new_deck_title: String::new(),
            current_screen: AppScreen::Main,
            review: None,
            review_error: None,
            quiz: None,
            current_date_display: String::new(),
            show_export_dialog: false,
            show_text_import_dialog: false,
            import_text: String::new(),
            show_settings_dialog: false,
            show_result_dialog: false,
            result_message: String::new(),
        };
        app.current_date_display = format_date(app.now());
        app
    }

    /// Review clock: wall clock shifted by the simulated day offset
    fn now(&self) -> DateTime<Utc> {
        self.store.current_date().unwrap_or_else(|e| {
            log::warn!("Failed to read simulated date: {}", e);
            Utc::now()
        })
    }

    fn show_result(&mut self, message: impl Into<String>) {
        self.result_message = message.into();
        self.show_result_dialog = true;
    }

    fn reload_decks(&mut self) {
        match self.runtime.block_on(self.store.get_all_decks()) {
            Ok(decks) => {
                self.all_decks = DeckSet::new(decks);
                if self
                    .selected_deck_index
                    .is_some_and(|i| i >= self.all_decks.decks.len())
                {
                    self.selected_deck_index = None;
                }
            }
            Err(e) => self.show_result(format!("Failed to load decks: {}", e)),
        }
    }

    /// Saves a deck through the write queue and mirrors it in memory on success
    fn persist_deck(&mut self, deck: Deck) -> bool {
        match self
            .runtime
            .block_on(self.writes.save(self.store.as_ref(), &deck))
        {
            Ok(()) => {
                self.all_decks.upsert(deck);
                true
            }
            Err(e) => {
                self.show_result(format!("Failed to save deck '{}': {}", deck.title, e));
                false
            }
        }
    }

    fn delete_deck(&mut self, deck_index: usize) {
        let Some(deck) = self.all_decks.decks.get(deck_index) else {
            return;
        };
        let deck_id = deck.id.clone();
        match self
            .runtime
            .block_on(self.writes.delete(self.store.as_ref(), &deck_id))
        {
            Ok(()) => {
                self.all_decks.remove(&deck_id);
                self.selected_deck_index = None;
            }
            Err(e) => self.show_result(format!("Failed to delete deck: {}", e)),
        }
    }

    /// Renders the main screen with deck management interface
    fn render_main_screen(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let now = self.now();
            self.current_date_display = format_date(now);

            ui.horizontal(|ui| {
                ui.label(&self.current_date_display);

                if ui.button("Next Day").clicked() {
                    if let Err(e) = self.store.advance_day() {
                        self.show_result(format!("Failed to advance day: {}", e));
                    }
                }

                if ui.button("Settings").clicked() {
                    self.show_settings_dialog = true;
                }
            });
            ui.separator();

            let due_count = self.all_decks.due_count(now);
            ui.horizontal(|ui| {
                ui.label(format!(
                    "{} card{} due for review",
                    due_count,
                    if due_count == 1 { "" } else { "s" }
                ));
                if ui.button("Start Daily Review").clicked() {
                    self.start_daily_review();
                }
            });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Export Deck").clicked() {
                    self.show_export_dialog = true;
                }
                if ui.button("Import Deck").clicked() {
                    self.handle_import();
                }
                if ui.button("Import Text").clicked() {
                    self.show_text_import_dialog = true;
                }
            });
            ui.horizontal(|ui| {
                if ui.button("Export Backup").clicked() {
                    self.handle_backup_export();
                }
                if ui.button("Import Backup").clicked() {
                    self.handle_backup_import();
                }
            });

            ui.separator();

            ui.heading("Create New Deck");
            ui.horizontal(|ui| {
                ui.label("Title:");
                ui.text_edit_singleline(&mut self.new_deck_title);
                if ui.button("Create Deck").clicked() && !self.new_deck_title.trim().is_empty() {
                    let deck = Deck::new(self.new_deck_title.trim(), now);
                    if self.persist_deck(deck) {
                        self.new_deck_title.clear();
                    }
                }
            });

            ui.separator();

            ui.heading(format!("Decks ({})", self.all_decks.decks.len()));

            // We store actions to execute after UI rendering to avoid borrowing conflicts
            let mut action_select: Option<usize> = None;
            let mut action_quiz: Option<usize> = None;
            let mut action_delete: Option<usize> = None;

            egui::ScrollArea::vertical()
                .id_source("decks_list")
                .max_height(150.0)
                .show(ui, |ui| {
                    for (i, deck) in self.all_decks.decks.iter().enumerate() {
                        let is_selected = self.selected_deck_index == Some(i);
                        let due = due::due_cards(deck, now).len();

                        ui.horizontal(|ui| {
                            if ui
                                .selectable_label(
                                    is_selected,
                                    format!(
                                        "{}. {} ({} cards, {} due)",
                                        i + 1,
                                        deck.title,
                                        deck.cards.len(),
                                        due
                                    ),
                                )
                                .clicked()
                            {
                                action_select = Some(i);
                            }

                            if ui.button("Quiz").clicked() {
                                action_quiz = Some(i);
                            }
                            if ui.button("Delete").clicked() {
                                action_delete = Some(i);
                            }
                        });
                    }
                });

            // Execute deferred actions
            if let Some(i) = action_select {
                self.selected_deck_index = Some(i);
            }
            if let Some(i) = action_quiz {
                self.start_quiz(i);
            }
            if let Some(i) = action_delete {
                self.delete_deck(i);
            }

            ui.separator();

            let Some(deck_index) = self.selected_deck_index else {
                ui.label("Select a deck to add flashcards");
                return;
            };
            let Some(current_deck) = self.all_decks.decks.get(deck_index).cloned() else {
                return;
            };

            ui.heading(format!("Selected Deck: {}", current_deck.title));

            ui.horizontal(|ui| {
                ui.label("Question:");
                ui.text_edit_singleline(&mut self.current_question);
            });
            ui.horizontal(|ui| {
                ui.label("Answer:");
                ui.text_edit_singleline(&mut self.current_answer);
            });

            if ui.button("Add Flashcard").clicked()
                && !self.current_question.trim().is_empty()
                && !self.current_answer.trim().is_empty()
            {
                let mut deck = current_deck.clone();
                deck.add_card(Flashcard::new(
                    self.current_question.trim(),
                    self.current_answer.trim(),
                    now,
                ));
                if self.persist_deck(deck) {
                    self.current_question.clear();
                    self.current_answer.clear();
                }
            }

            ui.separator();

            ui.heading(format!("Flashcards ({})", current_deck.cards.len()));

            egui::ScrollArea::vertical()
                .id_source("flashcards_list")
                .max_height(200.0)
                .show(ui, |ui| {
                    for (i, card) in current_deck.cards.iter().enumerate() {
                        ui.group(|ui| {
                            ui.label(format!("{}. Question: {}", i + 1, card.question));
                            ui.label(format!("   Answer: {}", card.answer));
                            let next = card
                                .next_review
                                .map(format_date)
                                .unwrap_or_else(|| "new".to_string());
                            ui.label(format!(
                                "   Next review: {} (interval {} d, ease {:.2})",
                                next, card.interval, card.ease_factor
                            ));
                        });
                    }
                });
        });
    }

    /// Renders the daily review screen: card, flip, grading and the final summary
    fn render_review_screen(&mut self, ctx: &egui::Context) {
        let now = self.now();
        let show_timer = self.settings.show_answer_timer;

        egui::CentralPanel::default().show(ctx, |ui| {
            let mut action_flip = false;
            let mut action_grade: Option<bool> = None;
            let mut action_retry = false;
            let mut action_back = false;

            let Some(review) = &self.review else {
                self.current_screen = AppScreen::Main;
                return;
            };

            ui.heading("Daily Review");

            match review.phase() {
                ReviewPhase::Loading => {
                    let error = self.review_error.as_deref().unwrap_or("Loading review session...");
                    ui.label(error);
                    if ui.button("Retry").clicked() {
                        action_retry = true;
                    }
                }
                ReviewPhase::NothingDue => {
                    ui.heading("All Caught Up!");
                    ui.label("No cards are due for review right now. Check back later!");
                }
                ReviewPhase::Question | ReviewPhase::Answer => {
                    let (answered, total) = review.progress();
                    ui.add(egui::ProgressBar::new(answered as f32 / total.max(1) as f32));
                    ui.label(format!("Card {} of {}", answered + 1, total));

                    let show_answer = review.phase() == ReviewPhase::Answer;
                    if let Some(card) = review.current_card() {
                        ui.group(|ui| {
                            ui.set_min_height(200.0);
                            ui.vertical_centered(|ui| {
                                ui.add_space(20.0);
                                if show_answer {
                                    ui.heading("Answer:");
                                    ui.label(&card.answer);
                                } else {
                                    ui.heading("Question:");
                                    ui.label(&card.question);
                                }
                                ui.add_space(20.0);
                            });
                        });
                    }

                    if show_timer && !show_answer {
                        if let Some(shown_at) = review.shown_at() {
                            ui.label(format!("{} s", (now - shown_at).num_seconds().max(0)));
                            ctx.request_repaint_after(std::time::Duration::from_secs(1));
                        }
                    }

                    ui.add_space(20.0);
                    let flip_label = if show_answer { "Show Question" } else { "Show Answer" };
                    if ui.button(flip_label).clicked() {
                        action_flip = true;
                    }

                    if show_answer {
                        ui.horizontal(|ui| {
                            if ui.button("Correct").clicked() {
                                action_grade = Some(true);
                            }
                            if ui.button("Incorrect").clicked() {
                                action_grade = Some(false);
                            }
                        });
                    }
                }
                ReviewPhase::Finished => {
                    if let Some(summary) = review.summary() {
                        ui.heading("Review Complete!");
                        ui.label(format!("Total Cards: {}", summary.total_cards));
                        ui.label(format!("Correct Answers: {}", summary.correct_cards));
                        ui.label(format!("Accuracy: {:.1}%", summary.accuracy));
                        ui.add_space(10.0);
                        ui.label(summary.message());
                    }
                    let failed = review.failed_writes().len();
                    if failed > 0 {
                        ui.colored_label(
                            egui::Color32::RED,
                            format!("{} card updates could not be saved.", failed),
                        );
                    }
                }
            }

            ui.add_space(20.0);
            if ui.button("Back to Main Screen").clicked() {
                action_back = true;
            }

            // Execute deferred actions
            if action_retry {
                self.load_review(now);
            }
            if let Some(review) = self.review.as_mut() {
                if action_flip {
                    review.flip();
                }
                if let Some(correct) = action_grade {
                    if let Err(e) = self.runtime.block_on(review.grade(correct, now)) {
                        log::warn!("Grading ignored: {}", e);
                    }
                }
            }
            if action_back {
                // dropping the controller abandons the session; graded cards are already saved
                self.review = None;
                self.review_error = None;
                self.current_screen = AppScreen::Main;
                self.reload_decks();
            }
        });
    }

    /// Renders the quiz screen: one pass through a deck with a score at the end
    fn render_quiz_screen(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut action_back = false;

            if let Some(quiz) = &mut self.quiz {
                ui.heading(format!("Quiz: {}", quiz.deck_title));

                if quiz.is_completed() {
                    ui.heading("Quiz Complete!");
                    ui.label(format!("Score: {:.1}%", quiz.score()));
                    ui.label(format!(
                        "{} out of {} correct",
                        quiz.correct_answers,
                        quiz.total_count()
                    ));
                    if ui.button("Restart Quiz").clicked() {
                        quiz.restart();
                    }
                } else if let Some(card) = quiz.current_card() {
                    let show_answer = quiz.show_answer;
                    let text = if show_answer {
                        card.answer.clone()
                    } else {
                        card.question.clone()
                    };

                    ui.add(egui::ProgressBar::new(
                        quiz.current_index as f32 / quiz.total_count() as f32,
                    ));
                    ui.label(quiz.progress_message());

                    ui.group(|ui| {
                        ui.set_min_height(200.0);
                        ui.vertical_centered(|ui| {
                            ui.add_space(20.0);
                            ui.heading(text);
                            ui.add_space(20.0);
                        });
                    });

                    if ui
                        .button(if show_answer { "Show Question" } else { "Show Answer" })
                        .clicked()
                    {
                        quiz.toggle_answer();
                    }
                    if show_answer {
                        ui.horizontal(|ui| {
                            if ui.button("Correct").clicked() {
                                quiz.answer(true);
                            }
                            if ui.button("Incorrect").clicked() {
                                quiz.answer(false);
                            }
                        });
                    }
                }
            }

            ui.add_space(20.0);
            if ui.button("Back to Main Screen").clicked() {
                action_back = true;
            }
            if action_back {
                self.quiz = None;
                self.current_screen = AppScreen::Main;
            }
        });
    }

    fn start_quiz(&mut self, deck_index: usize) {
        match self.all_decks.decks.get(deck_index) {
            Some(deck) if !deck.cards.is_empty() => {
                self.quiz = Some(QuizSession::new(deck));
                self.current_screen = AppScreen::Quiz;
            }
            Some(_) => self.show_result("No cards available"),
            None => {}
        }
    }

    /// Starts a daily review across all decks
    fn start_daily_review(&mut self) {
        let config = ReviewConfig::from(&self.settings);
        let store: Arc<dyn DeckStore> = self.store.clone();
        self.review = Some(ReviewController::new(store, Arc::clone(&self.writes), config));
        self.review_error = None;
        self.current_screen = AppScreen::DailyReview;
        let now = self.now();
        self.load_review(now);
    }

    fn load_review(&mut self, now: DateTime<Utc>) {
        if let Some(review) = self.review.as_mut() {
            match self.runtime.block_on(review.start(now)) {
                Ok(_) => self.review_error = None,
                Err(e) => {
                    log::warn!("Failed to load review session: {}", e);
                    self.review_error = Some(format!("Failed to load decks: {}", e));
                }
            }
        }
    }

    fn render_export_dialog(&mut self, ctx: &egui::Context) {
        let mut export_deck_index: Option<usize> = None;
        let mut should_cancel = false;

        egui::Window::new("Export Deck")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Select a deck to export:");
                ui.separator();

                for (i, deck) in self.all_decks.decks.iter().enumerate() {
                    if ui
                        .button(format!("{} ({} cards)", deck.title, deck.cards.len()))
                        .clicked()
                    {
                        export_deck_index = Some(i);
                    }
                }

                ui.separator();

                if ui.button("Cancel").clicked() {
                    should_cancel = true;
                }
            });

        if let Some(i) = export_deck_index {
            self.handle_export(i);
        }
        if should_cancel {
            self.show_export_dialog = false;
        }
    }

    fn render_text_import_dialog(&mut self, ctx: &egui::Context) {
        let mut action_import = false;
        let mut should_cancel = false;

        egui::Window::new("Import Text")
            .collapsible(false)
            .show(ctx, |ui| {
                ui.label("Paste terms: tab, \" - \" or comma separated, or alternating lines.");
                ui.text_edit_multiline(&mut self.import_text);
                ui.horizontal(|ui| {
                    if ui.button("Import").clicked() {
                        action_import = true;
                    }
                    if ui.button("Cancel").clicked() {
                        should_cancel = true;
                    }
                });
            });

        if action_import {
            match parse_card_text(&self.import_text) {
                Ok(set) => {
                    let deck = set.into_deck(self.now());
                    let message = format!(
                        "Deck '{}' imported successfully with {} cards!",
                        deck.title,
                        deck.cards.len()
                    );
                    if self.persist_deck(deck) {
                        self.import_text.clear();
                        self.show_text_import_dialog = false;
                        self.show_result(message);
                    }
                }
                Err(e) => self.show_result(format!("Import failed: {}", e)),
            }
        }
        if should_cancel {
            self.show_text_import_dialog = false;
        }
    }

    fn render_settings_dialog(&mut self, ctx: &egui::Context) {
        let mut action_save = false;
        let mut should_close = false;

        egui::Window::new("Settings")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Cards per review:");
                    ui.add(egui::DragValue::new(&mut self.settings.card_review_limit).range(1..=500));
                });
                ui.checkbox(
                    &mut self.settings.enable_spaced_repetition,
                    "Enable spaced repetition",
                );
                ui.checkbox(&mut self.settings.show_answer_timer, "Show answer timer");
                ui.checkbox(&mut self.settings.dark_mode, "Dark mode");
                ui.horizontal(|ui| {
                    if ui.button("Save").clicked() {
                        action_save = true;
                    }
                    if ui.button("Close").clicked() {
                        should_close = true;
                    }
                });
            });

        if action_save {
            match self.settings.save(&self.settings_path) {
                Ok(()) => self.show_settings_dialog = false,
                Err(e) => self.show_result(format!("Failed to save settings: {}", e)),
            }
        }
        if should_close {
            self.show_settings_dialog = false;
        }
    }

    /// Handles deck export to JSON file
    fn handle_export(&mut self, deck_index: usize) {
        if let Some(deck) = self.all_decks.decks.get(deck_index) {
            // Open file save dialog
            if let Some(path) = rfd::FileDialog::new()
                .set_file_name(format!("{}.json", deck.title))
                .add_filter("JSON files", &["json"])
                .save_file()
            {
                let message = match export_deck_to_path(deck, &path) {
                    Ok(()) => format!("Deck '{}' exported successfully!", deck.title),
                    Err(e) => format!("Export failed: {}", e),
                };
                self.show_result(message);
            }
        }
        self.show_export_dialog = false;
    }

    /// Handles deck import from JSON file
    fn handle_import(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON files", &["json"])
            .pick_file()
        else {
            return;
        };

        match import_deck(&path) {
            Ok(deck) => {
                if self.all_decks.get(&deck.id).is_some() {
                    self.show_result(format!(
                        "Deck '{}' already exists! Delete it first or change its id in the JSON file.",
                        deck.title
                    ));
                    return;
                }

                let message = format!(
                    "Deck '{}' imported successfully with {} cards!",
                    deck.title,
                    deck.cards.len()
                );
                if self.persist_deck(deck) {
                    self.show_result(message);
                }
            }
            Err(e) => self.show_result(format!(
                "Import failed: {}\n\nPlease check if the file has correct structure:\n{{\n  \"id\": \"...\",\n  \"title\": \"Deck Title\",\n  \"createdAt\": 0,\n  \"cards\": [...]\n}}",
                e
            )),
        }
    }

    fn handle_backup_export(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_file_name("flashcards-backup.json")
            .add_filter("JSON files", &["json"])
            .save_file()
        else {
            return;
        };

        let result = export_backup(&self.all_decks.decks, &self.settings)
            .map_err(|e| e.to_string())
            .and_then(|data| std::fs::write(&path, data).map_err(|e| e.to_string()));
        match result {
            Ok(()) => self.show_result(format!(
                "Exported {} decks to {}",
                self.all_decks.decks.len(),
                path.display()
            )),
            Err(e) => self.show_result(format!("Export failed: {}", e)),
        }
    }

    fn handle_backup_import(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON files", &["json"])
            .pick_file()
        else {
            return;
        };

        let backup = match std::fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|data| import_backup(&data).map_err(|e| e.to_string()))
        {
            Ok(backup) => backup,
            Err(e) => {
                self.show_result(format!("Failed to import data: {}", e));
                return;
            }
        };

        let total = backup.decks.len();
        let mut saved = 0;
        for deck in backup.decks {
            if self.persist_deck(deck) {
                saved += 1;
            }
        }

        if let Some(settings) = backup.settings {
            match settings.validate() {
                Ok(()) => {
                    self.settings = Settings {
                        database_path: self.settings.database_path.clone(),
                        ..settings
                    };
                    if let Err(e) = self.settings.save(&self.settings_path) {
                        log::warn!("Failed to save imported settings: {}", e);
                    }
                }
                Err(e) => log::warn!("Ignoring imported settings: {}", e),
            }
        }

        if saved == total {
            self.show_result(format!("Imported {} decks", saved));
        }
    }
}
