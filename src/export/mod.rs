pub mod json;
pub mod text_import;

pub use json::{Backup, export_backup, export_deck_to_path, import_backup, import_deck};
pub use text_import::{ImportedSet, TextFormat, parse_card_text};
