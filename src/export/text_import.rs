//! Lenient importer for term/definition lists pasted as plain text.
//!
//! The format is sniffed from the whole text, first match wins:
//! 1. tab separated (`term<TAB>definition`, what Quizlet copies)
//! 2. ` - ` separated
//! 3. comma separated
//! 4. otherwise lines alternate between term and definition
//!
//! Pairs with an empty side are skipped.

use crate::error::ImportError;
use crate::models::{Deck, Flashcard};
use chrono::{DateTime, Utc};

const TITLE_PREVIEW_CHARS: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextFormat {
    TabSeparated,
    DashSeparated,
    CommaSeparated,
    AlternatingLines,
}

impl TextFormat {
    fn separator(self) -> Option<&'static str> {
        match self {
            TextFormat::TabSeparated => Some("\t"),
            TextFormat::DashSeparated => Some(" - "),
            TextFormat::CommaSeparated => Some(","),
            TextFormat::AlternatingLines => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportedTerm {
    pub term: String,
    pub definition: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportedSet {
    pub title: String,
    pub format: TextFormat,
    pub terms: Vec<ImportedTerm>,
}

impl ImportedSet {
    /// Turns the parsed terms into a new deck of never-reviewed cards.
    pub fn into_deck(self, now: DateTime<Utc>) -> Deck {
        let mut deck = Deck::new(self.title, now);
        for term in self.terms {
            deck.add_card(Flashcard::new(term.term, term.definition, now));
        }
        deck
    }
}

pub fn detect_format(text: &str) -> TextFormat {
    if text.contains('\t') {
        TextFormat::TabSeparated
    } else if text.contains(" - ") {
        TextFormat::DashSeparated
    } else if text.contains(',') {
        TextFormat::CommaSeparated
    } else {
        TextFormat::AlternatingLines
    }
}

fn split_pair(line: &str, separator: &str) -> ImportedTerm {
    let mut parts = line.split(separator).map(str::trim);
    ImportedTerm {
        term: parts.next().unwrap_or_default().to_string(),
        definition: parts.next().unwrap_or_default().to_string(),
    }
}

pub fn parse_card_text(text: &str) -> Result<ImportedSet, ImportError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let lines: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();

    if lines.is_empty() {
        return Err(ImportError::Empty);
    }

    let format = detect_format(text);
    log::debug!("Importing {} lines as {:?}", lines.len(), format);

    let candidates: Vec<ImportedTerm> = match format.separator() {
        Some(separator) => lines.iter().map(|line| split_pair(line, separator)).collect(),
        None => lines
            .chunks_exact(2)
            .map(|pair| ImportedTerm {
                term: pair[0].trim().to_string(),
                definition: pair[1].trim().to_string(),
            })
            .collect(),
    };

    let terms: Vec<ImportedTerm> = candidates
        .into_iter()
        .filter(|t| {
            let valid = !t.term.is_empty() && !t.definition.is_empty();
            if !valid {
                log::warn!("Skipping invalid term: {:?}", t);
            }
            valid
        })
        .collect();

    let Some(first) = terms.first() else {
        return Err(ImportError::NoValidCards);
    };

    let preview: String = first.term.chars().take(TITLE_PREVIEW_CHARS).collect();
    let title = format!("Imported Deck ({preview}...)");
    log::info!("Imported {} terms", terms.len());

    Ok(ImportedSet {
        title,
        format,
        terms,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(set: &ImportedSet) -> Vec<(&str, &str)> {
        set.terms
            .iter()
            .map(|t| (t.term.as_str(), t.definition.as_str()))
            .collect()
    }

    #[test]
    fn test_tab_separated_wins_over_other_separators() {
        let set = parse_card_text("\u{feff}hund\tdog, hound\n\nkatze\tcat\r\n").unwrap();
        assert_eq!(set.format, TextFormat::TabSeparated);
        assert_eq!(pairs(&set), vec![("hund", "dog, hound"), ("katze", "cat")]);
    }

    #[test]
    fn test_dash_separated() {
        let set = parse_card_text("cześć - hello\ndziękuję - thank you").unwrap();
        assert_eq!(set.format, TextFormat::DashSeparated);
        assert_eq!(pairs(&set), vec![("cześć", "hello"), ("dziękuję", "thank you")]);
    }

    #[test]
    fn test_comma_separated_keeps_first_two_fields() {
        let set = parse_card_text("H,Hydrogen,1\nHe,Helium,2").unwrap();
        assert_eq!(set.format, TextFormat::CommaSeparated);
        assert_eq!(pairs(&set), vec![("H", "Hydrogen"), ("He", "Helium")]);
    }

    #[test]
    fn test_alternating_lines_drops_unpaired_tail() {
        let set = parse_card_text("Japan\nTokyo\nFrance\nParis\nPeru").unwrap();
        assert_eq!(set.format, TextFormat::AlternatingLines);
        assert_eq!(pairs(&set), vec![("Japan", "Tokyo"), ("France", "Paris")]);
    }

    #[test]
    fn test_invalid_pairs_are_skipped() {
        let set = parse_card_text("a,\n,b\nc,d").unwrap();
        assert_eq!(pairs(&set), vec![("c", "d")]);
    }

    #[test]
    fn test_empty_and_useless_input() {
        assert!(matches!(parse_card_text("  \n\n"), Err(ImportError::Empty)));
        assert!(matches!(parse_card_text("a,\nb,"), Err(ImportError::NoValidCards)));
    }

    #[test]
    fn test_title_and_deck() {
        let set = parse_card_text("photosynthesis in plant cells\tlight to sugar").unwrap();
        assert_eq!(set.title, "Imported Deck (photosynthesis in pl...)");

        let deck = set.into_deck(Utc::now());
        assert_eq!(deck.cards.len(), 1);
        assert!(deck.cards[0].is_new());
        assert_eq!(deck.cards[0].answer, "light to sugar");
    }
}
