//! Decks seeded into an empty database on first launch.

use super::{Deck, Flashcard};
use chrono::{DateTime, Utc};

type StarterCard = (&'static str, &'static str, &'static str);

const STARTER_DECKS: &[(&str, &str, &[StarterCard])] = &[
    (
        "basic-math",
        "Basic Math Facts",
        &[
            ("math-1", "What is 7 x 8?", "56"),
            ("math-2", "What is the square root of 144?", "12"),
            ("math-3", "What is 15% of 200?", "30"),
        ],
    ),
    (
        "world-capitals",
        "World Capitals",
        &[
            ("capital-1", "What is the capital of Japan?", "Tokyo"),
            ("capital-2", "What is the capital of Brazil?", "Brasília"),
            ("capital-3", "What is the capital of France?", "Paris"),
        ],
    ),
    (
        "common-phrases-spanish",
        "Common Spanish Phrases",
        &[
            ("spanish-1", "How do you say \"Hello\" in Spanish?", "Hola"),
            ("spanish-2", "How do you say \"Thank you\" in Spanish?", "Gracias"),
            ("spanish-3", "How do you say \"Good morning\" in Spanish?", "Buenos días"),
        ],
    ),
    (
        "science-facts",
        "Basic Science Facts",
        &[
            ("science-1", "What is the closest planet to the Sun?", "Mercury"),
            ("science-2", "What is the chemical symbol for Gold?", "Au"),
            ("science-3", "What is the hardest natural substance on Earth?", "Diamond"),
        ],
    ),
];

pub fn starter_decks(now: DateTime<Utc>) -> Vec<Deck> {
    STARTER_DECKS
        .iter()
        .map(|(deck_id, title, cards)| {
            let mut deck = Deck::with_id(*deck_id, *title, now);
            for (card_id, question, answer) in cards.iter() {
                deck.add_card(Flashcard::with_id(*card_id, *question, *answer, now));
            }
            deck
        })
        .collect()
}
