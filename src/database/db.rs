//! Database operations for flashcard application
//!
//! Handles SQLite schema creation, loading and saving whole decks with their cards
//! (including the spaced repetition state of every card), and the simulated day
//! offset used to move the review clock forward.

use crate::error::StorageError;
use crate::models::{Deck, Flashcard};
use chrono::{DateTime, Duration, Utc};
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;

type Result<T> = std::result::Result<T, StorageError>;

/// Opens (or creates) the database file and makes sure all tables exist
pub fn open_database(path: &Path) -> Result<Connection> {
    let conn = Connection::open(path)?;
    init_schema(&conn)?;
    Ok(conn)
}

/// Creates tables for decks, cards and app state
pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS decks (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            created_at INTEGER NOT NULL,
            last_reviewed INTEGER
        )",
        (),
    )?;

    // Review state lives next to the card; position keeps insertion order
    conn.execute(
        "CREATE TABLE IF NOT EXISTS cards (
            deck_id TEXT NOT NULL,
            id TEXT NOT NULL,
            position INTEGER NOT NULL,
            question TEXT NOT NULL,
            answer TEXT NOT NULL,
            created_at INTEGER NOT NULL,
            last_reviewed INTEGER,
            next_review INTEGER,
            review_count INTEGER NOT NULL DEFAULT 0,
            correct_count INTEGER NOT NULL DEFAULT 0,
            incorrect_count INTEGER NOT NULL DEFAULT 0,
            ease_factor REAL NOT NULL DEFAULT 2.5,
            interval_days INTEGER NOT NULL DEFAULT 1,
            PRIMARY KEY (deck_id, id),
            FOREIGN KEY (deck_id) REFERENCES decks(id) ON DELETE CASCADE
        )",
        (),
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS app_state (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        (),
    )?;

    conn.execute(
        "INSERT OR IGNORE INTO app_state (key, value) VALUES ('day_offset', '0')",
        (),
    )?;

    Ok(())
}

/// Number of simulated days added to the wall clock
pub fn get_day_offset(conn: &Connection) -> Result<i64> {
    let value: String = conn.query_row(
        "SELECT value FROM app_state WHERE key = 'day_offset'",
        [],
        |row| row.get(0),
    )?;

    Ok(value.parse::<i64>().unwrap_or(0))
}

/// Current review date: wall clock plus the simulated day offset
pub fn get_current_date(conn: &Connection) -> Result<DateTime<Utc>> {
    Ok(Utc::now() + Duration::days(get_day_offset(conn)?))
}

/// Advances the review clock by 24 hours (for testing spaced repetition)
pub fn advance_day(conn: &Connection) -> Result<()> {
    let next = get_day_offset(conn)? + 1;
    conn.execute(
        "UPDATE app_state SET value = ?1 WHERE key = 'day_offset'",
        params![next.to_string()],
    )?;
    Ok(())
}

fn to_datetime(table: &'static str, column: &'static str, millis: i64) -> Result<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp_millis(millis).ok_or(StorageError::Corrupt {
        table,
        column,
        value: millis,
    })
}

fn to_optional_datetime(
    table: &'static str,
    column: &'static str,
    millis: Option<i64>,
) -> Result<Option<DateTime<Utc>>> {
    millis.map(|ms| to_datetime(table, column, ms)).transpose()
}

/// Raw card columns, converted into a `Flashcard` outside the rusqlite row callback
struct CardRow {
    id: String,
    question: String,
    answer: String,
    created_at: i64,
    last_reviewed: Option<i64>,
    next_review: Option<i64>,
    review_count: u32,
    correct_count: u32,
    incorrect_count: u32,
    ease_factor: f64,
    interval: u32,
}

impl CardRow {
    fn into_flashcard(self) -> Result<Flashcard> {
        Ok(Flashcard {
            id: self.id,
            question: self.question,
            answer: self.answer,
            created_at: to_datetime("cards", "created_at", self.created_at)?,
            last_reviewed: to_optional_datetime("cards", "last_reviewed", self.last_reviewed)?,
            next_review: to_optional_datetime("cards", "next_review", self.next_review)?,
            review_count: self.review_count,
            correct_count: self.correct_count,
            incorrect_count: self.incorrect_count,
            ease_factor: self.ease_factor,
            interval: self.interval,
        })
    }
}

/// Retrieves all cards of a deck in insertion order
pub fn get_cards_for_deck(deck_id: &str, conn: &Connection) -> Result<Vec<Flashcard>> {
    let mut stmt = conn.prepare(
        "SELECT id, question, answer, created_at, last_reviewed, next_review,
                review_count, correct_count, incorrect_count, ease_factor, interval_days
         FROM cards
         WHERE deck_id = ?1
         ORDER BY position ASC",
    )?;

    let rows = stmt
        .query_map(params![deck_id], |row| {
            Ok(CardRow {
                id: row.get(0)?,
                question: row.get(1)?,
                answer: row.get(2)?,
                created_at: row.get(3)?,
                last_reviewed: row.get(4)?,
                next_review: row.get(5)?,
                review_count: row.get(6)?,
                correct_count: row.get(7)?,
                incorrect_count: row.get(8)?,
                ease_factor: row.get(9)?,
                interval: row.get(10)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<CardRow>>>()?;

    rows.into_iter().map(CardRow::into_flashcard).collect()
}

fn deck_from_columns(
    id: String,
    title: String,
    created_at: i64,
    last_reviewed: Option<i64>,
    conn: &Connection,
) -> Result<Deck> {
    let cards = get_cards_for_deck(&id, conn)?;
    Ok(Deck {
        id,
        title,
        cards,
        created_at: to_datetime("decks", "created_at", created_at)?,
        last_reviewed: to_optional_datetime("decks", "last_reviewed", last_reviewed)?,
    })
}

/// Loads all decks with their cards, in the order they were first saved
pub fn load_all_decks(conn: &Connection) -> Result<Vec<Deck>> {
    let mut stmt =
        conn.prepare("SELECT id, title, created_at, last_reviewed FROM decks ORDER BY rowid")?;
    let rows = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, i64>(2)?,
                row.get::<_, Option<i64>>(3)?,
            ))
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    rows.into_iter()
        .map(|(id, title, created_at, last_reviewed)| {
            deck_from_columns(id, title, created_at, last_reviewed, conn)
        })
        .collect()
}

pub fn get_deck(deck_id: &str, conn: &Connection) -> Result<Option<Deck>> {
    let row = conn
        .query_row(
            "SELECT id, title, created_at, last_reviewed FROM decks WHERE id = ?1",
            params![deck_id],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, i64>(2)?,
                    row.get::<_, Option<i64>>(3)?,
                ))
            },
        )
        .optional()?;

    row.map(|(id, title, created_at, last_reviewed)| {
        deck_from_columns(id, title, created_at, last_reviewed, conn)
    })
    .transpose()
}

/// Inserts or replaces a deck and all of its cards in one transaction
pub fn save_deck(deck: &Deck, conn: &Connection) -> Result<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute(
        "INSERT INTO decks (id, title, created_at, last_reviewed) VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(id) DO UPDATE SET title = excluded.title, last_reviewed = excluded.last_reviewed",
        params![
            deck.id,
            deck.title,
            deck.created_at.timestamp_millis(),
            deck.last_reviewed.map(|t| t.timestamp_millis()),
        ],
    )?;

    tx.execute("DELETE FROM cards WHERE deck_id = ?1", params![deck.id])?;

    {
        let mut insert = tx.prepare(
            "INSERT INTO cards (deck_id, id, position, question, answer, created_at, last_reviewed,
                                next_review, review_count, correct_count, incorrect_count,
                                ease_factor, interval_days)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
        )?;

        for (position, card) in deck.cards.iter().enumerate() {
            insert.execute(params![
                deck.id,
                card.id,
                position as i64,
                card.question,
                card.answer,
                card.created_at.timestamp_millis(),
                card.last_reviewed.map(|t| t.timestamp_millis()),
                card.next_review.map(|t| t.timestamp_millis()),
                card.review_count,
                card.correct_count,
                card.incorrect_count,
                card.ease_factor,
                card.interval,
            ])?;
        }
    }

    tx.commit()?;
    Ok(())
}

/// Deletes a deck together with its cards
pub fn delete_deck(deck_id: &str, conn: &Connection) -> Result<()> {
    let tx = conn.unchecked_transaction()?;
    tx.execute("DELETE FROM cards WHERE deck_id = ?1", params![deck_id])?;
    tx.execute("DELETE FROM decks WHERE id = ?1", params![deck_id])?;
    tx.commit()?;
    Ok(())
}
