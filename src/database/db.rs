//! SQLite persistence for review items
//!
//! Stores each item's content and scheduling state in one row, keyed by item id,
//! with a `position` column that keeps curriculum order stable across loads.
//! Timestamps are stored as text with full sub-second precision.
//! Also keeps a simulated current date in `app_state` so study days can be
//! replayed without waiting for the wall clock.

use super::ReviewStore;
use crate::error::{Result, SrsError};
use crate::models::{Flashcard, ReviewItem};
use chrono::{DateTime, Duration, Utc};
use log::{debug, info};
use rusqlite::{Connection, OptionalExtension, Row, params};
use std::path::Path;

const ITEM_COLUMNS: &str = "id, category, term, reading, definition, mastery_level, \
     correct_count, incorrect_count, last_reviewed_at, next_review_at";

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) the database file and makes sure the schema exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path.as_ref())?;
        info!("Opened review database at {}", path.as_ref().display());
        Self::init(conn)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS review_items (
                id TEXT PRIMARY KEY,
                position INTEGER NOT NULL,
                category TEXT NOT NULL,
                term TEXT NOT NULL,
                reading TEXT,
                definition TEXT NOT NULL,
                mastery_level INTEGER NOT NULL DEFAULT 0,
                correct_count INTEGER NOT NULL DEFAULT 0,
                incorrect_count INTEGER NOT NULL DEFAULT 0,
                last_reviewed_at TEXT,
                next_review_at TEXT
            )",
            (),
        )?;

        // Key-value table for the curriculum start date and simulated current date
        conn.execute(
            "CREATE TABLE IF NOT EXISTS app_state (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            (),
        )?;

        let now = Utc::now();
        conn.execute(
            "INSERT OR IGNORE INTO app_state (key, value) VALUES ('current_date', ?1)",
            params![now],
        )?;
        conn.execute(
            "INSERT OR IGNORE INTO app_state (key, value) VALUES ('start_date', ?1)",
            params![now],
        )?;

        Ok(Self { conn })
    }

    /// Appends an item at the end of the curriculum. Returns false if the id is
    /// already stored; the stored item is left as it is.
    pub fn add_item(&self, item: &ReviewItem) -> Result<bool> {
        let inserted = self.conn.execute(
            "INSERT OR IGNORE INTO review_items
                (id, position, category, term, reading, definition, mastery_level,
                 correct_count, incorrect_count, last_reviewed_at, next_review_at)
             VALUES (?1, (SELECT COALESCE(MAX(position), -1) + 1 FROM review_items),
                     ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                item.id,
                item.category,
                item.content.term,
                item.content.reading,
                item.content.definition,
                item.mastery_level,
                item.correct_count,
                item.incorrect_count,
                item.last_reviewed_at,
                item.next_review_at,
            ],
        )?;
        Ok(inserted > 0)
    }

    /// Adds a whole curriculum in one transaction. Returns how many items were new.
    pub fn add_items(&self, items: &[ReviewItem]) -> Result<usize> {
        let tx = self.conn.unchecked_transaction()?;
        let mut added = 0;
        for item in items {
            if self.add_item(item)? {
                added += 1;
            }
        }
        tx.commit()?;

        info!("Added {} of {} items", added, items.len());
        Ok(added)
    }

    pub fn count(&self) -> Result<usize> {
        let n: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM review_items", [], |row| row.get(0))?;
        Ok(n as usize)
    }

    /// Clears learning progress of the given items. Returns the number of rows reset.
    pub fn reset_progress(&self, ids: &[String]) -> Result<usize> {
        let tx = self.conn.unchecked_transaction()?;
        let mut reset = 0;
        for id in ids {
            reset += self.conn.execute(
                "UPDATE review_items
                 SET mastery_level = 0, correct_count = 0, incorrect_count = 0,
                     last_reviewed_at = NULL, next_review_at = NULL
                 WHERE id = ?1",
                params![id],
            )?;
        }
        tx.commit()?;

        info!("Reset progress of {} items", reset);
        Ok(reset)
    }

    /// Clears learning progress of every item.
    pub fn reset_all(&self) -> Result<usize> {
        let reset = self.conn.execute(
            "UPDATE review_items
             SET mastery_level = 0, correct_count = 0, incorrect_count = 0,
                 last_reviewed_at = NULL, next_review_at = NULL",
            (),
        )?;

        info!("Reset progress of all {} items", reset);
        Ok(reset)
    }

    fn get_date(&self, key: &str) -> Result<DateTime<Utc>> {
        self.conn
            .query_row(
                "SELECT value FROM app_state WHERE key = ?1",
                params![key],
                |row| row.get::<_, DateTime<Utc>>(0),
            )
            .map_err(|e| match e {
                rusqlite::Error::FromSqlConversionFailure(..)
                | rusqlite::Error::InvalidColumnType(..) => SrsError::CorruptState {
                    key: key.to_string(),
                    reason: e.to_string(),
                },
                other => SrsError::Database(other),
            })
    }

    fn set_date(&self, key: &str, date: DateTime<Utc>) -> Result<()> {
        self.conn.execute(
            "UPDATE app_state SET value = ?1 WHERE key = ?2",
            params![date, key],
        )?;
        Ok(())
    }

    /// Simulated "now" used by the study loop.
    pub fn current_date(&self) -> Result<DateTime<Utc>> {
        self.get_date("current_date")
    }

    pub fn set_current_date(&self, date: DateTime<Utc>) -> Result<()> {
        self.set_date("current_date", date)
    }

    /// Moves the simulated date forward by 24 hours and returns it.
    pub fn advance_day(&self) -> Result<DateTime<Utc>> {
        let next_day = self.current_date()? + Duration::hours(24);
        self.set_current_date(next_day)?;
        debug!("Advanced current date to {}", next_day);
        Ok(next_day)
    }

    /// Date the curriculum was started, day 1 of the daily batches.
    pub fn start_date(&self) -> Result<DateTime<Utc>> {
        self.get_date("start_date")
    }

    pub fn set_start_date(&self, date: DateTime<Utc>) -> Result<()> {
        self.set_date("start_date", date)
    }

    fn load_one(&self, id: &str) -> Result<Option<ReviewItem>> {
        let item = self
            .conn
            .query_row(
                &format!("SELECT {} FROM review_items WHERE id = ?1", ITEM_COLUMNS),
                params![id],
                row_to_item,
            )
            .optional()?;
        Ok(item)
    }
}

fn row_to_item(row: &Row<'_>) -> rusqlite::Result<ReviewItem> {
    Ok(ReviewItem {
        id: row.get(0)?,
        category: row.get(1)?,
        content: Flashcard {
            term: row.get(2)?,
            reading: row.get(3)?,
            definition: row.get(4)?,
        },
        mastery_level: row.get(5)?,
        correct_count: row.get(6)?,
        incorrect_count: row.get(7)?,
        last_reviewed_at: row.get(8)?,
        next_review_at: row.get(9)?,
    })
}

impl ReviewStore for SqliteStore {
    fn load(&self, ids: &[String]) -> Result<Vec<ReviewItem>> {
        ids.iter()
            .map(|id| {
                self.load_one(id)?
                    .ok_or_else(|| SrsError::ItemNotFound(id.clone()))
            })
            .collect()
    }

    fn load_all(&self) -> Result<Vec<ReviewItem>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM review_items ORDER BY position ASC",
            ITEM_COLUMNS
        ))?;

        let items = stmt
            .query_map([], row_to_item)?
            .collect::<rusqlite::Result<Vec<ReviewItem>>>()?;

        Ok(items)
    }

    /// Writes scheduling state back. Unknown ids are appended to the curriculum.
    fn save(&self, items: &[ReviewItem]) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        for item in items {
            let updated = self.conn.execute(
                "UPDATE review_items
                 SET mastery_level = ?1, correct_count = ?2, incorrect_count = ?3,
                     last_reviewed_at = ?4, next_review_at = ?5
                 WHERE id = ?6",
                params![
                    item.mastery_level,
                    item.correct_count,
                    item.incorrect_count,
                    item.last_reviewed_at,
                    item.next_review_at,
                    item.id,
                ],
            )?;
            if updated == 0 {
                self.add_item(item)?;
            }
        }
        tx.commit()?;

        debug!("Saved {} items", items.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IntervalTable, apply_outcome};
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 4, 1, 9, 0, 0).unwrap()
    }

    fn sample_items() -> Vec<ReviewItem> {
        vec![
            ReviewItem::new(
                "v1",
                "vocabulary",
                Flashcard::new("犬", "dog").with_reading("いぬ"),
            ),
            ReviewItem::new("k1", "kanji", Flashcard::new("木", "tree")),
            ReviewItem::new("v2", "vocabulary", Flashcard::new("学校", "school")),
        ]
    }

    fn store_with_samples() -> SqliteStore {
        let store = SqliteStore::open_in_memory().unwrap();
        store.add_items(&sample_items()).unwrap();
        store
    }

    #[test]
    fn test_load_all_keeps_insertion_order() {
        let store = store_with_samples();
        let items = store.load_all().unwrap();

        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["v1", "k1", "v2"]);
        assert_eq!(items[0].content.reading.as_deref(), Some("いぬ"));
        assert_eq!(items[1].content.reading, None);
        assert!(items.iter().all(|i| i.is_new()));
    }

    #[test]
    fn test_duplicate_add_is_ignored() {
        let store = store_with_samples();
        let added = store.add_items(&sample_items()).unwrap();

        assert_eq!(added, 0);
        assert_eq!(store.count().unwrap(), 3);
    }

    #[test]
    fn test_save_and_load_by_id() {
        let store = store_with_samples();
        let table = IntervalTable::default();

        let items = store.load(&["k1".to_string()]).unwrap();
        let answered = apply_outcome(&items[0], true, t0(), &table);
        store.save(&[answered.clone()]).unwrap();

        let reloaded = store.load(&["v2".to_string(), "k1".to_string()]).unwrap();
        assert_eq!(reloaded[0].id, "v2");
        assert_eq!(reloaded[1], answered);
    }

    #[test]
    fn test_sub_second_timestamps_survive_save() {
        let store = store_with_samples();
        let table = IntervalTable::default();
        let now = t0() + Duration::nanoseconds(750_123_456);

        let items = store.load(&["v1".to_string()]).unwrap();
        let answered = apply_outcome(&items[0], false, now, &table);
        store.save(&[answered.clone()]).unwrap();

        let reloaded = store.load(&["v1".to_string()]).unwrap();
        assert_eq!(reloaded[0].last_reviewed_at, Some(now));
        assert_eq!(reloaded[0], answered);
    }

    #[test]
    fn test_save_appends_unknown_items() {
        let store = store_with_samples();
        let extra = ReviewItem::new("k2", "kanji", Flashcard::new("月", "moon"));
        store.save(&[extra]).unwrap();

        let items = store.load_all().unwrap();
        assert_eq!(items.len(), 4);
        assert_eq!(items[3].id, "k2");
    }

    #[test]
    fn test_load_unknown_id() {
        let store = store_with_samples();
        let result = store.load(&["missing".to_string()]);
        assert!(matches!(result, Err(SrsError::ItemNotFound(id)) if id == "missing"));
    }

    #[test]
    fn test_reset_progress() {
        let store = store_with_samples();
        let table = IntervalTable::default();

        let answered: Vec<ReviewItem> = store
            .load_all()
            .unwrap()
            .iter()
            .map(|i| apply_outcome(i, true, t0(), &table))
            .collect();
        store.save(&answered).unwrap();

        assert_eq!(store.reset_progress(&["v1".to_string()]).unwrap(), 1);
        let items = store.load_all().unwrap();
        assert!(items[0].is_new());
        assert_eq!(items[1].mastery_level, 1);

        assert_eq!(store.reset_all().unwrap(), 3);
        assert!(store.load_all().unwrap().iter().all(|i| i.is_new() && i.correct_count == 0));
    }

    #[test]
    fn test_simulated_dates() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.set_current_date(t0()).unwrap();
        store.set_start_date(t0()).unwrap();

        assert_eq!(store.current_date().unwrap(), t0());
        assert_eq!(store.advance_day().unwrap(), t0() + Duration::hours(24));
        assert_eq!(store.current_date().unwrap(), t0() + Duration::hours(24));
        assert_eq!(store.start_date().unwrap(), t0());
    }

    #[test]
    fn test_corrupt_current_date_is_an_error() {
        let store = SqliteStore::open_in_memory().unwrap();
        store
            .conn
            .execute(
                "UPDATE app_state SET value = 'garbage' WHERE key = 'current_date'",
                (),
            )
            .unwrap();

        let result = store.current_date();
        assert!(matches!(
            result,
            Err(SrsError::CorruptState { key, .. }) if key == "current_date"
        ));
        assert!(store.advance_day().is_err());
        // The other date is untouched
        assert!(store.start_date().is_ok());
    }

    #[test]
    fn test_file_database_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("srs.sqlite3");

        {
            let store = SqliteStore::open(&path).unwrap();
            store.add_items(&sample_items()).unwrap();
        }

        let store = SqliteStore::open(&path).unwrap();
        assert_eq!(store.count().unwrap(), 3);
    }
}
