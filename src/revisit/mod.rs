//! Time-windowed revisit tracking backed by SQLite.
//!
//! An append-only log of (url, submitted_at) pairs that survives process
//! restarts. A URL is "returning" when any record for the exact same
//! string is younger than 24 hours. Stale records are purged lazily before
//! each decision rather than by a background sweep. The clock is always an
//! argument, never read internally, so every decision is a pure function
//! of (now, log).

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use rusqlite::Connection;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// One logged URL submission.
#[derive(Debug, Clone, Serialize)]
pub struct RevisitRecord {
    pub url: String,
    pub submitted_at: DateTime<Utc>,
}

/// How long a submission counts as "recent".
pub fn revisit_window() -> Duration {
    Duration::hours(24)
}

/// Append-only revisit log. Callers needing purge+check+record as one
/// atomic unit go through [`RevisitStore::observe`]; `&mut self` serializes
/// access within a process.
pub struct RevisitStore {
    db: Connection,
}

impl RevisitStore {
    /// Open or create a revisit log at the given path.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let db = Connection::open(path)
            .with_context(|| format!("failed to open revisit log: {}", path.display()))?;
        Self::init(db)
    }

    /// In-memory store, used by tests and `--db :memory:`-style setups.
    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    /// Open the default log at ~/.pagelens/visits.db.
    pub fn default_store() -> Result<Self> {
        let path = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("/tmp"))
            .join(".pagelens")
            .join("visits.db");
        Self::open(&path)
    }

    fn init(db: Connection) -> Result<Self> {
        db.execute_batch(
            "CREATE TABLE IF NOT EXISTS visits (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                url TEXT NOT NULL,
                submitted_at INTEGER NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_visits_url ON visits(url);",
        )
        .context("failed to create visits table")?;
        Ok(Self { db })
    }

    /// Append a submission record.
    pub fn record(&mut self, url: &str, now: DateTime<Utc>) -> Result<()> {
        self.db.execute(
            "INSERT INTO visits (url, submitted_at) VALUES (?1, ?2)",
            rusqlite::params![url, now.timestamp_millis()],
        )?;
        Ok(())
    }

    /// True iff a record for this exact string is younger than 24 hours.
    /// No URL normalization: `http://x.com` and `http://x.com/` differ.
    pub fn is_returning(&self, url: &str, now: DateTime<Utc>) -> Result<bool> {
        let cutoff = (now - revisit_window()).timestamp_millis();
        let seen: bool = self.db.query_row(
            "SELECT EXISTS(SELECT 1 FROM visits WHERE url = ?1 AND submitted_at > ?2)",
            rusqlite::params![url, cutoff],
            |row| row.get(0),
        )?;
        Ok(seen)
    }

    /// Delete every record aged 24 hours or more. Returns how many went.
    pub fn purge(&mut self, now: DateTime<Utc>) -> Result<usize> {
        let cutoff = (now - revisit_window()).timestamp_millis();
        let removed = self.db.execute(
            "DELETE FROM visits WHERE submitted_at <= ?1",
            rusqlite::params![cutoff],
        )?;
        Ok(removed)
    }

    /// Purge, answer "was this URL already submitted recently", then record
    /// the current submission — in that order, so a URL never sees its own
    /// submission on first contact.
    pub fn observe(&mut self, url: &str, now: DateTime<Utc>) -> Result<bool> {
        self.purge(now)?;
        let returning = self.is_returning(url, now)?;
        self.record(url, now)?;
        Ok(returning)
    }

    /// All records in insertion order.
    pub fn entries(&self) -> Result<Vec<RevisitRecord>> {
        let mut stmt = self
            .db
            .prepare("SELECT url, submitted_at FROM visits ORDER BY id")?;
        let rows = stmt
            .query_map([], |row| {
                let url: String = row.get(0)?;
                let millis: i64 = row.get(1)?;
                Ok((url, millis))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(rows
            .into_iter()
            .map(|(url, millis)| RevisitRecord {
                url,
                submitted_at: DateTime::from_timestamp_millis(millis).unwrap_or_default(),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_first_submission_is_not_returning() {
        let mut store = RevisitStore::open_in_memory().unwrap();
        assert!(!store.observe("https://example.com", at(9)).unwrap());
    }

    #[test]
    fn test_second_submission_within_window_is_returning() {
        let mut store = RevisitStore::open_in_memory().unwrap();
        store.observe("https://example.com", at(9)).unwrap();
        assert!(store.observe("https://example.com", at(10)).unwrap());
    }

    #[test]
    fn test_different_url_is_not_returning() {
        let mut store = RevisitStore::open_in_memory().unwrap();
        store.observe("https://example.com", at(9)).unwrap();
        assert!(!store.observe("https://other.com", at(10)).unwrap());
    }

    #[test]
    fn test_exact_string_matching_no_normalization() {
        let mut store = RevisitStore::open_in_memory().unwrap();
        store.observe("http://x.com", at(9)).unwrap();
        assert!(!store.observe("http://x.com/", at(10)).unwrap());
    }

    #[test]
    fn test_expired_records_do_not_count() {
        let mut store = RevisitStore::open_in_memory().unwrap();
        let day_one = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
        let day_two = Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap();
        store.observe("https://example.com", day_one).unwrap();
        // Exactly 24h later: age >= 24h, so not returning.
        assert!(!store.observe("https://example.com", day_two).unwrap());
    }

    #[test]
    fn test_purge_removes_stale_entries_only() {
        let mut store = RevisitStore::open_in_memory().unwrap();
        let day_one = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
        let day_two = Utc.with_ymd_and_hms(2026, 3, 2, 8, 0, 0).unwrap();
        store.record("https://old.com", day_one).unwrap();
        store.record("https://fresh.com", day_two).unwrap();

        let removed = store
            .purge(Utc.with_ymd_and_hms(2026, 3, 2, 10, 0, 0).unwrap())
            .unwrap();
        assert_eq!(removed, 1);

        let entries = store.entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].url, "https://fresh.com");
    }

    #[test]
    fn test_multiple_records_per_url_allowed() {
        let mut store = RevisitStore::open_in_memory().unwrap();
        store.record("https://example.com", at(9)).unwrap();
        store.record("https://example.com", at(10)).unwrap();
        assert_eq!(store.entries().unwrap().len(), 2);
    }

    #[test]
    fn test_log_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("visits.db");

        {
            let mut store = RevisitStore::open(&path).unwrap();
            store.observe("https://example.com", at(9)).unwrap();
        }

        let mut store = RevisitStore::open(&path).unwrap();
        assert!(store.observe("https://example.com", at(10)).unwrap());
    }
}
