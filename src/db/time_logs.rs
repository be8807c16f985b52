//! SQLite-backed document collection of time logs.
//!
//! Each record is stored as one JSON document keyed by its `_id`, so the
//! persisted shape is exactly the serialized [`TimeLog`]. Filters are
//! evaluated by SQLite over `json_extract` of the document fields, and an
//! expression index on `workType` backs the per-task lookups.
//!
//! Updates read the matching documents, apply the typed [`Update`] and write
//! them back inside a single transaction.
//!
//! ## Usage
//!
//! ```rust
//! use timer::db::time_logs::TimeLogs;
//! use timer::libs::config::StorageConfig;
//!
//! let config = StorageConfig {
//!     database: ":memory:".to_string(),
//!     collection: "timer".to_string(),
//! };
//! let time_logs = TimeLogs::new(&config)?;
//! # Ok::<(), timer::libs::error::TimerError>(())
//! ```

use super::collection::Collection;
use super::db::Db;
use crate::libs::config::StorageConfig;
use crate::libs::error::{StoreError, TimerError};
use crate::libs::query::{Filter, Update};
use crate::libs::time_log::TimeLog;
use rusqlite::{params, params_from_iter, Connection};

/// Database manager for one time-log collection.
pub struct TimeLogs {
    conn: Connection,
    /// Quoted table name of the collection.
    table: String,
}

impl TimeLogs {
    /// Opens the configured database and prepares the collection. Any failure
    /// here happens before a command runs and is reported as unavailable storage.
    pub fn new(config: &StorageConfig) -> Result<TimeLogs, TimerError> {
        let db = Db::new(config)?;
        Self::from_connection(db.conn, &config.collection).map_err(TimerError::StorageUnavailable)
    }

    /// Wraps an open connection, creating the collection table and its
    /// index if they do not exist yet.
    pub fn from_connection(conn: Connection, collection: &str) -> Result<TimeLogs, StoreError> {
        let table = quote_identifier(collection);
        let index = quote_identifier(&format!("idx_{}_work_type", collection));

        conn.execute(
            &format!(
                "CREATE TABLE IF NOT EXISTS {} (
    _id TEXT NOT NULL PRIMARY KEY,
    document TEXT NOT NULL
)",
                table
            ),
            [],
        )?;
        conn.execute(
            &format!(
                "CREATE INDEX IF NOT EXISTS {} ON {} (json_extract(document, '$.workType'))",
                index, table
            ),
            [],
        )?;

        Ok(TimeLogs { conn, table })
    }

    fn update(&mut self, filter: &Filter, update: &Update, first_only: bool) -> Result<usize, StoreError> {
        let tx = self.conn.transaction()?;
        let mut logs = select(&tx, &self.table, filter, first_only)?;
        {
            let mut stmt = tx.prepare(&format!("UPDATE {} SET document = ?1 WHERE _id = ?2", self.table))?;
            for log in logs.iter_mut() {
                update.apply(log);
                stmt.execute(params![serde_json::to_string(log)?, log.id])?;
            }
        }
        tx.commit()?;

        Ok(logs.len())
    }
}

impl Collection for TimeLogs {
    fn insert_one(&mut self, log: &TimeLog) -> Result<(), StoreError> {
        self.conn.execute(
            &format!("INSERT INTO {} (_id, document) VALUES (?1, ?2)", self.table),
            params![log.id, serde_json::to_string(log)?],
        )?;

        Ok(())
    }

    fn update_many(&mut self, filter: &Filter, update: &Update) -> Result<usize, StoreError> {
        self.update(filter, update, false)
    }

    fn update_one(&mut self, filter: &Filter, update: &Update) -> Result<usize, StoreError> {
        self.update(filter, update, true)
    }

    fn find(&self, filter: &Filter) -> Result<Vec<TimeLog>, StoreError> {
        select(&self.conn, &self.table, filter, false)
    }
}

/// Loads the documents matching `filter` in insertion order.
fn select(conn: &Connection, table: &str, filter: &Filter, first_only: bool) -> Result<Vec<TimeLog>, StoreError> {
    let (predicate, values) = filter.to_sql();
    let mut sql = format!("SELECT document FROM {} WHERE {} ORDER BY rowid", table, predicate);
    if first_only {
        sql.push_str(" LIMIT 1");
    }

    let mut stmt = conn.prepare(&sql)?;
    let documents = stmt.query_map(params_from_iter(values.iter()), |row| row.get::<_, String>(0))?;
    let mut logs = Vec::new();
    for document in documents {
        logs.push(serde_json::from_str(&document?)?);
    }

    Ok(logs)
}

fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
