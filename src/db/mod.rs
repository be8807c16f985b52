//! Persistence layer for the timer application.
//!
//! The tracker talks to storage only through the [`collection::Collection`]
//! trait. Two implementations are provided:
//!
//! - [`time_logs::TimeLogs`]: JSON documents in a SQLite table, used by the CLI
//! - [`memory::MemoryCollection`]: an in-process vector with the same semantics
//!
//! ```rust,no_run
//! use timer::db::time_logs::TimeLogs;
//! use timer::libs::config::Config;
//!
//! let time_logs = TimeLogs::new(&Config::default().storage());
//! ```

/// Storage connection opening and health check.
pub mod db;

/// The document-collection seam between the tracker and storage.
pub mod collection;

/// In-memory collection for tests and embedding.
pub mod memory;

/// SQLite document collection of time logs.
pub mod time_logs;
