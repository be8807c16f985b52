//! # Timer
//!
//! A command-line utility to log the time spent on specific tasks.
//!
//! Work sessions are started with `add`, then paused, resumed and stopped by
//! task name. Every session is persisted as a time-log document in a local
//! SQLite database.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use timer::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;

#[doc(hidden)]
pub use tracing;
