//! Core library modules for the timer application.
//!
//! - **State machine**: [`tracker`], [`query`], [`time_log`]
//! - **Infrastructure**: [`config`], [`data_storage`], [`messages`], [`error`]

pub mod config;
pub mod data_storage;
pub mod error;
pub mod messages;
pub mod query;
pub mod time_log;
pub mod tracker;
