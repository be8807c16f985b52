//! Time-log records and their lifecycle status.
//!
//! A [`TimeLog`] is one tracked work session for a task. It is created by
//! `add`, mutated in place by `pause`, `resume` and `stop`, and never deleted.
//! The serialized field names are the storage contract of the collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Lifecycle state of a work session.
///
/// `Started` is the initial state and `Stopped` is terminal:
///
/// ```text
/// STARTED ──pause──▶ PAUSED ──resume──▶ STARTED ── … ──stop──▶ STOPPED
/// ```
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Started,
    Paused,
    Stopped,
}

impl Status {
    /// The string stored in the `status` field of a document.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Started => "STARTED",
            Status::Paused => "PAUSED",
            Status::Stopped => "STOPPED",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One record per task-work session.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimeLog {
    /// Unique, time-ordered identifier assigned at creation.
    #[serde(rename = "_id")]
    pub id: String,
    pub created_at: DateTime<Utc>,
    /// Refreshed by every update applied to the record.
    pub updated_at: DateTime<Utc>,
    pub start_time: DateTime<Utc>,
    /// Absent until the session is stopped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    /// One timestamp per applied pause, append-only.
    #[serde(rename = "pausedTime", default)]
    pub paused_times: Vec<DateTime<Utc>>,
    /// One timestamp per applied resume, append-only.
    #[serde(rename = "resumeTime", default)]
    pub resume_times: Vec<DateTime<Utc>>,
    pub status: Status,
    /// Task name used as the grouping key for pause, resume and stop.
    pub work_type: String,
}

impl TimeLog {
    /// Creates a freshly started session for `work_type` at `now`.
    pub fn start(work_type: &str, now: DateTime<Utc>) -> Self {
        TimeLog {
            id: Uuid::now_v7().simple().to_string(),
            created_at: now,
            updated_at: now,
            start_time: now,
            end_time: None,
            paused_times: Vec::new(),
            resume_times: Vec::new(),
            status: Status::Started,
            work_type: work_type.to_string(),
        }
    }
}
