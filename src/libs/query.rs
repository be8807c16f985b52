//! Typed filters and updates issued against the time-log collection.
//!
//! Every tracking command is expressed as one [`Filter`] paired with one
//! [`Update`]. A filter can be evaluated directly against a [`TimeLog`] or
//! rendered as a parameterised SQL predicate over the stored JSON document,
//! so both collection backends select exactly the same records.
//!
//! ## Usage
//!
//! ```rust
//! use chrono::Utc;
//! use timer::libs::query::{Filter, TaskSelector, Update};
//!
//! let filter = Filter::not_stopped(TaskSelector::from_arg(Some("write-report")));
//! let update = Update::pause(Utc::now());
//! ```

use crate::libs::time_log::{Status, TimeLog};
use chrono::{DateTime, Utc};
use std::fmt;

/// Reserved task name meaning "every task".
pub const ALL_TASKS: &str = "@";

/// JSON paths of the queried document fields.
const WORK_TYPE_PATH: &str = "json_extract(document, '$.workType')";
const STATUS_PATH: &str = "json_extract(document, '$.status')";

/// Which sessions a command applies to, by task name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskSelector {
    /// Every session regardless of its task name.
    All,
    /// Sessions whose `workType` equals the given name.
    Named(String),
}

impl TaskSelector {
    /// Resolves a command-line argument. An omitted or empty argument and the
    /// `@` sentinel both select every task.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None | Some(ALL_TASKS) => TaskSelector::All,
            Some(name) if name.trim().is_empty() => TaskSelector::All,
            Some(name) => TaskSelector::Named(name.to_string()),
        }
    }

    pub fn matches(&self, work_type: &str) -> bool {
        match self {
            TaskSelector::All => true,
            TaskSelector::Named(name) => name == work_type,
        }
    }
}

impl fmt::Display for TaskSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskSelector::All => f.write_str("all tasks"),
            TaskSelector::Named(name) => write!(f, "'{}'", name),
        }
    }
}

/// Constraint on the `status` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCondition {
    Any,
    Is(Status),
    IsNot(Status),
}

impl StatusCondition {
    pub fn matches(&self, status: Status) -> bool {
        match self {
            StatusCondition::Any => true,
            StatusCondition::Is(expected) => status == *expected,
            StatusCondition::IsNot(excluded) => status != *excluded,
        }
    }
}

/// Selection of stored sessions: `workType` AND `status`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub work_type: TaskSelector,
    pub status: StatusCondition,
}

impl Filter {
    /// Sessions that have not been stopped yet, paused ones included.
    pub fn not_stopped(work_type: TaskSelector) -> Self {
        Filter {
            work_type,
            status: StatusCondition::IsNot(Status::Stopped),
        }
    }

    /// Sessions that are currently paused.
    pub fn paused(work_type: TaskSelector) -> Self {
        Filter {
            work_type,
            status: StatusCondition::Is(Status::Paused),
        }
    }

    /// Sessions in any state.
    pub fn any(work_type: TaskSelector) -> Self {
        Filter {
            work_type,
            status: StatusCondition::Any,
        }
    }

    pub fn matches(&self, log: &TimeLog) -> bool {
        self.work_type.matches(&log.work_type) && self.status.matches(log.status)
    }

    /// Renders the filter as a SQL `WHERE` predicate over the `document`
    /// column together with its positional parameters.
    pub fn to_sql(&self) -> (String, Vec<String>) {
        let mut clauses = Vec::new();
        let mut params = Vec::new();

        if let TaskSelector::Named(name) = &self.work_type {
            clauses.push(format!("{} = ?", WORK_TYPE_PATH));
            params.push(name.clone());
        }

        match self.status {
            StatusCondition::Any => {}
            StatusCondition::Is(status) => {
                clauses.push(format!("{} = ?", STATUS_PATH));
                params.push(status.as_str().to_string());
            }
            StatusCondition::IsNot(status) => {
                clauses.push(format!("{} != ?", STATUS_PATH));
                params.push(status.as_str().to_string());
            }
        }

        if clauses.is_empty() {
            return ("1 = 1".to_string(), params);
        }
        (clauses.join(" AND "), params)
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            StatusCondition::Any => write!(f, "{}", self.work_type),
            StatusCondition::Is(status) => write!(f, "{} with status {}", self.work_type, status),
            StatusCondition::IsNot(status) => write!(f, "{} with status other than {}", self.work_type, status),
        }
    }
}

/// Timestamp appended to one of the session's sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Push {
    PausedTime(DateTime<Utc>),
    ResumeTime(DateTime<Utc>),
}

/// Mutation applied to every session selected by a [`Filter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    pub status: Status,
    pub push: Option<Push>,
    pub end_time: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

impl Update {
    pub fn pause(now: DateTime<Utc>) -> Self {
        Update {
            status: Status::Paused,
            push: Some(Push::PausedTime(now)),
            end_time: None,
            updated_at: now,
        }
    }

    pub fn resume(now: DateTime<Utc>) -> Self {
        Update {
            status: Status::Started,
            push: Some(Push::ResumeTime(now)),
            end_time: None,
            updated_at: now,
        }
    }

    pub fn stop(now: DateTime<Utc>) -> Self {
        Update {
            status: Status::Stopped,
            push: None,
            end_time: Some(now),
            updated_at: now,
        }
    }

    pub fn apply(&self, log: &mut TimeLog) {
        log.status = self.status;
        match self.push {
            Some(Push::PausedTime(at)) => log.paused_times.push(at),
            Some(Push::ResumeTime(at)) => log.resume_times.push(at),
            None => {}
        }
        if let Some(end) = self.end_time {
            log.end_time = Some(end);
        }
        log.updated_at = self.updated_at;
    }
}
