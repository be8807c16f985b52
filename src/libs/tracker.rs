//! Task state machine: start, pause, resume and stop work sessions.
//!
//! Each operation issues exactly one call to the [`Collection`] it borrows:
//!
//! | Operation | Selects                                   | Effect                          | Call          |
//! |-----------|-------------------------------------------|---------------------------------|---------------|
//! | `add`     | nothing                                   | new `STARTED` session           | `insert_one`  |
//! | `pause`   | every session of the task not `STOPPED`   | `PAUSED`, push `pausedTime`     | `update_many` |
//! | `resume`  | every `PAUSED` session of the task        | `STARTED`, push `resumeTime`    | `update_many` |
//! | `stop`    | the first session of the task not `STOPPED` | `STOPPED`, set `endTime`      | `update_one`  |
//!
//! Pausing also matches sessions that are already paused, so repeated pauses
//! keep appending timestamps. Stopping closes a single session even when
//! several open sessions share the task name.
//!
//! ## Usage
//!
//! ```rust
//! use timer::db::memory::MemoryCollection;
//! use timer::libs::query::TaskSelector;
//! use timer::libs::tracker::Tracker;
//!
//! let mut sessions = MemoryCollection::new();
//! let mut tracker = Tracker::new(&mut sessions);
//! tracker.add("write-report")?;
//! tracker.pause(&TaskSelector::Named("write-report".to_string()))?;
//! # Ok::<(), timer::libs::error::TimerError>(())
//! ```

use crate::db::collection::Collection;
use crate::libs::error::TimerError;
use crate::libs::messages::Message;
use crate::libs::query::{Filter, TaskSelector, Update};
use crate::libs::time_log::TimeLog;
use crate::msg_debug;
use chrono::{DateTime, Utc};

/// Source of the timestamps written into sessions.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// Wall-clock time in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

pub struct Tracker<'a> {
    collection: &'a mut dyn Collection,
    clock: Box<dyn Clock + 'a>,
}

impl<'a> Tracker<'a> {
    pub fn new(collection: &'a mut dyn Collection) -> Self {
        Self::with_clock(collection, SystemClock)
    }

    pub fn with_clock(collection: &'a mut dyn Collection, clock: impl Clock + 'a) -> Self {
        Tracker {
            collection,
            clock: Box::new(clock),
        }
    }

    /// Starts a new session for `task_name` and returns the stored record.
    /// The name is stored as given; a blank name is rejected before any write.
    pub fn add(&mut self, task_name: &str) -> Result<TimeLog, TimerError> {
        if task_name.trim().is_empty() {
            return Err(TimerError::InvalidArgument(Message::EmptyTaskName));
        }

        let log = TimeLog::start(task_name, self.clock.now());
        self.collection.insert_one(&log)?;
        msg_debug!("inserted session {} for '{}'", log.id, log.work_type);
        Ok(log)
    }

    /// Pauses every session of `selector` that is not stopped. Returns the
    /// number of modified sessions.
    pub fn pause(&mut self, selector: &TaskSelector) -> Result<usize, TimerError> {
        let filter = Filter::not_stopped(selector.clone());
        let modified = self.collection.update_many(&filter, &Update::pause(self.clock.now()))?;
        msg_debug!("paused {} session(s) matching {}", modified, filter);
        Ok(modified)
    }

    /// Resumes every paused session of `selector`.
    pub fn resume(&mut self, selector: &TaskSelector) -> Result<usize, TimerError> {
        let filter = Filter::paused(selector.clone());
        let modified = self.collection.update_many(&filter, &Update::resume(self.clock.now()))?;
        msg_debug!("resumed {} session(s) matching {}", modified, filter);
        Ok(modified)
    }

    /// Stops the first open session of `selector`. Returns `false` when no
    /// session matched.
    pub fn stop(&mut self, selector: &TaskSelector) -> Result<bool, TimerError> {
        let filter = Filter::not_stopped(selector.clone());
        let modified = self.collection.update_one(&filter, &Update::stop(self.clock.now()))?;
        msg_debug!("stopped {} session(s) matching {}", modified, filter);
        Ok(modified > 0)
    }
}
