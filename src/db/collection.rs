use crate::libs::error::StoreError;
use crate::libs::query::{Filter, Update};
use crate::libs::time_log::TimeLog;

/// A document collection of time-log records.
///
/// Implementations keep records in insertion order: `update_one` modifies the
/// first matching record and `find` returns records oldest first.
pub trait Collection {
    fn insert_one(&mut self, log: &TimeLog) -> Result<(), StoreError>;

    /// Applies `update` to every record matching `filter` and returns the
    /// number of modified records.
    fn update_many(&mut self, filter: &Filter, update: &Update) -> Result<usize, StoreError>;

    /// Applies `update` to the first record matching `filter`. Returns 0 or 1.
    fn update_one(&mut self, filter: &Filter, update: &Update) -> Result<usize, StoreError>;

    fn find(&self, filter: &Filter) -> Result<Vec<TimeLog>, StoreError>;
}
