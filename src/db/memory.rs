//! In-process collection with the same semantics as the SQLite one.

use super::collection::Collection;
use crate::libs::error::StoreError;
use crate::libs::query::{Filter, Update};
use crate::libs::time_log::TimeLog;

#[derive(Debug, Default, Clone)]
pub struct MemoryCollection {
    logs: Vec<TimeLog>,
}

impl MemoryCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.logs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.logs.is_empty()
    }
}

impl Collection for MemoryCollection {
    fn insert_one(&mut self, log: &TimeLog) -> Result<(), StoreError> {
        self.logs.push(log.clone());
        Ok(())
    }

    fn update_many(&mut self, filter: &Filter, update: &Update) -> Result<usize, StoreError> {
        let mut modified = 0;
        for log in self.logs.iter_mut().filter(|log| filter.matches(log)) {
            update.apply(log);
            modified += 1;
        }
        Ok(modified)
    }

    fn update_one(&mut self, filter: &Filter, update: &Update) -> Result<usize, StoreError> {
        match self.logs.iter_mut().find(|log| filter.matches(log)) {
            Some(log) => {
                update.apply(log);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    fn find(&self, filter: &Filter) -> Result<Vec<TimeLog>, StoreError> {
        Ok(self.logs.iter().filter(|log| filter.matches(log)).cloned().collect())
    }
}
