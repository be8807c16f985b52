//! Starts a new work session.

use crate::db::collection::Collection;
use crate::libs::messages::Message;
use crate::libs::tracker::Tracker;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Name of the task to start working on
    pub task: Option<String>,
}

/// Creates a `STARTED` session for the task. Fails without touching storage
/// when the task name is missing or empty.
pub fn cmd(add_args: AddArgs, collection: &mut dyn Collection) -> Result<()> {
    let task = add_args.task.unwrap_or_default();
    let log = Tracker::new(collection).add(&task)?;

    msg_success!(Message::SessionStarted(log.work_type));
    Ok(())
}
