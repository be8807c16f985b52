use super::TaskArgs;
use crate::db::collection::Collection;
use crate::libs::messages::Message;
use crate::libs::tracker::Tracker;
use crate::{msg_info, msg_success};
use anyhow::Result;

pub fn cmd(args: TaskArgs, collection: &mut dyn Collection) -> Result<()> {
    let selector = args.selector();
    let paused = Tracker::new(collection).pause(&selector)?;

    if paused == 0 {
        msg_info!(Message::NoSessionsToPause(selector.to_string()));
    } else {
        msg_success!(Message::SessionsPaused(paused, selector.to_string()));
    }
    Ok(())
}
