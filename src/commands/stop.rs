use super::TaskArgs;
use crate::db::collection::Collection;
use crate::libs::messages::Message;
use crate::libs::tracker::Tracker;
use crate::{msg_info, msg_success};
use anyhow::Result;

/// Stops one open session. Repeating the command on an already stopped task
/// reports that nothing matched and still succeeds.
pub fn cmd(args: TaskArgs, collection: &mut dyn Collection) -> Result<()> {
    let selector = args.selector();

    if Tracker::new(collection).stop(&selector)? {
        msg_success!(Message::SessionStopped(selector.to_string()));
    } else {
        msg_info!(Message::NoSessionToStop(selector.to_string()));
    }
    Ok(())
}
