//! Storage configuration initialization command.

use crate::{
    libs::{config::Config, messages::Message},
    msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove existing configuration instead of creating new one
    #[arg(short, long)]
    delete: bool,
}

/// Runs the interactive storage setup, or removes the configuration file
/// when `--delete` is given.
pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.delete {
        if Config::delete_at(&Config::path()?)? {
            msg_success!(Message::ConfigDeleted);
        } else {
            msg_warning!(Message::ConfigNotFound);
        }
        return Ok(());
    }

    Config::init()?.save()?;
    msg_success!(Message::ConfigSaved);
    Ok(())
}
