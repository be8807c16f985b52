use std::process::ExitCode;
use timer::commands::Cli;
use timer::libs::messages::{macros::is_debug_mode, Message};
use timer::msg_error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
            .with_target(false)
            .init();
    }

    match Cli::menu() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            msg_error!(Message::CommandFailed(error.to_string()));
            ExitCode::FAILURE
        }
    }
}
