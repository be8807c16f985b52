pub mod add;
pub mod init;
pub mod pause;
pub mod resume;
pub mod stop;

use crate::db::collection::Collection;
use crate::db::time_logs::TimeLogs;
use crate::libs::config::Config;
use crate::libs::query::TaskSelector;
use anyhow::Result;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Storage configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Start work on a task", visible_alias = "a")]
    Add(add::AddArgs),
    #[command(about = "Pause running sessions of a task, or of all tasks", visible_alias = "p")]
    Pause(TaskArgs),
    #[command(about = "Resume paused sessions of a task, or of all tasks", visible_alias = "r")]
    Resume(TaskArgs),
    #[command(about = "Stop the first open session of a task, or of any task", visible_alias = "s")]
    Stop(TaskArgs),
}

#[derive(Debug, Parser)]
#[command(name = "timer", author, version, about = "A simple CLI application to log the time spent on specific tasks", long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Task-name argument shared by `pause`, `resume` and `stop`.
#[derive(Debug, Args)]
pub struct TaskArgs {
    /// Task name; omit it (or pass `@`) to target every task
    pub task: Option<String>,
}

impl TaskArgs {
    pub fn selector(&self) -> TaskSelector {
        TaskSelector::from_arg(self.task.as_deref())
    }
}

impl Cli {
    pub fn menu() -> Result<()> {
        Self::parse().run()
    }

    /// Routes the parsed command. Tracking commands open storage once before
    /// running, so an unreachable database aborts before anything executes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => with_time_logs(|time_logs| add::cmd(args, time_logs)),
            Commands::Pause(args) => with_time_logs(|time_logs| pause::cmd(args, time_logs)),
            Commands::Resume(args) => with_time_logs(|time_logs| resume::cmd(args, time_logs)),
            Commands::Stop(args) => with_time_logs(|time_logs| stop::cmd(args, time_logs)),
        }
    }
}

/// Opens the configured collection and hands it to `command`. Opening may
/// create the database file and table, but no record is written until the
/// command itself succeeds in validating its arguments.
fn with_time_logs(command: impl FnOnce(&mut dyn Collection) -> Result<()>) -> Result<()> {
    let storage = Config::read()?.storage();
    let mut time_logs = TimeLogs::new(&storage)?;
    command(&mut time_logs)
}
