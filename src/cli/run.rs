//! Dispatch to the handler of the parsed command.
//!
//! Handlers return `Ok(CommandResult)` with issue counts and exit behavior,
//! or `Err` when the command itself fails (invalid config, unwritable file).

use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::CommandResult,
    commands::{check::check, clean::clean, init::init, lookup::lookup, stats::stats},
};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Stats(cmd)) => stats(cmd),
        Some(Command::Lookup(cmd)) => lookup(cmd),
        Some(Command::Clean(cmd)) => clean(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
