//! Dispatches to the appropriate command handler based on the parsed arguments.
//!
//! # Returns
//! - `Ok(ExitStatus)`: `Success` when a translation was found (or the command
//!   has nothing to find), `Failure` when a lookup missed
//! - `Err` if the command fails (e.g., missing resources directory, bad config)

use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{init::init, interactive::interactive, lookup::lookup, tables::tables},
    exit_status::ExitStatus,
};

pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Lookup(cmd)) => lookup(cmd),
        Some(Command::Interactive(cmd)) => interactive(cmd),
        Some(Command::Tables(cmd)) => tables(cmd),
        Some(Command::Init) => init(),
        Some(Command::Serve) => {
            // Serve command is handled in main.rs before calling run()
            anyhow::bail!("Serve command should be handled before run()")
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
