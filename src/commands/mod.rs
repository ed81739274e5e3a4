//! Command implementations for dupsweep.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod init;
mod plan;
mod run;

use crate::cli::Command;
use crate::error::Result;

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. Each command
/// is routed to its handler function.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Run(args) => run::cmd_run(args),
        Command::Plan(args) => plan::cmd_plan(args),
        Command::Init(args) => init::cmd_init(args),
    }
}
