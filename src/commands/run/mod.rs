//! Implementation of the `dupsweep run` command.
//!
//! Performs the cleanup in two strictly ordered passes:
//! - File pass: delete every manifest file that exists (no confirmation,
//!   no trash; absent targets are skipped silently)
//! - Directory pass: remove every manifest directory that is now empty
//!   (non-empty directories are reported and left in place)
//!
//! Then prints the consolidation advisory and a summary with final counts.
//!
//! # Failure policy
//!
//! Not-found and not-empty are expected outcomes. Any other deletion failure
//! aborts the run at that target with a non-zero exit; later targets are
//! not attempted and the directory pass does not run.

pub(super) mod display;
mod execution;
mod types;


use crate::cli::RunArgs;
use crate::error::{Result, SweepError};
use crate::manifest::Manifest;

use display::{print_advisory, print_summary};
use execution::execute_run;

/// Execute the `dupsweep run` command.
pub fn cmd_run(args: RunArgs) -> Result<()> {
    let manifest = Manifest::load(&args.manifest)?;

    let root = std::env::current_dir().map_err(|e| {
        SweepError::UserError(format!("failed to resolve working directory: {}", e))
    })?;

    if manifest.is_empty() && manifest.consolidations.is_empty() {
        println!("Nothing to do: manifest names no targets.");
        return Ok(());
    }

    let report = execute_run(&root, &manifest)?;

    print_advisory(&manifest.consolidations);
    print_summary(&report);

    Ok(())
}
