//! Implementation of the `dupsweep init` command.
//!
//! Writes a commented starter manifest so a duplicate-detection report can
//! be transcribed into it. Refuses to overwrite an existing manifest
//! unless `--force` is given.

use crate::cli::InitArgs;
use crate::error::{Result, SweepError};

/// Starter manifest content.
const MANIFEST_TEMPLATE: &str = "\
# dupsweep cleanup manifest.
#
# Produced from the report of a duplicate-detection tool. All paths are
# relative to the repository root (the directory dupsweep is run from).

# Files flagged as duplicates. Deleted if present; missing entries are
# skipped silently.
files: []

# Directories expected to be empty once the files above are gone.
# Removed only if actually empty.
directories: []

# Future consolidation candidates. Informational only; printed by
# `dupsweep run` but never executed.
#
# consolidations:
#   - pattern: \"packages/*/src/validation.ts\"
#     target: \"shared validation module\"
#     note: \"merge after API review\"
consolidations: []
";

/// Execute the `dupsweep init` command.
pub fn cmd_init(args: InitArgs) -> Result<()> {
    if args.manifest.exists() && !args.force {
        return Err(SweepError::UserError(format!(
            "manifest '{}' already exists.\n\n\
             Refusing to overwrite it; existing target lists are easy to lose.\n\
             To replace it, run:\n  dupsweep init --force",
            args.manifest.display()
        )));
    }

    std::fs::write(&args.manifest, MANIFEST_TEMPLATE).map_err(|e| {
        SweepError::UserError(format!(
            "failed to write manifest '{}': {}",
            args.manifest.display(),
            e
        ))
    })?;

    println!("Wrote starter manifest: {}", args.manifest.display());
    println!("Fill in `files` and `directories`, then run `dupsweep run`.");

    Ok(())
}
