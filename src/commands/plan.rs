//! Implementation of the `dupsweep plan` command.
//!
//! Read-only preview: loads and validates the manifest, reports which
//! targets currently exist on disk, and prints the consolidation advisory.
//! Performs no mutation.

use super::run::display::print_advisory;
use crate::cli::PlanArgs;
use crate::error::{Result, SweepError};
use crate::manifest::Manifest;

/// Execute the `dupsweep plan` command.
pub fn cmd_plan(args: PlanArgs) -> Result<()> {
    let manifest = Manifest::load(&args.manifest)?;

    let root = std::env::current_dir().map_err(|e| {
        SweepError::UserError(format!("failed to resolve working directory: {}", e))
    })?;

    if manifest.is_empty() && manifest.consolidations.is_empty() {
        println!("Nothing to do: manifest names no targets.");
        return Ok(());
    }

    println!("Cleanup plan from '{}':", args.manifest.display());

    if !manifest.files.is_empty() {
        println!();
        println!("Duplicate files ({}):", manifest.files.len());
        for target in &manifest.files {
            if root.join(target).is_file() {
                println!("  - {}", target);
            } else {
                println!("  - {} (missing, will be skipped)", target);
            }
        }
    }

    if !manifest.directories.is_empty() {
        println!();
        println!("Directories ({}):", manifest.directories.len());
        for target in &manifest.directories {
            if root.join(target).is_dir() {
                println!("  - {} (removed only if empty after the file pass)", target);
            } else {
                println!("  - {} (missing, will be skipped)", target);
            }
        }
    }

    print_advisory(&manifest.consolidations);

    println!();
    println!("Plan only: no changes made.");
    println!("Run `dupsweep run` to perform the cleanup.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::DirGuard;
    use serial_test::serial;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    #[serial]
    fn plan_mutates_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let _guard = DirGuard::new(temp_dir.path());

        std::fs::create_dir(temp_dir.path().join("a")).unwrap();
        std::fs::write(temp_dir.path().join("a/b.txt"), "dup").unwrap();
        std::fs::write(
            temp_dir.path().join("dupsweep.yaml"),
            "files:\n  - a/b.txt\ndirectories:\n  - a\n",
        )
        .unwrap();

        let args = PlanArgs {
            manifest: PathBuf::from("dupsweep.yaml"),
        };
        cmd_plan(args).unwrap();

        // Everything is still in place.
        assert!(temp_dir.path().join("a/b.txt").exists());
        assert!(temp_dir.path().join("a").exists());
    }

    #[test]
    #[serial]
    fn plan_fails_on_missing_manifest() {
        let temp_dir = TempDir::new().unwrap();
        let _guard = DirGuard::new(temp_dir.path());

        let args = PlanArgs {
            manifest: PathBuf::from("dupsweep.yaml"),
        };
        let err = cmd_plan(args).unwrap_err();
        assert_eq!(err.exit_code(), crate::exit_codes::USER_ERROR);
    }
}
