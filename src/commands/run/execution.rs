//! Cleanup execution logic: the two batch passes.
//!
//! Files first, then directories. A directory cannot be verified empty until
//! its duplicate files have been removed, so the order is load-bearing.

use super::types::{DirOutcome, FileOutcome, RunReport};
use crate::error::{Result, SweepError};
use crate::manifest::Manifest;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Execute both cleanup passes against `root` and return the report.
///
/// Prints one line per removed file, one per removed directory, and one per
/// directory left in place. Missing targets are skipped silently. The first
/// failure that is neither not-found nor not-empty aborts the run: later
/// targets are not attempted.
pub fn execute_run(root: &Path, manifest: &Manifest) -> Result<RunReport> {
    let mut report = RunReport::default();

    for target in &manifest.files {
        match remove_target_file(&root.join(target))? {
            FileOutcome::Removed => {
                println!("Removed file: {}", target);
                report.files_removed += 1;
            }
            FileOutcome::SkippedMissing => {}
        }
    }

    for target in &manifest.directories {
        match remove_target_dir(&root.join(target))? {
            DirOutcome::Removed => {
                println!("Removed directory: {}", target);
                report.dirs_removed += 1;
            }
            DirOutcome::SkippedNotEmpty => {
                println!("Skipped directory (not empty): {}", target);
                report.dirs_not_empty.push(PathBuf::from(target));
            }
            DirOutcome::SkippedMissing => {}
        }
    }

    Ok(report)
}

/// Delete a single target file.
///
/// Not-found is an expected outcome, not an error. Any other failure
/// (permission, I/O) is fatal for the run.
pub fn remove_target_file(path: &Path) -> Result<FileOutcome> {
    match fs::remove_file(path) {
        Ok(()) => Ok(FileOutcome::Removed),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(FileOutcome::SkippedMissing),
        Err(e) => Err(SweepError::RemovalError {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Delete a single target directory.
///
/// Uses the non-recursive remove, so removal succeeds only when the
/// directory is empty. Not-found and not-empty are expected outcomes;
/// any other failure is fatal for the run.
pub fn remove_target_dir(path: &Path) -> Result<DirOutcome> {
    match fs::remove_dir(path) {
        Ok(()) => Ok(DirOutcome::Removed),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(DirOutcome::SkippedMissing),
        Err(e) if e.kind() == ErrorKind::DirectoryNotEmpty => Ok(DirOutcome::SkippedNotEmpty),
        Err(e) => Err(SweepError::RemovalError {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}
