//! CLI argument parsing for dupsweep.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default manifest file name, resolved against the working directory.
pub const DEFAULT_MANIFEST: &str = "dupsweep.yaml";

/// Dupsweep: removes files flagged as duplicates and prunes empty directories.
///
/// An external copy/paste-detection tool produces a manifest of duplicate
/// files; dupsweep deletes them, removes the directories that deletion
/// leaves empty, and prints an advisory of future consolidation candidates.
#[derive(Parser, Debug)]
#[command(name = "dupsweep")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for dupsweep.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Delete duplicate files and prune empty directories.
    ///
    /// Runs the file-removal pass, then the directory-cleanup pass,
    /// prints the consolidation advisory, and reports final counts.
    /// Deletions are unconditional and irreversible; no backup is taken.
    Run(RunArgs),

    /// Preview the manifest against the working tree without deleting.
    ///
    /// Reports which targets currently exist and prints the advisory.
    /// Performs no mutation.
    Plan(PlanArgs),

    /// Write a commented starter manifest to the working directory.
    ///
    /// Refuses to overwrite an existing manifest unless --force is given.
    Init(InitArgs),
}

/// Arguments for the `run` command.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to the cleanup manifest.
    #[arg(long, default_value = DEFAULT_MANIFEST)]
    pub manifest: PathBuf,
}

/// Arguments for the `plan` command.
#[derive(Parser, Debug)]
pub struct PlanArgs {
    /// Path to the cleanup manifest.
    #[arg(long, default_value = DEFAULT_MANIFEST)]
    pub manifest: PathBuf,
}

/// Arguments for the `init` command.
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Path to write the starter manifest to.
    #[arg(long, default_value = DEFAULT_MANIFEST)]
    pub manifest: PathBuf,

    /// Overwrite an existing manifest.
    #[arg(long)]
    pub force: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
