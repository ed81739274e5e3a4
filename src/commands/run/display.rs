//! Display and formatting utilities for run command output.

use super::types::RunReport;
use crate::manifest::ConsolidationHint;

/// Print the consolidation advisory block.
///
/// The hints are manifest data printed verbatim. Nothing here touches the
/// filesystem or evaluates the patterns.
pub fn print_advisory(hints: &[ConsolidationHint]) {
    if hints.is_empty() {
        return;
    }

    println!();
    println!(
        "Consolidation candidates ({}), manual follow-up only, not executed:",
        hints.len()
    );
    for hint in hints {
        println!("  pattern: {}", hint.pattern);
        println!("  target:  {}", hint.target);
        if !hint.note.is_empty() {
            println!("  note:    {}", hint.note);
        }
        println!();
    }
}

/// Print the final summary with the two counters.
pub fn print_summary(report: &RunReport) {
    println!();
    println!("Cleanup complete:");
    println!("  Files removed:       {}", report.files_removed);
    println!("  Directories removed: {}", report.dirs_removed);
    if !report.dirs_not_empty.is_empty() {
        println!(
            "  Directories left in place (not empty): {}",
            report.dirs_not_empty.len()
        );
        for path in &report.dirs_not_empty {
            println!("    - {}", path.display());
        }
    }
}
