//! Data types for the run command.

use std::path::PathBuf;

/// Outcome of attempting to remove one target file.
///
/// Anything other than these two cases is not an outcome; it is a fatal
/// error that aborts the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// The file existed and was deleted.
    Removed,
    /// The file was already absent. Expected, skipped silently.
    SkippedMissing,
}

/// Outcome of attempting to remove one target directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirOutcome {
    /// The directory existed, was empty, and was deleted.
    Removed,
    /// The directory still contains entries. Expected; left in place
    /// and reported, not escalated.
    SkippedNotEmpty,
    /// The directory was already absent. Expected, skipped silently.
    SkippedMissing,
}

/// Summary of one cleanup run. Built, printed, and discarded; nothing
/// is persisted between invocations.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Number of target files deleted.
    pub files_removed: usize,
    /// Number of target directories deleted.
    pub dirs_removed: usize,
    /// Directories left in place because they were not empty.
    pub dirs_not_empty: Vec<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_report_default_is_zeroed() {
        let report = RunReport::default();
        assert_eq!(report.files_removed, 0);
        assert_eq!(report.dirs_removed, 0);
        assert!(report.dirs_not_empty.is_empty());
    }
}
