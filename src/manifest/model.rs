//! Manifest struct definition and default implementation.

use serde::{Deserialize, Serialize};

/// The cleanup manifest, parsed from `dupsweep.yaml`.
///
/// Paths are relative to the working directory at invocation time, which is
/// assumed to be the repository root. Unknown fields in the YAML are ignored
/// for forward compatibility.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Files flagged as duplicates, to be deleted if present.
    pub files: Vec<String>,

    /// Directories expected to become empty once their duplicate files
    /// are deleted. Removed only if actually empty.
    pub directories: Vec<String>,

    /// Consolidation candidates for future manual merging. Purely
    /// informational: printed, never resolved against the filesystem.
    pub consolidations: Vec<ConsolidationHint>,
}

/// A described-but-unexecuted consolidation candidate.
///
/// The pattern is validated as a well-formed glob at load time but is never
/// matched against the tree, so the advisory stays inert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsolidationHint {
    /// Glob pattern describing the files that could be merged.
    pub pattern: String,

    /// Where the merged result should live.
    pub target: String,

    /// Freeform note for the person doing the merge.
    #[serde(default)]
    pub note: String,
}
