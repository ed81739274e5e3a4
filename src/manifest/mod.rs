//! Cleanup manifest model for dupsweep.
//!
//! This module defines the Manifest struct that represents `dupsweep.yaml`,
//! the target list produced by an external duplicate-detection tool.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! and validation of target paths and consolidation patterns.

mod model;
mod operations;


// Re-export public API
pub use model::{ConsolidationHint, Manifest};
pub use operations::path_contains_traversal;
