//! Manifest loading, validation, and utility operations.

use super::model::Manifest;
use crate::error::{Result, SweepError};
use globset::Glob;
use std::path::{Component, Path};

impl Manifest {
    /// Load a manifest from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward
    /// compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Manifest)` - Successfully loaded and validated manifest
    /// * `Err(SweepError::ManifestError)` - Read/parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            SweepError::ManifestError(format!(
                "failed to read manifest '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse a manifest from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let manifest: Manifest = serde_yaml::from_str(yaml)
            .map_err(|e| SweepError::ManifestError(format!("failed to parse manifest YAML: {}", e)))?;

        manifest.validate()?;
        Ok(manifest)
    }

    /// Serialize the manifest to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            SweepError::ManifestError(format!("failed to serialize manifest to YAML: {}", e))
        })
    }

    /// Validate manifest entries and return an error on invalid values.
    ///
    /// Validation rules:
    /// - target paths must be non-empty, relative, and free of `..` components
    /// - consolidation patterns must be well-formed globs
    ///
    /// Validation happens before any deletion, so an invalid manifest never
    /// results in a partially applied run.
    pub fn validate(&self) -> Result<()> {
        for path in self.files.iter().chain(self.directories.iter()) {
            validate_target_path(path)?;
        }

        for hint in &self.consolidations {
            // Compile-only check: catches typos without ever evaluating
            // the pattern against the filesystem.
            Glob::new(&hint.pattern).map_err(|e| {
                SweepError::ManifestError(format!(
                    "invalid consolidation pattern '{}': {}",
                    hint.pattern, e
                ))
            })?;
        }

        Ok(())
    }

    /// True when the manifest names no deletion targets at all.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.directories.is_empty()
    }
}

/// Validate a single target path from the manifest.
fn validate_target_path(path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SweepError::ManifestError(
            "manifest validation failed: target paths must be non-empty".to_string(),
        ));
    }

    let p = Path::new(path);
    if p.is_absolute() {
        return Err(SweepError::ManifestError(format!(
            "manifest validation failed: target path '{}' must be relative to the repository root",
            path
        )));
    }

    if path_contains_traversal(p) {
        return Err(SweepError::ManifestError(format!(
            "manifest validation failed: refusing target path with traversal: '{}'",
            path
        )));
    }

    Ok(())
}

/// Check if a path contains any ".." traversal components.
pub fn path_contains_traversal(path: &Path) -> bool {
    for component in path.components() {
        if let Component::ParentDir = component {
            return true;
        }
    }
    false
}
