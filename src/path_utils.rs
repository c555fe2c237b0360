//! Cross-platform path utilities for Weft
//!
//! Generated import paths and content globs always use forward slashes,
//! regardless of the platform separator.

use std::path::Path;

/// Render a path with forward slashes
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
