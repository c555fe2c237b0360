//! Site workspace location

use std::path::PathBuf;

use crate::error::{Result, workspace};

/// Resolve the site root directory
///
/// An explicit workspace path must exist; without one the current directory
/// is the site root. Missing component roots under the site are not checked
/// here; they just contribute zero fragments.
pub fn find_root(workspace: Option<PathBuf>) -> Result<PathBuf> {
    match workspace {
        Some(path) => {
            if path.is_dir() {
                Ok(dunce::canonicalize(&path).unwrap_or(path))
            } else {
                Err(workspace::not_found(path.display().to_string()))
            }
        }
        None => Ok(std::env::current_dir()?),
    }
}
