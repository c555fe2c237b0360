//! Site workspace errors

use super::WeftError;

/// Creates a workspace not found error
pub fn not_found(path: impl Into<String>) -> WeftError {
    WeftError::WorkspaceNotFound { path: path.into() }
}
