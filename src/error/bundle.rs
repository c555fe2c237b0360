//! Bundle entry errors

use super::WeftError;

/// Creates a stale generated file error
pub fn stale(path: impl Into<String>) -> WeftError {
    WeftError::BundleStale { path: path.into() }
}
