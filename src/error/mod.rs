//! Error types and handling for Weft
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`pattern`]: Path pattern configuration errors
//! - [`bundle`]: Bundle entry errors
//! - [`workspace`]: Site workspace errors
//! - [`fs`]: File system errors

// Declare submodules
pub mod bundle;
pub mod fs;
pub mod pattern;
pub mod workspace;

// Re-export convenience constructors from submodules (used in tests only)
#[allow(unused_imports)]
pub use bundle::stale as bundle_stale;
#[allow(unused_imports)]
pub use fs::{
    io_error, not_found as file_not_found, read_failed as file_read_failed,
    write_failed as file_write_failed,
};
#[allow(unused_imports)]
pub use pattern::{
    invalid_extension as pattern_invalid_extension, no_extensions as pattern_no_extensions,
    unsupported_extension as pattern_unsupported_extension,
};
#[allow(unused_imports)]
pub use workspace::not_found as workspace_not_found;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Weft operations
#[derive(Error, Diagnostic, Debug)]
pub enum WeftError {
    // Pattern errors
    #[error("Invalid extension token '{token}': {reason}")]
    #[diagnostic(
        code(weft::pattern::invalid_extension),
        help("Extension tokens must start with '.' and contain no separators or wildcards")
    )]
    PatternInvalidExtension { token: String, reason: String },

    #[error("Unsupported extension token '{token}'")]
    #[diagnostic(
        code(weft::pattern::unsupported_extension),
        help("Supported tokens: .js, .jsx, .js.rb for scripts and .css for stylesheets")
    )]
    PatternUnsupportedExtension { token: String },

    #[error("Pattern for '{root}' declares no extensions")]
    #[diagnostic(
        code(weft::pattern::no_extensions),
        help("Declare at least one extension token per pattern")
    )]
    PatternNoExtensions { root: String },

    // Bundle errors
    #[error("Generated file is out of date: {path}")]
    #[diagnostic(
        code(weft::bundle::stale),
        help("Run 'weft build' to regenerate bundle entries")
    )]
    BundleStale { path: String },

    // Workspace errors
    #[error("Site workspace not found at: {path}")]
    #[diagnostic(
        code(weft::workspace::not_found),
        help("Pass an existing site directory with --workspace")
    )]
    WorkspaceNotFound { path: String },

    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(code(weft::fs::not_found))]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}")]
    #[diagnostic(code(weft::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(weft::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(weft::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for WeftError {
    fn from(err: std::io::Error) -> Self {
        WeftError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, WeftError>;
