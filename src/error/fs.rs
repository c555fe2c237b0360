//! File system errors

use super::WeftError;

/// Creates a file not found error
pub fn not_found(path: impl Into<String>) -> WeftError {
    WeftError::FileNotFound { path: path.into() }
}

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> WeftError {
    WeftError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> WeftError {
    WeftError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a generic IO error
pub fn io_error(message: impl Into<String>) -> WeftError {
    WeftError::IoError {
        message: message.into(),
    }
}
