//! Path pattern configuration errors

use super::WeftError;

/// Creates an invalid extension token error
pub fn invalid_extension(token: impl Into<String>, reason: impl Into<String>) -> WeftError {
    WeftError::PatternInvalidExtension {
        token: token.into(),
        reason: reason.into(),
    }
}

/// Creates an unsupported extension token error
pub fn unsupported_extension(token: impl Into<String>) -> WeftError {
    WeftError::PatternUnsupportedExtension {
        token: token.into(),
    }
}

/// Creates a no extensions declared error
pub fn no_extensions(root: impl Into<String>) -> WeftError {
    WeftError::PatternNoExtensions { root: root.into() }
}
