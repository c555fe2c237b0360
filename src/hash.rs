//! BLAKE3 hashing utilities for generated output
//!
//! Generated files are only rewritten when their content hash changes, so
//! repeated builds leave both bytes and mtimes alone.

use std::path::Path;

use blake3::Hasher;

use crate::error::{Result, fs as fs_error};

/// Hash prefix for BLAKE3 hashes
pub const HASH_PREFIX: &str = "blake3:";

/// Calculate BLAKE3 hash of a byte slice
pub fn hash_bytes(bytes: &[u8]) -> String {
    let mut hasher = Hasher::new();
    hasher.update(bytes);
    format!("{}{}", HASH_PREFIX, hasher.finalize().to_hex())
}

/// Check whether a file already holds exactly this content
pub fn up_to_date(path: &Path, content: &str) -> bool {
    match std::fs::read(path) {
        Ok(existing) => hash_bytes(&existing) == hash_bytes(content.as_bytes()),
        Err(_) => false,
    }
}

/// Write content to a file unless it already matches
///
/// Creates parent directories as needed. Returns whether a write happened.
pub fn write_if_changed(path: &Path, content: &str) -> Result<bool> {
    if up_to_date(path, content) {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| fs_error::write_failed(parent.display().to_string(), e.to_string()))?;
    }

    std::fs::write(path, content)
        .map_err(|e| fs_error::write_failed(path.display().to_string(), e.to_string()))?;
    Ok(true)
}
