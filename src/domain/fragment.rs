//! Fragment domain types
//!
//! Contains domain objects for discovered component fragments and their
//! inferred asset kind.

use std::path::PathBuf;

/// Extension tokens treated as script fragments
pub const SCRIPT_EXTENSIONS: &[&str] = &[".js", ".jsx", ".js.rb"];

/// Extension tokens treated as stylesheet fragments
pub const STYLESHEET_EXTENSIONS: &[&str] = &[".css"];

/// Kind of asset a fragment contributes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Script,
    Stylesheet,
}

impl AssetKind {
    /// All asset kinds, in bundle emission order
    pub const ALL: [AssetKind; 2] = [AssetKind::Script, AssetKind::Stylesheet];

    /// Infer the asset kind for an extension token
    ///
    /// Returns `None` for tokens outside the supported set; pattern validation
    /// rejects those before resolution ever runs.
    pub fn for_extension(token: &str) -> Option<AssetKind> {
        if SCRIPT_EXTENSIONS.contains(&token) {
            Some(AssetKind::Script)
        } else if STYLESHEET_EXTENSIONS.contains(&token) {
            Some(AssetKind::Stylesheet)
        } else {
            None
        }
    }

    /// Human-readable label used in summaries
    pub fn label(&self) -> &'static str {
        match self {
            AssetKind::Script => "script",
            AssetKind::Stylesheet => "stylesheet",
        }
    }
}

/// A concrete fragment file produced by pattern resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFragment {
    /// Path relative to the site root (e.g., "src/_components/nav.js")
    pub site_path: PathBuf,

    /// Absolute path to the fragment file
    pub absolute_path: PathBuf,

    /// Asset kind inferred from the matched extension token
    pub kind: AssetKind,
}
