//! Content glob configuration for the CSS purge stage
//!
//! The downstream CSS processor decides which utility classes survive
//! minification by scanning every file the content globs name. The glob set
//! here is purely declarative: it is derived from the same pattern
//! declarations the fragment resolver uses, so a class referenced only inside
//! a component fragment can never be purged because someone forgot to add a
//! path to a second hand-written list.

use std::path::Path;

use serde::Serialize;
use wax::{CandidatePath, Glob, Pattern};

use crate::error::{Result, fs};
use crate::path_utils;
use crate::pattern::PathPattern;

/// Template surface scanned for utility classes, beyond component fragments
pub const TEMPLATE_CONTENT_GLOB: &str = "./src/**/*.{html,md,liquid,erb,serb,slim}";

/// Ordered, immutable glob list handed to the CSS processor
#[derive(Debug, Clone, Serialize)]
pub struct ContentGlobSet {
    content: Vec<String>,
}

impl ContentGlobSet {
    /// Derive the glob set from the pattern declarations
    ///
    /// Order: the template surface first, then fragment patterns and frontend
    /// script patterns in declaration order.
    pub fn from_patterns(
        fragment_patterns: &[PathPattern],
        script_patterns: &[PathPattern],
    ) -> Self {
        let mut content = vec![TEMPLATE_CONTENT_GLOB.to_string()];
        content.extend(fragment_patterns.iter().map(PathPattern::content_glob));
        content.extend(script_patterns.iter().map(PathPattern::content_glob));
        Self { content }
    }

    /// Globs in emission order
    pub fn globs(&self) -> &[String] {
        &self.content
    }

    /// Check that every file a pattern can match is covered by some glob
    ///
    /// Probes a direct child and a nested child of the pattern root for each
    /// extension token. Used by configuration tests; the invariant holds by
    /// construction at runtime.
    pub fn covers(&self, pattern: &PathPattern) -> bool {
        let root = path_utils::to_forward_slashes(pattern.root());
        pattern.extensions().iter().all(|token| {
            let direct = format!("{root}/probe{token}");
            let nested = format!("{root}/nested/probe{token}");
            self.matches_any(&direct) && self.matches_any(&nested)
        })
    }

    fn matches_any(&self, path: &str) -> bool {
        self.content
            .iter()
            .any(|glob| matches_glob(glob.trim_start_matches("./"), path))
    }

    /// Serialize the processor configuration as pretty JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| fs::io_error(format!("Failed to serialize content globs: {e}")))
    }

    /// File name of the emitted configuration within the output directory
    pub fn file_name() -> &'static str {
        "purge.json"
    }
}

/// Check if a glob pattern matches a file path
///
/// Uses wax for platform-independent glob matching. Falls back to exact match
/// if the pattern is invalid.
fn matches_glob(pattern: &str, file_path: &str) -> bool {
    let normalized_path = path_utils::to_forward_slashes(Path::new(file_path));
    let candidate = CandidatePath::from(normalized_path.as_str());

    match Glob::new(pattern) {
        Ok(glob) => glob.matched(&candidate).is_some(),
        Err(_) => pattern == normalized_path,
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::pattern::{component_patterns, frontend_script_patterns};

    fn default_set() -> ContentGlobSet {
        let fragments = component_patterns().expect("component patterns are valid");
        let scripts = frontend_script_patterns().expect("frontend patterns are valid");
        ContentGlobSet::from_patterns(&fragments, &scripts)
    }

    #[test]
    fn test_default_glob_set_contents() {
        let set = default_set();
        assert_eq!(
            set.globs(),
            &[
                "./src/**/*.{html,md,liquid,erb,serb,slim}".to_string(),
                "./src/_components/**/*.{js,jsx,js.rb,css}".to_string(),
                "./frontend/javascript/**/*.js".to_string(),
            ]
        );
    }

    #[test]
    fn test_glob_set_covers_every_fragment_pattern() {
        let set = default_set();
        for pattern in component_patterns().expect("component patterns are valid") {
            assert!(set.covers(&pattern), "uncovered pattern: {pattern:?}");
        }
        for pattern in frontend_script_patterns().expect("frontend patterns are valid") {
            assert!(set.covers(&pattern), "uncovered pattern: {pattern:?}");
        }
    }

    #[test]
    fn test_glob_set_detects_uncovered_pattern() {
        let set = default_set();
        let foreign =
            PathPattern::new("vendor/widgets", &[".css"]).expect("pattern should be valid");
        assert!(!set.covers(&foreign));
    }

    #[test]
    fn test_covers_multi_part_extension() {
        let set = default_set();
        let pattern =
            PathPattern::new("src/_components", &[".js.rb"]).expect("pattern should be valid");
        assert!(set.covers(&pattern));
    }

    #[test]
    fn test_to_json_shape() {
        let set = default_set();
        let json = set.to_json().expect("serialization should succeed");
        let parsed: serde_json::Value =
            serde_json::from_str(&json).expect("emitted JSON should parse");
        let content = parsed["content"].as_array().expect("content is an array");
        assert_eq!(content.len(), 3);
        assert_eq!(
            content[0].as_str(),
            Some("./src/**/*.{html,md,liquid,erb,serb,slim}")
        );
    }

    #[test]
    fn test_matches_glob_basics() {
        assert!(matches_glob(
            "src/_components/**/*.{js,jsx,js.rb,css}",
            "src/_components/nav/nav.js"
        ));
        assert!(matches_glob(
            "src/_components/**/*.{js,jsx,js.rb,css}",
            "src/_components/form.js.rb"
        ));
        assert!(!matches_glob(
            "frontend/javascript/**/*.js",
            "frontend/styles/site.css"
        ));
    }
}
