//! Path pattern declarations for fragment discovery
//!
//! A path pattern names a root directory under the site root and the
//! extension tokens it accepts. Patterns are declared once as static
//! literals and validated eagerly: a malformed or unsupported token aborts
//! the process at startup instead of surfacing mid-build.

use std::path::{Path, PathBuf};

use crate::domain::AssetKind;
use crate::error::{Result, pattern as pattern_error};
use crate::path_utils;

/// A glob-style declaration: one root directory plus accepted extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    root: PathBuf,
    extensions: Vec<String>,
}

impl PathPattern {
    /// Create a pattern, validating every extension token
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the token list is empty, a token is
    /// malformed (no leading dot, embedded separator or wildcard), or a token
    /// does not map to a known asset kind.
    pub fn new(root: impl Into<PathBuf>, extensions: &[&str]) -> Result<Self> {
        let root = root.into();

        if extensions.is_empty() {
            return Err(pattern_error::no_extensions(root.display().to_string()));
        }

        for token in extensions {
            validate_extension(token)?;
        }

        Ok(Self {
            root,
            extensions: extensions.iter().map(|s| (*s).to_string()).collect(),
        })
    }

    /// Root directory, relative to the site root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Accepted extension tokens, in declaration order
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Return the first declared token that matches a file name
    ///
    /// Tokens match on name suffix, so multi-part tokens like ".js.rb" work
    /// without special casing.
    pub fn match_extension(&self, file_name: &str) -> Option<&str> {
        self.extensions
            .iter()
            .find(|token| file_name.ends_with(token.as_str()))
            .map(String::as_str)
    }

    /// Render this pattern as a content glob for the CSS processor
    ///
    /// Mirrors the shape the processor expects: `./root/**/*.{js,css}` for
    /// multiple tokens, `./root/**/*.js` for a single one.
    pub fn content_glob(&self) -> String {
        let root = path_utils::to_forward_slashes(&self.root);
        if self.extensions.len() == 1 {
            format!("./{}/**/*{}", root, self.extensions[0])
        } else {
            let alternatives: Vec<&str> = self
                .extensions
                .iter()
                .map(|token| token.trim_start_matches('.'))
                .collect();
            format!("./{}/**/*.{{{}}}", root, alternatives.join(","))
        }
    }
}

fn validate_extension(token: &str) -> Result<()> {
    if token.len() < 2 || !token.starts_with('.') {
        return Err(pattern_error::invalid_extension(
            token,
            "tokens must be a '.'-prefixed suffix like '.js'",
        ));
    }
    if token.contains(['/', '\\']) {
        return Err(pattern_error::invalid_extension(
            token,
            "tokens must not contain path separators",
        ));
    }
    if token.contains(['*', '?', '[', '{']) {
        return Err(pattern_error::invalid_extension(
            token,
            "tokens must not contain wildcards",
        ));
    }
    if AssetKind::for_extension(token).is_none() {
        return Err(pattern_error::unsupported_extension(token));
    }
    Ok(())
}

/// Patterns defining the component fragment surface
///
/// This is the one place "a component" is defined; the purge configurator
/// derives its content globs from the same declarations.
pub fn component_patterns() -> Result<Vec<PathPattern>> {
    Ok(vec![PathPattern::new(
        "src/_components",
        &[".js", ".jsx", ".js.rb", ".css"],
    )?])
}

/// Patterns covering the handwritten frontend entry scripts
///
/// Not aggregated into bundles; declared so the purge configurator scans
/// them for utility classes.
pub fn frontend_script_patterns() -> Result<Vec<PathPattern>> {
    Ok(vec![PathPattern::new("frontend/javascript", &[".js"])?])
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::error::WeftError;

    #[test]
    fn test_pattern_accepts_supported_tokens() {
        let pattern = PathPattern::new("src/_components", &[".js", ".jsx", ".js.rb", ".css"])
            .expect("pattern should validate");
        assert_eq!(pattern.extensions().len(), 4);
        assert_eq!(pattern.root(), Path::new("src/_components"));
    }

    #[test]
    fn test_pattern_rejects_missing_dot() {
        let result = PathPattern::new("src/_components", &["js"]);
        assert!(matches!(
            result.expect_err("token without dot should fail"),
            WeftError::PatternInvalidExtension { .. }
        ));
    }

    #[test]
    fn test_pattern_rejects_bare_dot() {
        let result = PathPattern::new("src/_components", &["."]);
        assert!(matches!(
            result.expect_err("bare dot should fail"),
            WeftError::PatternInvalidExtension { .. }
        ));
    }

    #[test]
    fn test_pattern_rejects_wildcards() {
        let result = PathPattern::new("src/_components", &[".j*"]);
        assert!(matches!(
            result.expect_err("wildcard token should fail"),
            WeftError::PatternInvalidExtension { .. }
        ));
    }

    #[test]
    fn test_pattern_rejects_separators() {
        let result = PathPattern::new("src/_components", &["./js"]);
        assert!(matches!(
            result.expect_err("separator token should fail"),
            WeftError::PatternInvalidExtension { .. }
        ));
    }

    #[test]
    fn test_pattern_rejects_unknown_kind() {
        let result = PathPattern::new("src/_components", &[".png"]);
        assert!(matches!(
            result.expect_err("unknown asset extension should fail"),
            WeftError::PatternUnsupportedExtension { .. }
        ));
    }

    #[test]
    fn test_pattern_rejects_empty_extension_list() {
        let result = PathPattern::new("src/_components", &[]);
        assert!(matches!(
            result.expect_err("empty token list should fail"),
            WeftError::PatternNoExtensions { .. }
        ));
    }

    #[test]
    fn test_match_extension_multi_part() {
        let pattern = PathPattern::new("src/_components", &[".js", ".js.rb"])
            .expect("pattern should validate");
        assert_eq!(pattern.match_extension("widget.js"), Some(".js"));
        assert_eq!(pattern.match_extension("widget.js.rb"), Some(".js.rb"));
        assert_eq!(pattern.match_extension("widget.rb"), None);
        assert_eq!(pattern.match_extension("widget.css"), None);
    }

    #[test]
    fn test_content_glob_multiple_tokens() {
        let pattern = PathPattern::new("src/_components", &[".js", ".jsx", ".js.rb", ".css"])
            .expect("pattern should validate");
        assert_eq!(
            pattern.content_glob(),
            "./src/_components/**/*.{js,jsx,js.rb,css}"
        );
    }

    #[test]
    fn test_content_glob_single_token() {
        let pattern =
            PathPattern::new("frontend/javascript", &[".js"]).expect("pattern should validate");
        assert_eq!(pattern.content_glob(), "./frontend/javascript/**/*.js");
    }

    #[test]
    fn test_default_pattern_sets_validate() {
        assert!(component_patterns().is_ok());
        assert!(frontend_script_patterns().is_ok());
    }
}
