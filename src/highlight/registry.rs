//! One-shot grammar registration and the document-level highlighting pass
//!
//! The registry owns process-wide registration state with init-once
//! semantics: the only way to obtain a registry is [`HighlighterRegistry::install`],
//! which performs every registration before returning. There is no observable
//! unregistered state and no teardown.

use std::path::Path;

use super::document;
use super::engine::{Grammar, HighlightEngine};
use crate::error::{Result, fs};
use crate::hash;

/// Languages registered at startup, in registration order
const FIXED_GRAMMARS: &[(&str, Grammar)] = &[
    ("javascript", Grammar::builtin("JavaScript")),
    ("ruby", Grammar::builtin("Ruby")),
];

/// A highlighting engine with the fixed grammar set installed
pub struct HighlighterRegistry<E> {
    engine: E,
}

impl<E: HighlightEngine> HighlighterRegistry<E> {
    /// Install the fixed grammar set into an engine
    ///
    /// Consumes the engine so no unregistered handle survives; every
    /// highlighting call goes through the returned registry.
    pub fn install(mut engine: E) -> Self {
        for (language, grammar) in FIXED_GRAMMARS {
            engine.register(language, *grammar);
        }
        Self { engine }
    }

    /// Languages the registry installed
    pub fn languages() -> impl Iterator<Item = &'static str> {
        FIXED_GRAMMARS.iter().map(|(language, _)| *language)
    }

    /// Highlight every declared code block in a document
    pub fn highlight_document(&self, html: &str) -> String {
        document::highlight_code_blocks(html, &self.engine)
    }

    /// Highlight a rendered HTML file in place
    ///
    /// Returns whether the file changed. Re-running over already highlighted
    /// output rewrites nothing.
    pub fn highlight_file(&self, path: &Path) -> Result<bool> {
        let html = std::fs::read_to_string(path)
            .map_err(|e| fs::read_failed(path.display().to_string(), e.to_string()))?;

        let highlighted = self.highlight_document(&html);
        if highlighted == html {
            return Ok(false);
        }
        hash::write_if_changed(path, &highlighted)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    /// Engine double recording registrations
    #[derive(Default)]
    struct RecordingEngine {
        registered: HashMap<String, &'static str>,
    }

    impl HighlightEngine for RecordingEngine {
        fn register(&mut self, language: &str, grammar: Grammar) {
            self.registered.insert(language.to_string(), grammar.name());
        }

        fn highlight(&self, language: &str, code: &str) -> Option<String> {
            self.registered
                .get(language)
                .map(|_| format!("<span>{code}</span>"))
        }
    }

    #[test]
    fn test_install_registers_fixed_grammar_set() {
        let registry = HighlighterRegistry::install(RecordingEngine::default());
        assert_eq!(registry.engine.registered.len(), 2);
        assert_eq!(
            registry.engine.registered.get("javascript"),
            Some(&"JavaScript")
        );
        assert_eq!(registry.engine.registered.get("ruby"), Some(&"Ruby"));
    }

    #[test]
    fn test_languages_lists_registration_order() {
        let languages: Vec<&str> = HighlighterRegistry::<RecordingEngine>::languages().collect();
        assert_eq!(languages, vec!["javascript", "ruby"]);
    }

    #[test]
    fn test_highlight_file_rewrites_once() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let page = temp.path().join("post.html");
        std::fs::write(
            &page,
            r#"<pre><code class="language-ruby">puts :ok</code></pre>"#,
        )
        .expect("Failed to write page");

        let registry = HighlighterRegistry::install(RecordingEngine::default());

        let changed = registry
            .highlight_file(&page)
            .expect("highlighting should succeed");
        assert!(changed);

        let changed_again = registry
            .highlight_file(&page)
            .expect("second pass should succeed");
        assert!(!changed_again);
    }

    #[test]
    fn test_highlight_file_missing_is_an_error() {
        let registry = HighlighterRegistry::install(RecordingEngine::default());
        let result = registry.highlight_file(Path::new("/no/such/page.html"));
        assert!(result.is_err());
    }

    #[test]
    fn test_unregistered_language_leaves_file_untouched() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let page = temp.path().join("post.html");
        let original = r#"<pre><code class="language-bash">ls</code></pre>"#;
        std::fs::write(&page, original).expect("Failed to write page");

        let registry = HighlighterRegistry::install(RecordingEngine::default());
        let changed = registry
            .highlight_file(&page)
            .expect("highlighting should succeed");

        assert!(!changed);
        let on_disk = std::fs::read_to_string(&page).expect("Failed to read page");
        assert_eq!(on_disk, original);
    }
}
