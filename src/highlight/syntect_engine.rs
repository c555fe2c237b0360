//! Syntect-backed highlighting engine

use std::collections::HashMap;

use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use super::engine::{Grammar, HighlightEngine};

/// Highlighting engine backed by syntect's bundled syntax definitions
///
/// Emits class-annotated spans so styling stays in the stylesheet, same as
/// the rest of the pipeline's output.
pub struct SyntectEngine {
    syntaxes: SyntaxSet,
    languages: HashMap<String, &'static str>,
}

impl SyntectEngine {
    pub fn new() -> Self {
        Self {
            syntaxes: SyntaxSet::load_defaults_newlines(),
            languages: HashMap::new(),
        }
    }
}

impl Default for SyntectEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl HighlightEngine for SyntectEngine {
    fn register(&mut self, language: &str, grammar: Grammar) {
        self.languages.insert(language.to_string(), grammar.name());
    }

    fn highlight(&self, language: &str, code: &str) -> Option<String> {
        let grammar_name = self.languages.get(language)?;
        let syntax = self.syntaxes.find_syntax_by_name(grammar_name)?;

        let mut generator =
            ClassedHTMLGenerator::new_with_class_style(syntax, &self.syntaxes, ClassStyle::Spaced);
        for line in LinesWithEndings::from(code) {
            generator
                .parse_html_for_line_which_includes_newline(line)
                .ok()?;
        }
        Some(generator.finalize())
    }
}
