pub mod engine;

pub use engine::SyntectEngine;

use crate::error::Result;

/// One colored run of text within a source line.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenRun {
    pub text: String,
    /// Foreground color as a `#rrggbb`/`#rrggbbaa` hex string.
    pub foreground: String,
}

/// Ordered token runs for one newline-delimited line of input.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TokenLine {
    pub runs: Vec<TokenRun>,
}

/// Tokenizer output for a whole snippet: one `TokenLine` per input line,
/// in input order, plus the theme's reported default colors.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenizedCode {
    pub lines: Vec<TokenLine>,
    pub foreground: String,
    pub background: String,
}

/// A tokenizer instance bound to one (theme, language) pair.
///
/// Instances are expensive to create (grammar and theme loading) and are
/// pooled by the highlighter cache. `dispose` releases whatever the engine
/// holds; backends wrapping native or WASM resources free them here.
pub trait Tokenizer: Send + Sync {
    /// Produce colored token runs for every line of `code`.
    fn tokenize(&self, code: &str) -> Result<TokenizedCode>;

    /// Release engine resources. Called at most once per instance.
    fn dispose(&self) {}
}

/// Factory for tokenizer instances.
///
/// An unknown theme or language is a fatal error here; nothing downstream
/// attempts recovery or fallback.
pub trait TokenizerEngine: Send + Sync + 'static {
    fn create(&self, theme: &str, language: &str) -> Result<Box<dyn Tokenizer>>;
}
