use std::io::Cursor;
use std::sync::Arc;

use syntect::easy::HighlightLines;
use syntect::highlighting::{Color, Theme, ThemeSet};
use syntect::parsing::{SyntaxReference, SyntaxSet};

use super::{TokenLine, TokenRun, Tokenizer, TokenizedCode, TokenizerEngine};
use crate::error::{Error, Result};

/// Embedded Dracula color theme (tmTheme format), the documented default.
/// syntect's bundled theme set does not ship it.
const DRACULA_TM_THEME: &str = include_str!("../../dracula.tmTheme");

/// Tokenizer engine backed by syntect's bundled grammars and themes.
pub struct SyntectEngine {
    syntax_set: Arc<SyntaxSet>,
    theme_set: ThemeSet,
}

impl SyntectEngine {
    /// Load the bundled syntax and theme sets. This is the expensive step;
    /// construct one engine and share it behind the highlighter cache.
    pub fn new() -> Self {
        let syntax_set = Arc::new(SyntaxSet::load_defaults_newlines());
        let mut theme_set = ThemeSet::load_defaults();

        if let Ok(theme) = ThemeSet::load_from_reader(&mut Cursor::new(DRACULA_TM_THEME.as_bytes()))
        {
            theme_set.themes.insert("dracula".to_string(), theme);
        }

        Self {
            syntax_set,
            theme_set,
        }
    }

    /// Sorted names of every available theme.
    pub fn theme_names(&self) -> Vec<String> {
        self.theme_set.themes.keys().cloned().collect()
    }

    /// Sorted names of every available language grammar.
    pub fn language_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .syntax_set
            .syntaxes()
            .iter()
            .filter(|syntax| !syntax.hidden)
            .map(|syntax| syntax.name.clone())
            .collect();
        names.sort();
        names
    }
}

impl Default for SyntectEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenizerEngine for SyntectEngine {
    fn create(&self, theme: &str, language: &str) -> Result<Box<dyn Tokenizer>> {
        let syntax = self
            .syntax_set
            .find_syntax_by_token(language)
            .ok_or_else(|| Error::UnknownLanguage(language.to_string()))?
            .clone();

        let theme = self
            .theme_set
            .themes
            .get(theme)
            .cloned()
            .ok_or_else(|| Error::UnknownTheme(theme.to_string()))?;

        Ok(Box::new(SyntectTokenizer {
            syntax_set: Arc::clone(&self.syntax_set),
            syntax,
            theme,
        }))
    }
}

/// A (theme, language) pair bound to the shared syntax set.
struct SyntectTokenizer {
    syntax_set: Arc<SyntaxSet>,
    syntax: SyntaxReference,
    theme: Theme,
}

impl Tokenizer for SyntectTokenizer {
    fn tokenize(&self, code: &str) -> Result<TokenizedCode> {
        let mut highlighter = HighlightLines::new(&self.syntax, &self.theme);
        let mut lines = Vec::new();

        for line in code.split('\n') {
            let regions = highlighter
                .highlight_line(line, &self.syntax_set)
                .map_err(|e| Error::Tokenize(e.to_string()))?;

            lines.push(TokenLine {
                runs: regions
                    .iter()
                    .map(|(style, text)| TokenRun {
                        text: (*text).to_string(),
                        foreground: hex(style.foreground),
                    })
                    .collect(),
            });
        }

        let settings = &self.theme.settings;
        Ok(TokenizedCode {
            lines,
            foreground: settings.foreground.map_or_else(|| "#ffffff".to_string(), hex),
            background: settings.background.map_or_else(|| "#000000".to_string(), hex),
        })
    }
}

/// Format a syntect color as a hex string; alpha only when not opaque.
fn hex(color: Color) -> String {
    if color.a == u8::MAX {
        format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
    } else {
        format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            color.r, color.g, color.b, color.a
        )
    }
}
