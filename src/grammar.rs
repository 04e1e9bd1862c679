//! Grammar source text
//!
//! `GrammarText` is the raw, immutable input to the extractor. No structure is
//! assumed beyond line boundaries, which may be `\n`, `\r\n` or a bare `\r`.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static LINE_BREAK_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\r|\n").unwrap());

/// Split `text` into lines without terminators.
///
/// A single trailing line break does not start an empty final line, and empty
/// text has no lines.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let body = text
        .strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .or_else(|| text.strip_suffix('\r'))
        .unwrap_or(text);
    let has_lines = !text.is_empty();
    LINE_BREAK_REGEX.split(body).filter(move |_| has_lines)
}

/// Raw grammar definition text, as handed over by a [`GrammarSource`](crate::source::GrammarSource).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrammarText {
    text: String,
}

impl GrammarText {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Iterate over the lines of the grammar, without line terminators.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        split_lines(&self.text)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl From<String> for GrammarText {
    fn from(text: String) -> Self {
        Self { text }
    }
}

impl From<&str> for GrammarText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl AsRef<str> for GrammarText {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for GrammarText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
