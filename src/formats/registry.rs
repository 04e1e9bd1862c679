//! Named output formats for token lists
//!
//! Formats are keyed by name in sorted order, so `--list-formats` and the
//! "unknown format" message list them the same way.

use crate::tokens::TokenList;
use std::collections::BTreeMap;
use std::fmt;

/// Error that can occur while rendering a token list
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// No format registered under this name
    UnknownFormat { name: String, available: Vec<String> },
    /// The output encoder failed
    Encoding(String),
    /// Token cannot be spelled as an enum variant
    InvalidVariant(String),
    /// Token would become a second variant with the same name
    DuplicateVariant(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::UnknownFormat { name, available } => write!(
                f,
                "Unknown format '{name}' (available: {})",
                available.join(", ")
            ),
            FormatError::Encoding(msg) => write!(f, "Cannot encode tokens: {msg}"),
            FormatError::InvalidVariant(token) => {
                write!(f, "Token '{token}' is not a valid Rust identifier")
            }
            FormatError::DuplicateVariant(token) => {
                write!(f, "Token '{token}' appears more than once")
            }
        }
    }
}

impl std::error::Error for FormatError {}

/// Renders a token list as text
pub trait TokenFormatter: Send + Sync {
    /// Name used to select the format (e.g., "lines", "json")
    fn name(&self) -> &'static str;

    /// One-line summary shown by `--list-formats`
    fn description(&self) -> &'static str;

    fn render(&self, tokens: &TokenList) -> Result<String, FormatError>;
}

/// Token formats by name
pub struct FormatRegistry {
    formats: BTreeMap<&'static str, Box<dyn TokenFormatter>>,
}

impl FormatRegistry {
    /// A registry with no formats
    pub fn empty() -> Self {
        Self {
            formats: BTreeMap::new(),
        }
    }

    /// A registry holding the built-in formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.add(super::LinesFormatter);
        registry.add(super::JsonFormatter);
        registry.add(super::RustEnumFormatter);
        registry
    }

    /// Add a format, replacing any format of the same name
    pub fn add<F: TokenFormatter + 'static>(&mut self, format: F) {
        self.formats.insert(format.name(), Box::new(format));
    }

    pub fn find(&self, name: &str) -> Option<&dyn TokenFormatter> {
        self.formats.get(name).map(|format| format.as_ref())
    }

    /// Format names, sorted
    pub fn names(&self) -> Vec<&'static str> {
        self.formats.keys().copied().collect()
    }

    /// Name and description of every format, sorted by name
    pub fn describe(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.formats
            .values()
            .map(|format| (format.name(), format.description()))
    }

    /// Render `tokens` with the format called `name`
    pub fn render(&self, tokens: &TokenList, name: &str) -> Result<String, FormatError> {
        match self.find(name) {
            Some(format) => format.render(tokens),
            None => Err(FormatError::UnknownFormat {
                name: name.to_string(),
                available: self.names().into_iter().map(String::from).collect(),
            }),
        }
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::TokenName;

    struct CountFormatter;

    impl TokenFormatter for CountFormatter {
        fn name(&self) -> &'static str {
            "count"
        }

        fn description(&self) -> &'static str {
            "Number of tokens"
        }

        fn render(&self, tokens: &TokenList) -> Result<String, FormatError> {
            Ok(tokens.len().to_string())
        }
    }

    #[test]
    fn test_defaults_are_sorted() {
        let registry = FormatRegistry::with_defaults();
        assert_eq!(registry.names(), vec!["json", "lines", "rust-enum"]);
        assert!(registry
            .describe()
            .all(|(_, description)| !description.is_empty()));
    }

    #[test]
    fn test_added_format_renders() {
        let mut registry = FormatRegistry::empty();
        registry.add(CountFormatter);

        let tokens: TokenList = vec![TokenName::new("a"), TokenName::new("a")].into();
        assert_eq!(registry.render(&tokens, "count"), Ok("2".to_string()));
        assert_eq!(
            registry.describe().collect::<Vec<_>>(),
            vec![("count", "Number of tokens")]
        );
    }

    #[test]
    fn test_unknown_format_lists_available() {
        let registry = FormatRegistry::with_defaults();

        let error = registry.render(&TokenList::new(), "xml").unwrap_err();
        assert_eq!(
            error.to_string(),
            "Unknown format 'xml' (available: json, lines, rust-enum)"
        );
    }

    #[test]
    fn test_empty_registry_finds_nothing() {
        let registry = FormatRegistry::empty();
        assert!(registry.find("lines").is_none());
        assert!(registry.names().is_empty());
    }
}
