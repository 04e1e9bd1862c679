//! The token extractor
//!
//! `TokenExtractor` threads a [`ScanState`] through every line of the grammar
//! and collects the tokens each line produces. It is total: any text yields a
//! (possibly empty) [`TokenList`].

use super::observer::{NoopObserver, ScanEvent, ScanObserver};
use super::state::ScanState;
use crate::config::{ConfigError, ExtractorConfig};
use crate::grammar::split_lines;
use crate::tokens::TokenList;

/// Extracts token names from grammar definitions
#[derive(Debug, Clone, Default)]
pub struct TokenExtractor {
    config: ExtractorConfig,
}

impl TokenExtractor {
    /// Create an extractor for tree-sitter `grammar.js` files
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `config` as given, without validation.
    ///
    /// Prefer [`TokenExtractor::try_with_config`] for user-supplied configurations:
    /// an empty prefix matches every line.
    pub fn with_config(config: ExtractorConfig) -> Self {
        Self { config }
    }

    pub fn try_with_config(config: ExtractorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract the token names defined by `text`
    pub fn extract<T: AsRef<str> + ?Sized>(&self, text: &T) -> TokenList {
        self.extract_observed(text, &mut NoopObserver)
    }

    /// Extract token names, reporting every scan transition to `observer`
    pub fn extract_observed<T: AsRef<str> + ?Sized>(
        &self,
        text: &T,
        observer: &mut dyn ScanObserver,
    ) -> TokenList {
        let mut tokens = TokenList::new();
        let mut state = ScanState::default();
        let mut line_count = 0;

        for (index, line) in split_lines(text.as_ref()).enumerate() {
            line_count = index + 1;
            let (next, produced) = state.step(line, line_count, &self.config, observer);
            state = next;
            if let Some(token) = produced {
                tokens.push(token);
            }
        }

        let pending = match state {
            ScanState::PendingToken { rule } => Some(rule),
            _ => None,
        };
        observer.on_event(
            line_count,
            &ScanEvent::Finished {
                tokens: tokens.len(),
                pending,
            },
        );

        tokens
    }
}

/// Extract token names with the default configuration
pub fn extract_tokens<T: AsRef<str> + ?Sized>(text: &T) -> TokenList {
    TokenExtractor::new().extract(text)
}
