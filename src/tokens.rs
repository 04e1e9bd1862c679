//! Token names and token lists produced by the extractor

use serde::Serialize;
use std::fmt;

/// A single extracted token name.
///
/// The text is accepted verbatim from the grammar: no identifier check is
/// performed on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TokenName(String);

impl TokenName {
    pub fn new(name: impl Into<String>) -> Self {
        TokenName(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for TokenName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TokenName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for TokenName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TokenName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Ordered token names, in order of first appearance in the grammar.
///
/// Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TokenList(Vec<TokenName>);

impl TokenList {
    pub fn new() -> Self {
        TokenList(Vec::new())
    }

    pub fn push(&mut self, token: TokenName) {
        self.0.push(token);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TokenName> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[TokenName] {
        &self.0
    }

    /// Borrow every token as a plain string slice
    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(TokenName::as_str).collect()
    }

    pub fn into_vec(self) -> Vec<TokenName> {
        self.0
    }
}

impl From<Vec<TokenName>> for TokenList {
    fn from(tokens: Vec<TokenName>) -> Self {
        TokenList(tokens)
    }
}

impl FromIterator<TokenName> for TokenList {
    fn from_iter<I: IntoIterator<Item = TokenName>>(iter: I) -> Self {
        TokenList(iter.into_iter().collect())
    }
}

impl IntoIterator for TokenList {
    type Item = TokenName;
    type IntoIter = std::vec::IntoIter<TokenName>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a TokenName;
    type IntoIter = std::slice::Iter<'a, TokenName>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
