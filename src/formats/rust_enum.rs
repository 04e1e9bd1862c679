//! Rust enum output
//!
//! Renders the token list as the `Token` enum consumed by formatter crates:
//!
//! ```text
//! #[allow(dead_code, non_camel_case_types)]
//! #[derive(Debug, Clone)]
//! pub enum Token {
//!     comment,
//!     identifier,
//! }
//! ```
//!
//! Keywords become raw identifiers (`r#type`). Tokens that cannot be variants
//! at all, and repeated tokens, are rejected rather than silently dropped.

use super::registry::{FormatError, TokenFormatter};
use crate::tokens::TokenList;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static IDENTIFIER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "if", "impl", "in", "let",
    "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref", "return",
    "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized", "use",
    "virtual", "where", "while", "yield",
];

/// Keywords that cannot be raw identifiers either
const FORBIDDEN: &[&str] = &["_", "crate", "self", "Self", "super"];

pub struct RustEnumFormatter;

/// The variant spelling of `token`, if it has one
fn variant_name(token: &str) -> Option<String> {
    if FORBIDDEN.contains(&token) || !IDENTIFIER_REGEX.is_match(token) {
        return None;
    }
    if KEYWORDS.contains(&token) {
        return Some(format!("r#{token}"));
    }
    Some(token.to_string())
}

/// Variant spellings for `tokens`, in order.
///
/// Fails on the first token that is not an identifier or repeats an earlier one.
pub fn enum_variants(tokens: &TokenList) -> Result<Vec<String>, FormatError> {
    let mut seen = HashSet::new();
    tokens
        .iter()
        .map(|token| {
            let name = token.as_str();
            let variant =
                variant_name(name).ok_or_else(|| FormatError::InvalidVariant(name.to_string()))?;
            if !seen.insert(name) {
                return Err(FormatError::DuplicateVariant(name.to_string()));
            }
            Ok(variant)
        })
        .collect()
}

impl TokenFormatter for RustEnumFormatter {
    fn name(&self) -> &'static str {
        "rust-enum"
    }

    fn render(&self, tokens: &TokenList) -> Result<String, FormatError> {
        let mut output = String::from(
            "#[allow(dead_code, non_camel_case_types)]\n#[derive(Debug, Clone)]\npub enum Token {\n",
        );
        for variant in enum_variants(tokens)? {
            output.push_str(&format!("    {variant},\n"));
        }
        output.push_str("}\n");
        Ok(output)
    }

    fn description(&self) -> &'static str {
        "Rust `Token` enum with one variant per token"
    }
}
