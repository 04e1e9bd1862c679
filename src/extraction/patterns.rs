//! Line patterns recognized inside the grammar block
//!
//! Two patterns drive the scan:
//! - rule definition: `name: (args) => body`
//! - token wrapper call: `token(first, rest...)`
//!
//! Both are searched anywhere in the (trimmed) line, not anchored.

use once_cell::sync::Lazy;
use regex::Regex;

/// `name: (args) =>` followed by anything. The argument list may not nest parentheses.
static RULE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Za-z_]+):\s*\([^()]*\)\s*=>(.*)").unwrap());

/// `token(` ... `)`, greedy up to the last closing parenthesis on the line
static TOKEN_CALL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"token\((.*)\)").unwrap());

/// A line recognized as opening a named rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleEntry<'a> {
    pub name: &'a str,
    pub is_hidden: bool,
    /// Everything after the `=>`
    pub body_text: &'a str,
}

/// Match a rule-definition line.
///
/// `hidden_prefix` decides whether the rule is internal.
pub fn match_rule<'a>(line: &'a str, hidden_prefix: &str) -> Option<RuleEntry<'a>> {
    let captures = RULE_REGEX.captures(line)?;
    let name = captures.get(1)?.as_str().trim();
    let body_text = captures.get(2).map_or("", |m| m.as_str());

    Some(RuleEntry {
        name,
        is_hidden: name.starts_with(hidden_prefix),
        body_text,
    })
}

/// Match a `token(...)` call and return its first comma-delimited argument, trimmed.
///
/// The payload is returned verbatim, whatever it looks like.
pub fn match_token_call(line: &str) -> Option<&str> {
    let captures = TOKEN_CALL_REGEX.captures(line)?;
    let inner = captures.get(1)?.as_str();
    inner.split(',').next().map(str::trim)
}
