//! Cross-line scan state
//!
//! ```text
//!   Outside --(block marker)--> InsideBlock
//!   InsideBlock --(hidden rule line)--> PendingToken
//!   PendingToken --(token(...) call)--> InsideBlock      emits the call's first argument
//!   PendingToken --(visible rule line)--> InsideBlock    hidden rule abandoned
//!   PendingToken --(hidden rule line)--> PendingToken    previous hidden rule abandoned
//! ```
//!
//! Once inside the block the scan never returns to `Outside`.

use super::observer::{ScanEvent, ScanObserver};
use super::patterns::{match_rule, match_token_call};
use crate::config::ExtractorConfig;
use crate::tokens::TokenName;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScanState {
    /// Before the block marker
    #[default]
    Outside,
    /// Inside the rule table, no hidden rule open
    InsideBlock,
    /// Inside the rule table, looking for the `token(...)` call of a hidden rule
    PendingToken { rule: String },
}

impl ScanState {
    pub fn inside_grammar_block(&self) -> bool {
        !matches!(self, ScanState::Outside)
    }

    pub fn pending_hidden_rule(&self) -> bool {
        matches!(self, ScanState::PendingToken { .. })
    }

    /// Consume one line and return the next state, plus the token the line produced.
    ///
    /// A line produces at most one token: a visible rule closes any pending hidden
    /// rule and is never searched for `token(...)`, and a hidden rule only captures
    /// the first call.
    pub fn step(
        self,
        line: &str,
        line_number: usize,
        config: &ExtractorConfig,
        observer: &mut dyn ScanObserver,
    ) -> (ScanState, Option<TokenName>) {
        let trimmed = line.trim();

        if let ScanState::Outside = self {
            if trimmed.starts_with(config.block_marker.as_str()) {
                observer.on_event(line_number, &ScanEvent::BlockOpened);
                return (ScanState::InsideBlock, None);
            }
            return (ScanState::Outside, None);
        }

        if trimmed.starts_with(config.comment_prefix.as_str()) {
            observer.on_event(line_number, &ScanEvent::CommentSkipped);
            return (self, None);
        }

        let mut state = self;
        let mut produced = None;

        if let Some(entry) = match_rule(trimmed, &config.hidden_prefix) {
            if let ScanState::PendingToken { rule } = state {
                observer.on_event(line_number, &ScanEvent::HiddenRuleAbandoned { name: rule });
            }
            observer.on_event(
                line_number,
                &ScanEvent::RuleFound {
                    name: entry.name.to_string(),
                    hidden: entry.is_hidden,
                },
            );

            if entry.is_hidden {
                state = ScanState::PendingToken {
                    rule: entry.name.to_string(),
                };
            } else {
                state = ScanState::InsideBlock;
                produced = Some(TokenName::new(entry.name));
            }
        }

        // Runs against the updated state, so a hidden rule whose token(...) call
        // sits on its own definition line is captured.
        if let ScanState::PendingToken { rule } = &state {
            if let Some(payload) = match_token_call(trimmed) {
                let token = TokenName::new(payload);
                observer.on_event(
                    line_number,
                    &ScanEvent::TokenCaptured {
                        token: token.clone(),
                        rule: rule.clone(),
                    },
                );
                state = ScanState::InsideBlock;
                produced = Some(token);
            }
        }

        (state, produced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::observer::{EventRecorder, NoopObserver};

    fn step(state: ScanState, line: &str) -> (ScanState, Option<TokenName>) {
        state.step(line, 1, &ExtractorConfig::default(), &mut NoopObserver)
    }

    fn pending(rule: &str) -> ScanState {
        ScanState::PendingToken {
            rule: rule.to_string(),
        }
    }

    #[test]
    fn test_default_state_is_outside() {
        let state = ScanState::default();
        assert!(!state.inside_grammar_block());
        assert!(!state.pending_hidden_rule());
    }

    #[test]
    fn test_marker_opens_block_without_processing_line() {
        let (state, token) = step(ScanState::Outside, "  module.exports = grammar({ a: ($) => b");
        assert_eq!(state, ScanState::InsideBlock);
        assert_eq!(token, None);
    }

    #[test]
    fn test_outside_ignores_rules() {
        let (state, token) = step(ScanState::Outside, "foo: ($) => bar");
        assert_eq!(state, ScanState::Outside);
        assert_eq!(token, None);
    }

    #[test]
    fn test_marker_inside_block_is_ordinary_line() {
        let (state, token) = step(ScanState::InsideBlock, "module.exports = grammar({");
        assert_eq!(state, ScanState::InsideBlock);
        assert_eq!(token, None);
    }

    #[test]
    fn test_visible_rule_emits_name() {
        let (state, token) = step(ScanState::InsideBlock, "foo: (a) => b");
        assert_eq!(state, ScanState::InsideBlock);
        assert_eq!(token, Some(TokenName::new("foo")));
    }

    #[test]
    fn test_hidden_rule_becomes_pending() {
        let (state, token) = step(ScanState::InsideBlock, "_bar: (a) => b");
        assert_eq!(state, pending("_bar"));
        assert_eq!(token, None);
    }

    #[test]
    fn test_pending_captures_token_call() {
        let (state, token) = step(pending("_bar"), "token(tok_bar, something)");
        assert_eq!(state, ScanState::InsideBlock);
        assert_eq!(token, Some(TokenName::new("tok_bar")));
    }

    #[test]
    fn test_pending_survives_unrelated_lines_and_comments() {
        let (state, _) = step(pending("_bar"), "seq($.a, $.b),");
        assert_eq!(state, pending("_bar"));

        let (state, token) = step(state, "// token(commented, out)");
        assert_eq!(state, pending("_bar"));
        assert_eq!(token, None);
    }

    #[test]
    fn test_token_call_ignored_without_pending_rule() {
        let (state, token) = step(ScanState::InsideBlock, "token(stray, x)");
        assert_eq!(state, ScanState::InsideBlock);
        assert_eq!(token, None);
    }

    #[test]
    fn test_visible_rule_closes_pending_rule() {
        let mut recorder = EventRecorder::new();
        let (state, token) = pending("_bar").step(
            "foo: ($) => token(x, y)",
            4,
            &ExtractorConfig::default(),
            &mut recorder,
        );

        assert_eq!(state, ScanState::InsideBlock);
        assert_eq!(token, Some(TokenName::new("foo")));
        assert_eq!(
            recorder.events(),
            &[
                (
                    4,
                    ScanEvent::HiddenRuleAbandoned {
                        name: "_bar".to_string()
                    }
                ),
                (
                    4,
                    ScanEvent::RuleFound {
                        name: "foo".to_string(),
                        hidden: false
                    }
                ),
            ]
        );
    }

    #[test]
    fn test_hidden_rule_with_token_on_same_line() {
        let (state, token) = step(ScanState::InsideBlock, "_kw: ($) => token(kw_let, 'let'),");
        assert_eq!(state, ScanState::InsideBlock);
        assert_eq!(token, Some(TokenName::new("kw_let")));
    }

    #[test]
    fn test_new_hidden_rule_replaces_pending_one() {
        let (state, token) = step(pending("_a"), "_b: ($) => seq(");
        assert_eq!(state, pending("_b"));
        assert_eq!(token, None);
    }

    #[test]
    fn test_custom_comment_prefix() {
        let config = ExtractorConfig {
            comment_prefix: "#".to_string(),
            ..ExtractorConfig::default()
        };
        let (state, token) =
            ScanState::InsideBlock.step("# foo: ($) => x", 1, &config, &mut NoopObserver);
        assert_eq!(state, ScanState::InsideBlock);
        assert_eq!(token, None);
    }
}
