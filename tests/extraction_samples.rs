//! Extraction over grammar snippets and a realistic grammar.js fixture

use grammar_tokens::extraction::{EventRecorder, ScanEvent};
use grammar_tokens::source::{FileSource, GrammarSource};
use grammar_tokens::{extract_tokens, ExtractorConfig, TokenExtractor};
use rstest::rstest;
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Wrap rule lines in a grammar block
fn block(rules: &str) -> String {
    format!("module.exports = grammar({{\n  rules: {{\n{rules}\n  }},\n}});\n")
}

#[rstest]
#[case::empty("", &[])]
#[case::no_marker("foo: (a) => b\nbar: (a) => c\n", &[])]
#[case::marker_not_at_line_start("const g = module.exports = grammar({\nfoo: (a) => b\n", &[])]
#[case::indented_marker("   module.exports = grammar({\nfoo: (a) => b\n", &["foo"])]
fn test_block_detection(#[case] text: &str, #[case] expected: &[&str]) {
    assert_eq!(extract_tokens(text).names(), expected);
}

#[rstest]
#[case::visible_rule("    foo: (a) => b", &["foo"])]
#[case::hidden_rule_with_token("    _bar: (a) => b\n      token(tok_bar, something)", &["tok_bar"])]
#[case::hidden_rule_without_token("    _bar: (a) => b\n      seq($.x)", &[])]
#[case::hidden_then_visible("    _bar: (a) => b\n    baz: (a) => c", &["baz"])]
#[case::hidden_then_hidden(
    "    _a: ($) => x,\n    _b: ($) =>\n      token(from_b, y)",
    &["from_b"]
)]
#[case::order("    a: ($) => x,\n    _b: ($) =>\n      token(tb, y),\n    c: ($) => z,", &["a", "tb", "c"])]
#[case::comments_only("    // foo: (a) => b\n    // _bar: ($) => token(x, y)", &[])]
#[case::comment_between_hidden_and_token(
    "    _bar: ($) =>\n      // note\n      token(tok, y)",
    &["tok"]
)]
#[case::stray_token_call("    token(stray, x)", &[])]
#[case::duplicates("    a: ($) => x,\n    a: ($) => y,", &["a", "a"])]
fn test_rule_lines(#[case] rules: &str, #[case] expected: &[&str]) {
    assert_eq!(extract_tokens(&block(rules)).names(), expected);
}

/// A hidden rule's token(...) call on its own definition line must be captured,
/// even though the line is first read as a rule boundary.
#[test]
fn test_same_line_rule_and_token_call() {
    let text = block("    _kw: ($) => token(kw_let, 'let'),\n    _other: ($) => token(kw_in, 'in'),");
    assert_eq!(extract_tokens(&text).names(), vec!["kw_let", "kw_in"]);
}

/// A visible rule line is never searched for token(...), even when a hidden
/// rule was waiting for one.
#[test]
fn test_visible_rule_line_does_not_close_pending_rule_with_token() {
    let text = block("    _bar: ($) =>\n    foo: ($) => token(not_for_bar, x)\n      token(late, y)");
    assert_eq!(extract_tokens(&text).names(), vec!["foo"]);
}

#[test]
fn test_fixture_grammar() {
    let text = FileSource::new(fixture_path("grammar.js")).get().unwrap();
    let tokens = extract_tokens(&text);

    insta::assert_snapshot!(tokens.names().join("\n"), @r"
    extras
    word
    source_file
    let_stmt
    expr_stmt
    comment
    literal_string
    inline_token
    identifier
    number
    keyword
    ");
}

#[test]
fn test_fixture_abandoned_rules() {
    let text = FileSource::new(fixture_path("grammar.js")).get().unwrap();
    let mut recorder = EventRecorder::new();
    TokenExtractor::new().extract_observed(&text, &mut recorder);

    assert!(recorder.block_opened());
    assert_eq!(recorder.abandoned_rules(), vec!["_statement", "_expr", "_dangling"]);

    let captured: Vec<(String, String)> = recorder
        .events()
        .iter()
        .filter_map(|(_, event)| match event {
            ScanEvent::TokenCaptured { token, rule } => Some((token.to_string(), rule.clone())),
            _ => None,
        })
        .collect();
    assert_eq!(
        captured,
        vec![
            ("literal_string".to_string(), "_literal_string".to_string()),
            ("inline_token".to_string(), "_inline_text".to_string()),
            ("keyword".to_string(), "_keyword".to_string()),
        ]
    );
}

#[test]
fn test_fixture_with_custom_hidden_prefix() {
    let text = FileSource::new(fixture_path("grammar.js")).get().unwrap();
    let config = ExtractorConfig {
        hidden_prefix: "__".to_string(),
        ..ExtractorConfig::default()
    };
    let tokens = TokenExtractor::with_config(config).extract(&text);

    // every rule is visible now, so underscore names come through as-is
    assert!(tokens.names().contains(&"_statement"));
    assert!(!tokens.names().contains(&"literal_string"));
}
