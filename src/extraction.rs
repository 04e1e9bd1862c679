//! Token extraction from grammar definitions
//!
//! The extractor walks the grammar text once, line by line:
//!
//! 1. Lines before the block marker (`module.exports = grammar({`) are ignored
//! 2. Inside the block, comment lines are skipped
//! 3. A `name: ($) =>` line opens a rule. Visible rules contribute their name.
//!    Hidden rules (`_name`) contribute the first argument of the first
//!    `token(...)` call found before the next rule, or nothing.
//!
//! The cross-line state lives in [`ScanState`], and each line is one call to
//! [`ScanState::step`]. Diagnostics go to a [`ScanObserver`], never to stdout.

pub mod extractor;
pub mod observer;
pub mod patterns;
pub mod state;

pub use extractor::{extract_tokens, TokenExtractor};
pub use observer::{EventRecorder, LogObserver, NoopObserver, ScanEvent, ScanObserver};
pub use patterns::{match_rule, match_token_call, RuleEntry};
pub use state::ScanState;
