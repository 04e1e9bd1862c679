//! Scan observability
//!
//! The scan reports what it does through [`ScanObserver`] instead of printing.
//! Line numbers are 1-based; [`ScanEvent::Finished`] carries the number of
//! lines scanned.

use crate::tokens::TokenName;

const LOG_TARGET: &str = "grammar_tokens::scan";

/// A state transition of the token scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    /// The block marker was found
    BlockOpened,
    /// A comment line inside the block was skipped
    CommentSkipped,
    /// A rule definition line was recognized
    RuleFound { name: String, hidden: bool },
    /// A hidden rule ended without a `token(...)` call
    HiddenRuleAbandoned { name: String },
    /// A hidden rule produced its token
    TokenCaptured { token: TokenName, rule: String },
    /// The scan reached end of text
    Finished {
        tokens: usize,
        /// Hidden rule still waiting for a `token(...)` call, dropped
        pending: Option<String>,
    },
}

/// Receives scan events
pub trait ScanObserver {
    fn on_event(&mut self, line_number: usize, event: &ScanEvent);
}

impl<T: ScanObserver + ?Sized> ScanObserver for &mut T {
    fn on_event(&mut self, line_number: usize, event: &ScanEvent) {
        (**self).on_event(line_number, event);
    }
}

/// Fan out to two observers
impl<A: ScanObserver, B: ScanObserver> ScanObserver for (A, B) {
    fn on_event(&mut self, line_number: usize, event: &ScanEvent) {
        self.0.on_event(line_number, event);
        self.1.on_event(line_number, event);
    }
}

/// Discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ScanObserver for NoopObserver {
    fn on_event(&mut self, _line_number: usize, _event: &ScanEvent) {}
}

/// Forwards events to the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl ScanObserver for LogObserver {
    fn on_event(&mut self, line_number: usize, event: &ScanEvent) {
        match event {
            ScanEvent::BlockOpened => {
                log::debug!(target: LOG_TARGET, "line {line_number}: grammar block opened");
            }
            ScanEvent::CommentSkipped => {
                log::trace!(target: LOG_TARGET, "line {line_number}: comment skipped");
            }
            ScanEvent::RuleFound { name, hidden } => {
                log::debug!(target: LOG_TARGET, "line {line_number}: rule '{name}' (hidden: {hidden})");
            }
            ScanEvent::HiddenRuleAbandoned { name } => {
                log::debug!(target: LOG_TARGET, "line {line_number}: hidden rule '{name}' has no token");
            }
            ScanEvent::TokenCaptured { token, rule } => {
                log::debug!(target: LOG_TARGET, "line {line_number}: token '{token}' from '{rule}'");
            }
            ScanEvent::Finished { tokens, pending } => {
                if let Some(name) = pending {
                    log::debug!(target: LOG_TARGET, "hidden rule '{name}' still open at end of text");
                }
                log::debug!(target: LOG_TARGET, "scan finished after {line_number} lines, {tokens} tokens");
            }
        }
    }
}

/// Collects events in order
#[derive(Debug, Clone, Default)]
pub struct EventRecorder {
    events: Vec<(usize, ScanEvent)>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[(usize, ScanEvent)] {
        &self.events
    }

    /// Whether the block marker was ever seen
    pub fn block_opened(&self) -> bool {
        self.events
            .iter()
            .any(|(_, event)| matches!(event, ScanEvent::BlockOpened))
    }

    /// Names of hidden rules that produced no token, including one left open at end of text
    pub fn abandoned_rules(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|(_, event)| match event {
                ScanEvent::HiddenRuleAbandoned { name } => Some(name.as_str()),
                ScanEvent::Finished {
                    pending: Some(name),
                    ..
                } => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl ScanObserver for EventRecorder {
    fn on_event(&mut self, line_number: usize, event: &ScanEvent) {
        self.events.push((line_number, event.clone()));
    }
}
