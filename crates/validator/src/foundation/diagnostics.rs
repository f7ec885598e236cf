//! Diagnostics for misconfigured rules
//!
//! A rule with a broken configuration (negative length bound, empty
//! membership list, invalid pattern) fails validation and reports a
//! [`Diagnostic`] to the sink injected into the engine. The default sink
//! forwards to `tracing`; [`CollectingSink`] keeps them in memory.

use parking_lot::Mutex;
use serde::Serialize;

/// A report about a misconfigured rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Name of the misconfigured rule.
    pub rule: String,
    /// Property the rule was bound to.
    pub property: String,
    /// What is wrong with the configuration.
    pub detail: String,
}

/// Receives diagnostics emitted during evaluation.
pub trait DiagnosticSink: Send + Sync {
    /// Records one diagnostic. Must not panic.
    fn report(&self, diagnostic: Diagnostic);
}

/// Forwards diagnostics to `tracing` at `WARN` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: Diagnostic) {
        tracing::warn!(
            rule = %diagnostic.rule,
            property = %diagnostic.property,
            detail = %diagnostic.detail,
            "misconfigured validation rule"
        );
    }
}

/// Keeps diagnostics in memory.
#[derive(Debug, Default)]
pub struct CollectingSink {
    entries: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the collected diagnostics.
    pub fn snapshot(&self) -> Vec<Diagnostic> {
        self.entries.lock().clone()
    }

    /// Drains the collected diagnostics.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.entries.lock())
    }

    /// Number of collected diagnostics.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Returns true if nothing was collected.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: Diagnostic) {
        self.entries.lock().push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diagnostic(rule: &str) -> Diagnostic {
        Diagnostic {
            rule: rule.to_owned(),
            property: "field".to_owned(),
            detail: "broken".to_owned(),
        }
    }

    #[test]
    fn collecting_sink_keeps_order() {
        let sink = CollectingSink::new();
        sink.report(diagnostic("a"));
        sink.report(diagnostic("b"));

        let rules: Vec<_> = sink.snapshot().into_iter().map(|d| d.rule).collect();
        assert_eq!(rules, ["a", "b"]);
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn take_drains() {
        let sink = CollectingSink::new();
        sink.report(diagnostic("a"));

        assert_eq!(sink.take().len(), 1);
        assert!(sink.is_empty());
    }

    #[test]
    fn tracing_sink_does_not_panic_without_subscriber() {
        TracingSink.report(diagnostic("a"));
    }
}
