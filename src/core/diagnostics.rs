//! Diagnostic side channel.
//!
//! Every rejected play is logged through `tracing`. Hosts that want the
//! violations themselves (e.g. to show "card X does not match base rank Y"
//! in a debug panel) install a `DiagnosticSink` on the engine.
//!
//! Sinks observe; they never influence a verdict.

use parking_lot::Mutex;

use super::error::RuleViolation;

/// Receiver for rule violations.
///
/// Implemented for any `Fn(&RuleViolation) + Send + Sync`, so a closure is
/// usually enough:
///
/// ```
/// use std::sync::Arc;
/// use tycoon_rules::{RuleViolation, RulesEngine, TycoonEngine};
///
/// let engine = TycoonEngine::new().with_sink(Arc::new(|v: &RuleViolation| {
///     eprintln!("rejected: {v}");
/// }));
/// assert!(!engine.is_valid_play(&["5H", "6D"], &[] as &[&str]));
/// ```
pub trait DiagnosticSink: Send + Sync {
    /// Called once per rejected evaluation.
    fn report(&self, violation: &RuleViolation);
}

impl<F> DiagnosticSink for F
where
    F: Fn(&RuleViolation) + Send + Sync,
{
    fn report(&self, violation: &RuleViolation) {
        self(violation)
    }
}

/// Sink that keeps every reported violation in memory.
#[derive(Debug, Default)]
pub struct CollectingSink {
    entries: Mutex<Vec<RuleViolation>>,
}

impl CollectingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return everything collected so far.
    pub fn take(&self) -> Vec<RuleViolation> {
        std::mem::take(&mut *self.entries.lock())
    }

    /// Most recent violation, if any.
    #[must_use]
    pub fn last(&self) -> Option<RuleViolation> {
        self.entries.lock().last().cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, violation: &RuleViolation) {
        self.entries.lock().push(violation.clone());
    }
}
