//! Rules engine trait and the default engine.
//!
//! `RulesEngine` is the seam between the rules and whoever holds game state.
//! Implementors supply a parser and the current revolution state; every
//! operation is a provided method, so a client predicting a play and a
//! server adjudicating it run the same code.
//!
//! `TycoonEngine` is the standard implementor. It owns the revolution flag
//! as an atomic, so one engine can be shared across threads behind an `Arc`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::comparator::{evaluate_play, PlayOutcome};
use super::hand;
use super::meld::{validate_meld, MeldCheck};
use super::pot::{last_non_empty_meld, PotHistory};
use super::strength::RankOrder;
use crate::cards::{display, CardParser, ParsedCard};
use crate::core::{DiagnosticSink, EngineConfig, RuleViolation};

/// Play validation rules.
///
/// ## Implementation Notes
///
/// - `revolution`: Read once per provided method call; one evaluation never
///   mixes the two strength tables
/// - `report`: Side channel only; the default does nothing
pub trait RulesEngine {
    /// Parser used for every card code.
    fn parser(&self) -> &CardParser;

    /// Whether revolution mode is active.
    fn revolution(&self) -> bool;

    /// Receive a rejected play's violation.
    fn report(&self, _violation: &RuleViolation) {}

    // === Provided Methods ===

    /// Normalise one card code.
    fn parse_card(&self, raw: &str) -> ParsedCard {
        self.parser().parse(raw)
    }

    /// Strength index of a card code under the active table.
    fn strength_index(&self, raw: &str) -> Option<usize> {
        RankOrder::index_of(&self.parser().parse_rank(raw), self.revolution())
    }

    /// Check a meld's internal consistency. Independent of revolution.
    fn validate<S: AsRef<str>>(&self, meld: &[S]) -> MeldCheck {
        validate_meld(self.parser(), meld)
    }

    /// Decide a play, with the reason either way.
    ///
    /// Rejections are logged and passed to [`RulesEngine::report`].
    fn evaluate_play<S, T>(&self, proposed: &[S], pot_last: &[T]) -> Result<PlayOutcome, RuleViolation>
    where
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let revolution = self.revolution();
        let verdict = evaluate_play(self.parser(), proposed, pot_last, revolution);
        match &verdict {
            Ok(outcome) => {
                tracing::trace!(?outcome, revolution, cards = proposed.len(), "play accepted");
            }
            Err(violation) => {
                tracing::debug!(
                    kind = violation.kind(),
                    revolution,
                    cards = proposed.len(),
                    "play rejected: {violation}"
                );
                self.report(violation);
            }
        }
        verdict
    }

    /// Is `proposed` a legal play on top of `pot_last`?
    fn is_valid_play<S, T>(&self, proposed: &[S], pot_last: &[T]) -> bool
    where
        S: AsRef<str>,
        T: AsRef<str>,
    {
        self.evaluate_play(proposed, pot_last).is_ok()
    }

    /// Like [`RulesEngine::is_valid_play`], against the most recent
    /// non-empty meld of a pot history. No such meld means an open pot.
    fn is_valid_play_against_pot_history<S, M, T>(&self, proposed: &[S], pot: &[M]) -> bool
    where
        S: AsRef<str>,
        M: AsRef<[T]>,
        T: AsRef<str>,
    {
        let empty: &[T] = &[];
        let last = last_non_empty_meld(pot).unwrap_or(empty);
        self.is_valid_play(proposed, last)
    }

    /// Like [`RulesEngine::is_valid_play`], against a [`PotHistory`].
    fn is_valid_play_against<S: AsRef<str>>(&self, proposed: &[S], pot: &PotHistory) -> bool {
        self.is_valid_play(proposed, pot.last_meld())
    }

    /// Sort a hand by strength under the current mode.
    fn sort_hand<S: AsRef<str>>(&self, hand: &[S]) -> Vec<String> {
        hand::sort_hand(self.parser(), hand, self.revolution())
    }

    /// Remove one occurrence per played code; returns the number removed.
    fn remove_played_cards<S: AsRef<str>>(&self, hand: &mut Vec<String>, played: &[S]) -> usize {
        hand::remove_played_cards(hand, played)
    }

    /// Display label for a card code.
    fn display_label(&self, card_code: &str) -> String {
        display::display_label(card_code)
    }
}

/// Frozen view of an engine: one parser, one revolution state.
///
/// Useful when several calls must agree on the mode, e.g. sorting a hand and
/// validating a selection for the same frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineSnapshot {
    parser: CardParser,
    revolution: bool,
}

impl EngineSnapshot {
    #[must_use]
    pub fn new(parser: CardParser, revolution: bool) -> Self {
        Self { parser, revolution }
    }
}

impl RulesEngine for EngineSnapshot {
    fn parser(&self) -> &CardParser {
        &self.parser
    }

    fn revolution(&self) -> bool {
        self.revolution
    }
}

/// The standard engine.
///
/// ## Example
///
/// ```
/// use tycoon_rules::{RulesEngine, TycoonEngine};
///
/// let engine = TycoonEngine::new();
/// assert!(engine.is_valid_play(&["5H", "5D", "RJ"], &["4H", "4C", "BJ"]));
///
/// engine.set_revolution(true);
/// assert!(!engine.is_valid_play(&["5H", "5D", "RJ"], &["4H", "4C", "BJ"]));
/// assert!(engine.is_valid_play(&["3S"], &["BJ"]));
/// ```
pub struct TycoonEngine {
    parser: CardParser,
    revolution: AtomicBool,
    sink: Option<Arc<dyn DiagnosticSink>>,
}

impl Default for TycoonEngine {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl TycoonEngine {
    /// Engine with default configuration, revolution off.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            parser: CardParser::new(config.parser),
            revolution: AtomicBool::new(config.initial_revolution),
            sink: None,
        }
    }

    /// Attach a diagnostic sink.
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Switch the active strength table for all later calls.
    pub fn set_revolution(&self, revolution: bool) {
        let previous = self.revolution.swap(revolution, Ordering::AcqRel);
        if previous != revolution {
            tracing::info!(revolution, "revolution mode is now {}", if revolution { "on" } else { "off" });
        }
    }

    /// Flip revolution mode; returns the new state.
    pub fn toggle_revolution(&self) -> bool {
        let revolution = !self.revolution.fetch_xor(true, Ordering::AcqRel);
        tracing::info!(revolution, "revolution mode is now {}", if revolution { "on" } else { "off" });
        revolution
    }

    /// Freeze the current mode.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot::new(self.parser, self.revolution())
    }
}

impl RulesEngine for TycoonEngine {
    fn parser(&self) -> &CardParser {
        &self.parser
    }

    fn revolution(&self) -> bool {
        self.revolution.load(Ordering::Acquire)
    }

    fn report(&self, violation: &RuleViolation) {
        if let Some(sink) = &self.sink {
            sink.report(violation);
        }
    }
}

impl std::fmt::Debug for TycoonEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TycoonEngine")
            .field("parser", &self.parser)
            .field("revolution", &self.revolution())
            .field("sink", &self.sink.is_some())
            .finish()
    }
}
