//! Rule violations reported when a play is rejected.
//!
//! None of these are faults: malformed card codes and losing plays are
//! ordinary input. The engine returns them as values and mirrors them on the
//! diagnostic side channel.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::Rank;

/// Reason a proposed play was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RuleViolation {
    /// A card code did not resolve to any of the 14 rank classes.
    #[error("card {card:?} could not be resolved to a rank")]
    UnparseableCard { card: String },

    /// A card's rank differs from the meld's base rank and is not a Joker.
    #[error("card {card:?} does not match base rank {base}")]
    InconsistentMeld { card: String, base: Rank },

    /// Proposed and pot melds have different sizes.
    #[error("played {proposed} card(s) against a pot of {pot}")]
    CardinalityMismatch { proposed: usize, pot: usize },

    /// Well-formed play that does not beat the pot.
    #[error("{proposed} does not beat {pot} (revolution: {revolution})")]
    NotStronger {
        proposed: Rank,
        pot: Rank,
        revolution: bool,
    },
}

impl RuleViolation {
    pub fn unparseable(card: impl Into<String>) -> Self {
        Self::UnparseableCard { card: card.into() }
    }

    /// Short machine-readable kind, used as a structured log field.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            RuleViolation::UnparseableCard { .. } => "unparseable_card",
            RuleViolation::InconsistentMeld { .. } => "inconsistent_meld",
            RuleViolation::CardinalityMismatch { .. } => "cardinality_mismatch",
            RuleViolation::NotStronger { .. } => "not_stronger",
        }
    }
}
