//! Meld parsing and internal-consistency checks.
//!
//! A meld is every card played in one turn. All non-Joker cards must share
//! one rank (the base rank); Jokers are wild. An all-Joker meld has base rank
//! Joker.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{CardParser, ParsedCard, ParsedRank, Rank};
use crate::core::RuleViolation;

/// A meld with every code parsed once, raw codes kept for diagnostics.
///
/// SmallVec keeps typical melds (1-4 cards) off the heap.
#[derive(Clone, Debug)]
pub struct ParsedMeld<'a> {
    cards: SmallVec<[(&'a str, ParsedCard); 4]>,
}

impl<'a> ParsedMeld<'a> {
    /// Parse each code of a meld.
    pub fn parse<S: AsRef<str>>(parser: &CardParser, codes: &'a [S]) -> Self {
        let cards = codes
            .iter()
            .map(|code| {
                let raw = code.as_ref();
                (raw, parser.parse(raw))
            })
            .collect();
        Self { cards }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Raw code and parsed card, in play order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &(&'a str, ParsedCard)> {
        self.cards.iter()
    }

    /// Card at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&(&'a str, ParsedCard)> {
        self.cards.get(index)
    }

    /// Rank of the first non-Joker card, or Joker.
    #[must_use]
    pub fn base_rank(&self) -> ParsedRank {
        self.cards
            .iter()
            .map(|(_, card)| &card.rank)
            .find(|rank| !rank.is_joker())
            .cloned()
            .unwrap_or(ParsedRank::Known(Rank::Joker))
    }

    /// Raw code and rank of the last non-Joker card. An all-Joker meld
    /// yields its last code and Joker; an empty meld yields `""` and Joker.
    ///
    /// This is how the base rank of the meld on the pot is read.
    #[must_use]
    pub fn trailing_base(&self) -> (&'a str, ParsedRank) {
        self.cards
            .iter()
            .rev()
            .find(|(_, card)| !card.is_joker())
            .map(|(raw, card)| (*raw, card.rank.clone()))
            .unwrap_or_else(|| {
                let raw = self.cards.last().map(|(raw, _)| *raw).unwrap_or_default();
                (raw, ParsedRank::Known(Rank::Joker))
            })
    }

    /// Check internal consistency.
    #[must_use]
    pub fn validate(&self) -> MeldCheck {
        let base_rank = self.base_rank();

        if let Some((raw, _)) = self.cards.iter().find(|(_, card)| card.rank.is_unparseable()) {
            return MeldCheck {
                base_rank,
                violation: Some(RuleViolation::unparseable(*raw)),
            };
        }

        // No unparseable cards, so the base rank is known.
        let violation = base_rank.rank().and_then(|base| {
            self.cards
                .iter()
                .find(|(_, card)| !card.is_joker() && card.rank != ParsedRank::Known(base))
                .map(|(raw, _)| RuleViolation::InconsistentMeld {
                    card: (*raw).to_string(),
                    base,
                })
        });

        MeldCheck {
            base_rank,
            violation,
        }
    }
}

/// Outcome of validating a meld.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeldCheck {
    /// Rank of the first non-Joker card, or Joker.
    pub base_rank: ParsedRank,
    /// First problem found, if any.
    pub violation: Option<RuleViolation>,
}

impl MeldCheck {
    #[must_use]
    pub fn ok(&self) -> bool {
        self.violation.is_none()
    }

    /// Convert to a `Result`, yielding the base rank on success.
    pub fn into_result(self) -> Result<Rank, RuleViolation> {
        match self.violation {
            Some(violation) => Err(violation),
            None => Ok(self.base_rank.rank().unwrap_or(Rank::Joker)),
        }
    }
}

/// Validate a meld of raw card codes.
///
/// ```
/// use tycoon_rules::cards::{CardParser, ParsedRank, Rank};
/// use tycoon_rules::rules::validate_meld;
///
/// let parser = CardParser::default();
///
/// let check = validate_meld(&parser, &["5H", "RJ", "5D"]);
/// assert!(check.ok());
/// assert_eq!(check.base_rank, ParsedRank::Known(Rank::Five));
///
/// assert!(!validate_meld(&parser, &["5H", "6D"]).ok());
/// ```
#[must_use]
pub fn validate_meld<S: AsRef<str>>(parser: &CardParser, meld: &[S]) -> MeldCheck {
    ParsedMeld::parse(parser, meld).validate()
}
