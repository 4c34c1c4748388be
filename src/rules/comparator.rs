//! Play comparison: does a proposed meld legally follow the pot?
//!
//! Evaluated as a decision tree, first applicable step wins:
//!
//! 1. The proposed meld must be internally consistent.
//! 2. An empty pot accepts any consistent meld.
//! 3. Sizes must match.
//! 4. Single cards: 3 of Spades beats a Joker outright; otherwise compare
//!    strength indices.
//! 5. Multi-card melds: compare the proposed base rank against the pot's
//!    trailing base rank.
//!
//! A strength lookup that comes back empty is a rejection, never a
//! comparison.

use serde::{Deserialize, Serialize};

use super::meld::ParsedMeld;
use super::strength::RankOrder;
use crate::cards::{CardParser, ParsedCard, ParsedRank, Rank, Suit};
use crate::core::RuleViolation;

/// Why a play was accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayOutcome {
    /// Pot was empty.
    Opening,
    /// Outranks the pot under the active table.
    Beats,
    /// Single 3 of Spades played onto a single Joker.
    ThreeOfSpadesOverJoker,
}

/// Decide whether `proposed` may be played on top of `pot_last`.
pub fn evaluate_play<S, T>(
    parser: &CardParser,
    proposed: &[S],
    pot_last: &[T],
    revolution: bool,
) -> Result<PlayOutcome, RuleViolation>
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    let proposed = ParsedMeld::parse(parser, proposed);
    let base_proposed = proposed.validate().into_result()?;

    if pot_last.is_empty() {
        return Ok(PlayOutcome::Opening);
    }

    if proposed.len() != pot_last.len() {
        return Err(RuleViolation::CardinalityMismatch {
            proposed: proposed.len(),
            pot: pot_last.len(),
        });
    }

    let pot = ParsedMeld::parse(parser, pot_last);

    if proposed.len() == 1 {
        if let (Some((_, played)), Some((_, pot_card))) = (proposed.get(0), pot.get(0)) {
            if is_three_of_spades(played) && pot_card.is_joker() {
                return Ok(PlayOutcome::ThreeOfSpadesOverJoker);
            }
        }
    }

    let (pot_raw, pot_rank) = pot.trailing_base();
    compare(base_proposed, pot_raw, &pot_rank, revolution)
}

fn is_three_of_spades(card: &ParsedCard) -> bool {
    card.rank == ParsedRank::Known(Rank::Three) && card.suit == Some(Suit::Spades)
}

fn compare(
    proposed: Rank,
    pot_raw: &str,
    pot: &ParsedRank,
    revolution: bool,
) -> Result<PlayOutcome, RuleViolation> {
    let proposed_index = RankOrder::index_of_rank(proposed, revolution)
        .ok_or_else(|| RuleViolation::unparseable(proposed.label()))?;
    let pot_index =
        RankOrder::index_of(pot, revolution).ok_or_else(|| RuleViolation::unparseable(pot_raw))?;
    // Both lookups succeeded, so the pot rank is known.
    let pot_rank = pot.rank().unwrap_or(Rank::Joker);

    if RankOrder::beats(proposed_index, pot_index, revolution) {
        Ok(PlayOutcome::Beats)
    } else {
        Err(RuleViolation::NotStronger {
            proposed,
            pot: pot_rank,
            revolution,
        })
    }
}
