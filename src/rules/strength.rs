//! Rank strength tables.
//!
//! Position in the active table is strength. Both tables are written out
//! literally: revolution moves Joker from the last slot to the first and
//! leaves 3..2 in the same relative order. It is NOT `reverse(NORMAL_ORDER)`.
//!
//! The comparator flips its comparison direction under revolution, so with
//! these tables Joker wins plain comparisons in both modes while 3..2 invert.

use crate::cards::{ParsedRank, Rank};

/// Normal-mode table.
pub const NORMAL_ORDER: [Rank; 14] = [
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
    Rank::Two,
    Rank::Joker,
];

/// Revolution-mode table.
pub const REVOLUTION_ORDER: [Rank; 14] = [
    Rank::Joker,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
    Rank::Two,
];

/// Strength lookup over the two literal tables.
pub struct RankOrder;

impl RankOrder {
    /// The table active for the given revolution state.
    #[must_use]
    pub const fn table(revolution: bool) -> &'static [Rank; 14] {
        if revolution {
            &REVOLUTION_ORDER
        } else {
            &NORMAL_ORDER
        }
    }

    /// Position of `rank` in the active table.
    ///
    /// `None` means not found, which only happens for unparseable input.
    /// Callers must reject rather than compare on it.
    ///
    /// ```
    /// use tycoon_rules::cards::{ParsedRank, Rank};
    /// use tycoon_rules::rules::RankOrder;
    ///
    /// assert_eq!(RankOrder::index_of(&Rank::Three.into(), false), Some(0));
    /// assert_eq!(RankOrder::index_of(&Rank::Joker.into(), false), Some(13));
    /// assert_eq!(RankOrder::index_of(&Rank::Joker.into(), true), Some(0));
    /// assert_eq!(RankOrder::index_of(&ParsedRank::Unparseable("11".into()), false), None);
    /// ```
    #[must_use]
    pub fn index_of(rank: &ParsedRank, revolution: bool) -> Option<usize> {
        let rank = rank.rank()?;
        Self::index_of_rank(rank, revolution)
    }

    /// Position of a known rank in the active table.
    #[must_use]
    pub fn index_of_rank(rank: Rank, revolution: bool) -> Option<usize> {
        Self::table(revolution).iter().position(|&r| r == rank)
    }

    /// Does a card at `proposed` index beat one at `pot` index?
    ///
    /// Normal mode: strictly greater wins. Revolution: strictly lesser wins.
    #[must_use]
    pub const fn beats(proposed: usize, pot: usize, revolution: bool) -> bool {
        if revolution {
            proposed < pot
        } else {
            proposed > pot
        }
    }
}
