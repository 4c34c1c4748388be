//! Standard Tycoon deck in canonical card codes.

use super::rank::{Rank, Suit};

/// Joker codes, red first.
pub const JOKER_CODES: [&str; 2] = ["RJ", "BJ"];

/// The 52 suited cards plus up to two jokers, in normal strength order.
///
/// ```
/// use tycoon_rules::cards::standard_deck;
///
/// let deck = standard_deck(2);
/// assert_eq!(deck.len(), 54);
/// assert_eq!(deck.first().map(String::as_str), Some("3S"));
/// assert_eq!(deck.last().map(String::as_str), Some("BJ"));
/// ```
#[must_use]
pub fn standard_deck(jokers: usize) -> Vec<String> {
    let mut deck: Vec<String> = Rank::ALL
        .iter()
        .filter(|rank| !rank.is_joker())
        .flat_map(|rank| {
            Suit::ALL
                .iter()
                .map(move |suit| format!("{}{}", rank.label(), suit.letter()))
        })
        .collect();
    deck.extend(JOKER_CODES.iter().take(jokers).map(|code| code.to_string()));
    deck
}
