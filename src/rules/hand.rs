//! Hand utilities for the UI layer: sorting and removing played cards.

use rustc_hash::FxHashMap;

use super::strength::RankOrder;
use crate::cards::{CardParser, ParsedCard};

/// Sort key: parseable cards first, then strength index, then suit.
fn sort_key(card: &ParsedCard, revolution: bool) -> (bool, usize, usize) {
    let index = RankOrder::index_of(&card.rank, revolution);
    let suit = card.suit.map_or(4, |suit| suit as usize);
    (index.is_none(), index.unwrap_or(usize::MAX), suit)
}

/// Stable sort of card codes by strength under the given mode.
///
/// Equal ranks are ordered Spades, Hearts, Diamonds, Clubs, then suitless.
/// Unparseable codes go last, in their original order.
///
/// ```
/// use tycoon_rules::cards::CardParser;
/// use tycoon_rules::rules::sort_hand;
///
/// let parser = CardParser::default();
/// let hand = ["2C", "RJ", "??", "3H", "3S"];
///
/// assert_eq!(sort_hand(&parser, &hand, false), ["3S", "3H", "2C", "RJ", "??"]);
/// assert_eq!(sort_hand(&parser, &hand, true), ["RJ", "3S", "3H", "2C", "??"]);
/// ```
#[must_use]
pub fn sort_hand<S: AsRef<str>>(parser: &CardParser, hand: &[S], revolution: bool) -> Vec<String> {
    let mut keyed: Vec<_> = hand
        .iter()
        .map(|code| {
            let code = code.as_ref();
            (sort_key(&parser.parse(code), revolution), code.to_string())
        })
        .collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    keyed.into_iter().map(|(_, code)| code).collect()
}

/// Remove one occurrence of each played code from `hand`.
///
/// Multiset semantics: playing one `"5H"` from a hand holding two leaves
/// one. Codes match exactly. Played codes missing from the hand are skipped.
/// Returns how many cards were removed.
///
/// ```
/// use tycoon_rules::rules::remove_played_cards;
///
/// let mut hand = vec!["5H".to_string(), "5H".to_string(), "9C".to_string()];
/// assert_eq!(remove_played_cards(&mut hand, &["5H"]), 1);
/// assert_eq!(hand, ["5H", "9C"]);
/// ```
pub fn remove_played_cards<S: AsRef<str>>(hand: &mut Vec<String>, played: &[S]) -> usize {
    let mut pending: FxHashMap<&str, usize> = FxHashMap::default();
    for code in played {
        *pending.entry(code.as_ref()).or_default() += 1;
    }

    let before = hand.len();
    hand.retain(|code| match pending.get_mut(code.as_str()) {
        Some(count) if *count > 0 => {
            *count -= 1;
            false
        }
        _ => true,
    });

    let missing: usize = pending.values().sum();
    if missing > 0 {
        tracing::debug!(missing, "played cards not found in hand");
    }
    before - hand.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(hand: &[&str], revolution: bool) -> Vec<String> {
        sort_hand(&CardParser::default(), hand, revolution)
    }

    #[test]
    fn test_sort_normal_mode() {
        let hand = ["KD", "3C", "BJ", "10H", "TS", "2S", "4D"];
        assert_eq!(
            sorted(&hand, false),
            ["3C", "4D", "TS", "10H", "KD", "2S", "BJ"]
        );
    }

    #[test]
    fn test_sort_revolution_mode_moves_joker_first() {
        let hand = ["KD", "3C", "BJ", "2S"];
        assert_eq!(sorted(&hand, true), ["BJ", "3C", "KD", "2S"]);
    }

    #[test]
    fn test_sort_keeps_duplicates_and_unparseable_order() {
        let hand = ["zz", "5H", "??", "5H", "RJ", "BJ"];
        assert_eq!(sorted(&hand, false), ["5H", "5H", "RJ", "BJ", "zz", "??"]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let hand = ["9S", "9C", "9H", "AS", "RJ", "xx", "3D"];
        let once = sorted(&hand, false);
        let twice = sort_hand(&CardParser::default(), &once, false);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_remove_multiset() {
        let mut hand: Vec<String> = ["7S", "7S", "7H", "RJ"].iter().map(|s| s.to_string()).collect();
        let removed = remove_played_cards(&mut hand, &["7S", "RJ"]);
        assert_eq!(removed, 2);
        assert_eq!(hand, ["7S", "7H"]);
    }

    #[test]
    fn test_remove_ignores_missing() {
        let mut hand = vec!["4C".to_string()];
        assert_eq!(remove_played_cards(&mut hand, &["QS", "QS"]), 0);
        assert_eq!(hand, ["4C"]);
    }

    #[test]
    fn test_remove_nothing() {
        let mut hand = vec!["4C".to_string()];
        assert_eq!(remove_played_cards::<&str>(&mut hand, &[]), 0);
        assert_eq!(hand.len(), 1);
    }
}
