//! Property-based tests for sorting, removal, and play comparison.

mod common;

use proptest::prelude::*;
use tycoon_rules::cards::JOKER_CODES;
use tycoon_rules::rules::{remove_played_cards, sort_hand};
use tycoon_rules::{standard_deck, CardParser, Rank, RulesEngine, Suit, TycoonEngine};

fn config() -> ProptestConfig {
    ProptestConfig::with_cases(256)
}

/// Any deck card, or occasionally a code no rule can resolve.
fn card_code() -> impl Strategy<Value = String> {
    prop_oneof![
        8 => prop::sample::select(standard_deck(2)),
        1 => "[?#x]{1,2}",
    ]
}

fn hand() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(card_code(), 0..20)
}

fn plain_rank() -> impl Strategy<Value = Rank> {
    prop::sample::select(Rank::ALL[..13].to_vec())
}

/// One rank in 1-4 suits plus up to two jokers.
fn consistent_meld() -> impl Strategy<Value = Vec<String>> {
    (
        plain_rank(),
        prop::sample::subsequence(Suit::ALL.to_vec(), 1..=4),
        0usize..=2,
    )
        .prop_map(|(rank, suits, jokers)| {
            let mut meld: Vec<String> = suits
                .iter()
                .map(|suit| format!("{}{}", rank.label(), suit.letter()))
                .collect();
            meld.extend(JOKER_CODES.iter().take(jokers).map(|code| code.to_string()));
            meld
        })
}

fn sorted_multiset(mut codes: Vec<String>) -> Vec<String> {
    codes.sort();
    codes
}

proptest! {
    #![proptest_config(config())]

    /// Property: sorting twice gives the same order as sorting once.
    #[test]
    fn prop_sort_is_idempotent(hand in hand(), revolution in any::<bool>()) {
        let parser = CardParser::default();
        let once = sort_hand(&parser, &hand, revolution);
        let twice = sort_hand(&parser, &once, revolution);
        prop_assert_eq!(once, twice);
    }

    /// Property: sorting only reorders.
    #[test]
    fn prop_sort_is_permutation(hand in hand(), revolution in any::<bool>()) {
        let sorted = sort_hand(&CardParser::default(), &hand, revolution);
        prop_assert_eq!(sorted_multiset(sorted), sorted_multiset(hand));
    }

    /// Property: removing a sub-multiset leaves exactly the difference.
    #[test]
    fn prop_remove_is_multiset_difference(
        (hand, mask) in hand().prop_flat_map(|hand| {
            let len = hand.len();
            (Just(hand), prop::collection::vec(any::<bool>(), len))
        })
    ) {
        let played: Vec<String> = hand
            .iter()
            .zip(&mask)
            .filter(|(_, picked)| **picked)
            .map(|(code, _)| code.clone())
            .collect();
        let kept: Vec<String> = hand
            .iter()
            .zip(&mask)
            .filter(|(_, picked)| !**picked)
            .map(|(code, _)| code.clone())
            .collect();

        let mut remaining = hand.clone();
        let removed = remove_played_cards(&mut remaining, &played);

        prop_assert_eq!(removed, played.len());
        prop_assert_eq!(remaining.len(), hand.len() - played.len());
        prop_assert_eq!(sorted_multiset(remaining), sorted_multiset(kept));
    }

    /// Property: an open pot accepts every consistent meld in both modes.
    #[test]
    fn prop_opening_accepts_consistent_meld(meld in consistent_meld(), revolution in any::<bool>()) {
        common::init_logging();
        let engine = TycoonEngine::new();
        engine.set_revolution(revolution);
        prop_assert!(engine.validate(&meld).ok());
        prop_assert!(engine.is_valid_play(&meld, &[] as &[&str]));
    }

    /// Property: between two different plain ranks exactly one beats the
    /// other, and revolution swaps which.
    #[test]
    fn prop_revolution_swaps_winner(
        a in plain_rank(),
        b in plain_rank(),
        suit_a in prop::sample::select(Suit::ALL.to_vec()),
        suit_b in prop::sample::select(Suit::ALL.to_vec()),
    ) {
        prop_assume!(a != b);
        let engine = TycoonEngine::new();
        let card_a = [format!("{}{}", a.label(), suit_a.letter())];
        let card_b = [format!("{}{}", b.label(), suit_b.letter())];

        let normal_ab = engine.is_valid_play(&card_a, &card_b);
        let normal_ba = engine.is_valid_play(&card_b, &card_a);
        prop_assert!(normal_ab != normal_ba);

        engine.set_revolution(true);
        prop_assert_eq!(engine.is_valid_play(&card_a, &card_b), normal_ba);
        prop_assert_eq!(engine.is_valid_play(&card_b, &card_a), normal_ab);
    }

    /// Property: the parser accepts any input without panicking, and an
    /// opening play of one card is legal exactly when the card parses.
    #[test]
    fn prop_parser_is_total(raw in any::<String>()) {
        let engine = TycoonEngine::new();
        let parsed = engine.parser().parse_rank(&raw);
        prop_assert_eq!(
            engine.is_valid_play(&[raw.as_str()], &[] as &[&str]),
            !parsed.is_unparseable()
        );
    }
}
