//! Card-code parsing.
//!
//! Card codes arrive as free-form text from servers, UIs, and test fixtures:
//! `"3S"`, `"10h"`, `"TD"`, `"queen_of_clubs"`, `"RJ"`, `"Joker"`. The parser
//! normalises all of them to a [`ParsedCard`] without ever failing: anything
//! it cannot place becomes [`ParsedRank::Unparseable`].
//!
//! ## Normalisation order
//!
//! 1. Trim; empty input is unparseable.
//! 2. Any joker token as a substring (case-insensitive) means Joker.
//! 3. Drop every non-alphanumeric character.
//! 4. A trailing S/H/D/C is the suit; the prefix is the rank portion.
//! 5. The rank portion is resolved by [`RANK_RULES`], first match wins.
//!
//! ```
//! use tycoon_rules::cards::{CardParser, ParsedRank, Rank, Suit};
//!
//! let parser = CardParser::default();
//!
//! let card = parser.parse("10h");
//! assert_eq!(card.rank, ParsedRank::Known(Rank::Ten));
//! assert_eq!(card.suit, Some(Suit::Hearts));
//!
//! assert_eq!(parser.parse_rank("BJ"), ParsedRank::Known(Rank::Joker));
//! assert!(parser.parse_rank("??").is_unparseable());
//! ```

use serde::{Deserialize, Serialize};

use super::rank::{Rank, Suit};
use crate::core::ParserConfig;

/// Substrings that mark a code as a Joker.
pub const JOKER_TOKENS: &[&str] = &[
    "joker", "jrj", "jbj", "rj", "bj", "nj",
];

/// Joker tokens that denote the red Joker.
pub const RED_JOKER_TOKENS: &[&str] = &[
    "redjoker", "red_joker", "jokerred", "joker_red", "jrj", "rj",
];

/// Result of resolving a code's rank.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParsedRank {
    /// One of the 14 rank classes.
    Known(Rank),
    /// Nothing matched. Carries the label the parser ended up with.
    Unparseable(String),
}

impl ParsedRank {
    #[must_use]
    pub fn rank(&self) -> Option<Rank> {
        match self {
            ParsedRank::Known(rank) => Some(*rank),
            ParsedRank::Unparseable(_) => None,
        }
    }

    #[must_use]
    pub fn is_joker(&self) -> bool {
        matches!(self, ParsedRank::Known(Rank::Joker))
    }

    #[must_use]
    pub fn is_unparseable(&self) -> bool {
        matches!(self, ParsedRank::Unparseable(_))
    }

    /// Rank label, or the unresolved label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            ParsedRank::Known(rank) => rank.label(),
            ParsedRank::Unparseable(label) => label,
        }
    }
}

impl From<Rank> for ParsedRank {
    fn from(rank: Rank) -> Self {
        ParsedRank::Known(rank)
    }
}

/// A normalised card code.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedCard {
    pub rank: ParsedRank,
    /// `None` for jokers and suitless encodings.
    pub suit: Option<Suit>,
}

impl ParsedCard {
    #[must_use]
    pub fn is_joker(&self) -> bool {
        self.rank.is_joker()
    }

    /// Canonical code: rank label + suit letter (`"10H"`), `"JOKER"` for
    /// jokers, bare rank label when no suit is known.
    ///
    /// Returns `None` for unparseable cards.
    #[must_use]
    pub fn canonical_code(&self) -> Option<String> {
        let rank = self.rank.rank()?;
        if rank.is_joker() {
            return Some("JOKER".to_string());
        }
        Some(match self.suit {
            Some(suit) => format!("{}{}", rank.label(), suit.letter()),
            None => rank.label().to_string(),
        })
    }
}

/// Does this raw code denote a Joker?
#[must_use]
pub fn is_joker_code(raw: &str) -> bool {
    let lowered = raw.trim().to_ascii_lowercase();
    !lowered.is_empty() && JOKER_TOKENS.iter().any(|token| lowered.contains(token))
}

/// Does this raw code denote the red Joker?
#[must_use]
pub fn is_red_joker_code(raw: &str) -> bool {
    let lowered = raw.trim().to_ascii_lowercase();
    is_joker_code(&lowered) && RED_JOKER_TOKENS.iter().any(|token| lowered.contains(token))
}

/// One step of rank-portion resolution.
///
/// `resolve` receives the lowercased rank portion (never empty) and returns
/// `Some` when the rule claims it.
#[derive(Clone, Copy)]
pub struct RankRule {
    pub name: &'static str,
    pub resolve: fn(&str, &ParserConfig) -> Option<ParsedRank>,
}

impl std::fmt::Debug for RankRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RankRule").field("name", &self.name).finish()
    }
}

/// Rank-portion rules in priority order.
pub const RANK_RULES: &[RankRule] = &[
    RankRule { name: "exact-ten-letter", resolve: exact_ten_letter },
    RankRule { name: "exact-face", resolve: exact_face },
    RankRule { name: "numeric", resolve: numeric },
    RankRule { name: "contains-ten", resolve: contains_ten },
    RankRule { name: "contains-ace", resolve: contains_ace },
    RankRule { name: "contains-jack", resolve: contains_jack },
    RankRule { name: "contains-queen", resolve: contains_queen },
    RankRule { name: "contains-king", resolve: contains_king },
    RankRule { name: "first-char", resolve: first_char },
];

fn exact_ten_letter(portion: &str, _: &ParserConfig) -> Option<ParsedRank> {
    (portion == "t").then_some(ParsedRank::Known(Rank::Ten))
}

fn exact_face(portion: &str, _: &ParserConfig) -> Option<ParsedRank> {
    let rank = match portion {
        "a" => Rank::Ace,
        "j" => Rank::Jack,
        "q" => Rank::Queen,
        "k" => Rank::King,
        _ => return None,
    };
    Some(ParsedRank::Known(rank))
}

fn numeric(portion: &str, config: &ParserConfig) -> Option<ParsedRank> {
    if !portion.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let Ok(value) = portion.parse::<u32>() else {
        // Too many digits to be a rank.
        return Some(ParsedRank::Unparseable(portion.to_string()));
    };
    if value == 1 {
        return Some(if config.one_means_ten {
            ParsedRank::Known(Rank::Ten)
        } else {
            ParsedRank::Unparseable("1".to_string())
        });
    }
    Some(match Rank::from_number(value) {
        Some(rank) => ParsedRank::Known(rank),
        None => ParsedRank::Unparseable(value.to_string()),
    })
}

fn contains_any(portion: &str, tokens: &[&str]) -> bool {
    tokens.iter().any(|token| portion.contains(token))
}

fn contains_ten(portion: &str, _: &ParserConfig) -> Option<ParsedRank> {
    contains_any(portion, &["10", "ten"]).then_some(ParsedRank::Known(Rank::Ten))
}

fn contains_ace(portion: &str, config: &ParserConfig) -> Option<ParsedRank> {
    let token = if config.strict_ace_token { "ace" } else { "a" };
    portion.contains(token).then_some(ParsedRank::Known(Rank::Ace))
}

fn contains_jack(portion: &str, _: &ParserConfig) -> Option<ParsedRank> {
    contains_any(portion, &["j", "jack"]).then_some(ParsedRank::Known(Rank::Jack))
}

fn contains_queen(portion: &str, _: &ParserConfig) -> Option<ParsedRank> {
    contains_any(portion, &["q", "queen"]).then_some(ParsedRank::Known(Rank::Queen))
}

fn contains_king(portion: &str, _: &ParserConfig) -> Option<ParsedRank> {
    contains_any(portion, &["k", "king"]).then_some(ParsedRank::Known(Rank::King))
}

fn first_char(portion: &str, config: &ParserConfig) -> Option<ParsedRank> {
    if !config.first_char_fallback {
        return Some(ParsedRank::Unparseable(portion.to_string()));
    }
    let first = portion.chars().next()?.to_ascii_uppercase();
    Some(resolve_single_char(first, config))
}

/// Map a lone uppercase character to a rank, canonicalising "1" and "T".
fn resolve_single_char(ch: char, config: &ParserConfig) -> ParsedRank {
    let label = match ch {
        'T' => "10".to_string(),
        '1' if config.one_means_ten => "10".to_string(),
        other => other.to_string(),
    };
    match Rank::from_label(&label) {
        // "Joker" is never a single character, so a Known here is a plain rank.
        Some(rank) => ParsedRank::Known(rank),
        None => ParsedRank::Unparseable(label),
    }
}

/// Card-code parser.
///
/// Stateless apart from its leniency settings; cheap to copy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CardParser {
    config: ParserConfig,
}

impl CardParser {
    #[must_use]
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse rank and suit together.
    #[must_use]
    pub fn parse(&self, raw: &str) -> ParsedCard {
        let rank = self.parse_rank(raw);
        let suit = if rank.is_joker() { None } else { suit_of(raw) };
        ParsedCard { rank, suit }
    }

    /// Resolve a raw code to a rank class.
    #[must_use]
    pub fn parse_rank(&self, raw: &str) -> ParsedRank {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return ParsedRank::Unparseable(String::new());
        }
        if is_joker_code(trimmed) {
            return ParsedRank::Known(Rank::Joker);
        }

        let token = strip_to_alphanumeric(trimmed);
        let Some(first) = token.chars().next() else {
            return ParsedRank::Unparseable(trimmed.to_string());
        };

        let portion = match split_suit(&token) {
            Some((portion, _)) => portion,
            None => token.as_str(),
        };

        if portion.is_empty() {
            // Only a suit letter: fall back to the whole token.
            if !self.config.first_char_fallback {
                return ParsedRank::Unparseable(token.to_ascii_uppercase());
            }
            return resolve_single_char(first.to_ascii_uppercase(), &self.config);
        }

        for rule in RANK_RULES {
            if let Some(resolved) = (rule.resolve)(portion, &self.config) {
                if rule.name == "first-char" {
                    tracing::trace!(raw, guess = resolved.label(), "rank guessed from first character");
                }
                return resolved;
            }
        }
        ParsedRank::Unparseable(portion.to_string())
    }
}

/// Suit of a raw code, if it carries an unambiguous one.
///
/// Jokers, suitless codes, and codes that are nothing but a suit letter
/// return `None`.
#[must_use]
pub fn suit_of(raw: &str) -> Option<Suit> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || is_joker_code(trimmed) {
        return None;
    }
    let token = strip_to_alphanumeric(trimmed);
    split_suit(&token)
        .filter(|(portion, _)| !portion.is_empty())
        .map(|(_, suit)| suit)
}

fn strip_to_alphanumeric(s: &str) -> String {
    s.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Split a trailing suit letter off a stripped, lowercased token.
fn split_suit(token: &str) -> Option<(&str, Suit)> {
    let last = token.chars().last()?;
    let suit = Suit::from_letter(last)?;
    Some((&token[..token.len() - last.len_utf8()], suit))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rank(raw: &str) -> ParsedRank {
        CardParser::default().parse_rank(raw)
    }

    fn known(r: Rank) -> ParsedRank {
        ParsedRank::Known(r)
    }

    #[test]
    fn test_plain_codes() {
        assert_eq!(rank("3S"), known(Rank::Three));
        assert_eq!(rank("9"), known(Rank::Nine));
        assert_eq!(rank("10H"), known(Rank::Ten));
        assert_eq!(rank("TD"), known(Rank::Ten));
        assert_eq!(rank("AC"), known(Rank::Ace));
        assert_eq!(rank("2c"), known(Rank::Two));
        assert_eq!(rank("  kd "), known(Rank::King));
    }

    #[test]
    fn test_joker_tokens() {
        for code in ["RJ", "bj", "Joker", "JRJ", "jbj", "NJ", "red_joker", "BlackJoker"] {
            assert_eq!(rank(code), known(Rank::Joker), "{code}");
        }
        assert_eq!(rank("J"), known(Rank::Jack));
        assert_eq!(rank("JH"), known(Rank::Jack));
    }

    #[test]
    fn test_one_means_ten() {
        assert_eq!(rank("1"), known(Rank::Ten));
        assert_eq!(rank("1S"), known(Rank::Ten));

        let strict = CardParser::new(ParserConfig::default().with_one_means_ten(false));
        assert_eq!(strict.parse_rank("1S"), ParsedRank::Unparseable("1".into()));
    }

    #[test]
    fn test_out_of_range_numbers_pass_through() {
        assert_eq!(rank("11S"), ParsedRank::Unparseable("11".into()));
        assert_eq!(rank("0"), ParsedRank::Unparseable("0".into()));
        assert_eq!(rank("007"), known(Rank::Seven));
        assert!(rank("99999999999999999999").is_unparseable());
    }

    #[test]
    fn test_fuzzy_words() {
        assert_eq!(rank("ten_of_hearts"), known(Rank::Ten));
        assert_eq!(rank("ace-of-clubs"), known(Rank::Ace));
        assert_eq!(rank("queen"), known(Rank::Queen));
        assert_eq!(rank("KING"), known(Rank::King));
        assert_eq!(rank("jk"), known(Rank::Jack));
    }

    #[test]
    fn test_any_a_means_ace_by_default() {
        // The Ace rule runs before Jack/Queen/King and matches a bare "a".
        assert_eq!(rank("xa"), known(Rank::Ace));
        assert_eq!(rank("jack"), known(Rank::Ace));
        assert_eq!(rank("Jack of Diamonds"), known(Rank::Ace));
        assert_eq!(rank("3 of spades"), known(Rank::Ace));
        // "ten" still wins over the Ace rule.
        assert_eq!(rank("ten_of_spades"), known(Rank::Ten));
    }

    #[test]
    fn test_strict_ace_token() {
        let parser = CardParser::new(ParserConfig::default().with_strict_ace_token(true));
        assert_eq!(parser.parse_rank("ace-of-clubs"), known(Rank::Ace));
        assert_eq!(parser.parse_rank("jack"), known(Rank::Jack));
        assert_eq!(parser.parse_rank("Jack of Diamonds"), known(Rank::Jack));
        assert_eq!(parser.parse_rank("3 of spades"), known(Rank::Three));
        assert_eq!(parser.parse_rank("xa"), ParsedRank::Unparseable("X".into()));

        let strict = CardParser::new(ParserConfig::strict());
        assert_eq!(strict.parse_rank("jack"), known(Rank::Jack));
        assert_eq!(strict.parse_rank("3 of spades"), ParsedRank::Unparseable("3ofspade".into()));
    }

    #[test]
    fn test_lone_suit_letter_is_not_a_suited_rank() {
        assert_eq!(rank("S"), ParsedRank::Unparseable("S".into()));
        assert_eq!(rank("h"), ParsedRank::Unparseable("H".into()));
        assert_eq!(suit_of("S"), None);
    }

    #[test]
    fn test_unparseable_input() {
        assert_eq!(rank(""), ParsedRank::Unparseable(String::new()));
        assert_eq!(rank("   "), ParsedRank::Unparseable(String::new()));
        assert_eq!(rank("??"), ParsedRank::Unparseable("??".into()));
        assert_eq!(rank("xyz"), ParsedRank::Unparseable("X".into()));
    }

    #[test]
    fn test_first_char_fallback_can_be_disabled() {
        assert_eq!(rank("kx9"), known(Rank::King));
        assert_eq!(rank("5zz"), known(Rank::Five));

        let strict = CardParser::new(ParserConfig::default().with_first_char_fallback(false));
        assert_eq!(strict.parse_rank("5zz"), ParsedRank::Unparseable("5zz".into()));
        assert_eq!(strict.parse_rank("S"), ParsedRank::Unparseable("S".into()));
        // Exact and fuzzy rules are unaffected.
        assert_eq!(strict.parse_rank("kx9"), known(Rank::King));
        assert_eq!(strict.parse_rank("QH"), known(Rank::Queen));
    }

    #[test]
    fn test_suit_of() {
        assert_eq!(suit_of("3S"), Some(Suit::Spades));
        assert_eq!(suit_of("10h"), Some(Suit::Hearts));
        assert_eq!(suit_of("K-D"), Some(Suit::Diamonds));
        assert_eq!(suit_of("2c"), Some(Suit::Clubs));
        assert_eq!(suit_of("9"), None);
        assert_eq!(suit_of("RJ"), None);
        assert_eq!(suit_of(""), None);
    }

    #[test]
    fn test_parse_drops_suit_for_jokers() {
        let card = CardParser::default().parse("Joker");
        assert!(card.is_joker());
        assert_eq!(card.suit, None);
    }

    #[test]
    fn test_canonical_code() {
        let parser = CardParser::default();
        assert_eq!(parser.parse("th").canonical_code().as_deref(), Some("10H"));
        assert_eq!(parser.parse("1s").canonical_code().as_deref(), Some("10S"));
        assert_eq!(parser.parse("q").canonical_code().as_deref(), Some("Q"));
        assert_eq!(parser.parse("bj").canonical_code().as_deref(), Some("JOKER"));
        assert_eq!(parser.parse("??").canonical_code(), None);
    }

    #[test]
    fn test_red_joker_detection() {
        assert!(is_red_joker_code("RJ"));
        assert!(is_red_joker_code("red_joker"));
        assert!(is_red_joker_code("joker_red"));
        assert!(is_red_joker_code("JokerRed"));
        assert!(!is_red_joker_code("BJ"));
        assert!(!is_red_joker_code("Joker"));
        assert!(!is_red_joker_code("3H"));
    }

    #[test]
    fn test_rule_names_are_unique() {
        let mut names: Vec<_> = RANK_RULES.iter().map(|r| r.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), RANK_RULES.len());
        assert_eq!(RANK_RULES.last().map(|r| r.name), Some("first-char"));
    }
}
