//! Rank and suit value types.
//!
//! A Tycoon deck has 14 rank classes: the 13 standard ranks plus Joker.
//! Strength is NOT encoded in the enum order; see [`crate::rules::RankOrder`]
//! for the normal and revolution tables.

use serde::{Deserialize, Serialize};

/// One of the 14 rank classes.
///
/// Declaration order follows the normal-mode table for readability only.
/// Never compare ranks with `Ord`; use [`crate::rules::RankOrder::index_of`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
    Two,
    Joker,
}

impl Rank {
    /// All 14 rank classes.
    pub const ALL: [Rank; 14] = [
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

    /// Canonical label ("3".."10", "J", "Q", "K", "A", "2", "Joker").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Joker => "Joker",
        }
    }

    /// Look up a rank by its canonical label.
    ///
    /// Matching is exact; the lenient spellings live in the card parser.
    ///
    /// ```
    /// use tycoon_rules::cards::Rank;
    ///
    /// assert_eq!(Rank::from_label("10"), Some(Rank::Ten));
    /// assert_eq!(Rank::from_label("Joker"), Some(Rank::Joker));
    /// assert_eq!(Rank::from_label("11"), None);
    /// ```
    #[must_use]
    pub fn from_label(label: &str) -> Option<Rank> {
        Rank::ALL.iter().copied().find(|rank| rank.label() == label)
    }

    /// Map a numeric rank value (2..=10) to its rank class.
    #[must_use]
    pub const fn from_number(value: u32) -> Option<Rank> {
        match value {
            2 => Some(Rank::Two),
            3 => Some(Rank::Three),
            4 => Some(Rank::Four),
            5 => Some(Rank::Five),
            6 => Some(Rank::Six),
            7 => Some(Rank::Seven),
            8 => Some(Rank::Eight),
            9 => Some(Rank::Nine),
            10 => Some(Rank::Ten),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_joker(self) -> bool {
        matches!(self, Rank::Joker)
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Card suit.
///
/// Declaration order is the hand-sorting tie-break order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    /// Parse a suit letter (case-insensitive).
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Suit> {
        match letter.to_ascii_uppercase() {
            'S' => Some(Suit::Spades),
            'H' => Some(Suit::Hearts),
            'D' => Some(Suit::Diamonds),
            'C' => Some(Suit::Clubs),
            _ => None,
        }
    }

    /// Uppercase suit letter used in card codes.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
        }
    }

    /// Unicode pip glyph.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }

    /// Hearts and diamonds are red.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
