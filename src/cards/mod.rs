//! Card model: ranks, suits, code parsing, and display helpers.
//!
//! ## Key Types
//!
//! - `Rank`: The 14 rank classes (3..2 plus Joker)
//! - `Suit`: Spades, Hearts, Diamonds, Clubs
//! - `CardParser`: Lenient card-code normaliser
//! - `ParsedRank` / `ParsedCard`: Parser output, unparseable codes included
//!
//! Card codes stay plain strings at the API boundary. Parsing happens per
//! call and never fails; unresolved codes are carried as
//! `ParsedRank::Unparseable` for the rules layer to reject.

pub mod deck;
pub mod display;
pub mod parser;
pub mod rank;

pub use deck::{standard_deck, JOKER_CODES};
pub use display::{card_color, display_label, CardColor, JOKER_LABEL};
pub use parser::{
    is_joker_code, is_red_joker_code, suit_of, CardParser, ParsedCard, ParsedRank, RankRule,
    JOKER_TOKENS, RANK_RULES,
};
pub use rank::{Rank, Suit};
