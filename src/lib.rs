//! # tycoon-rules
//!
//! Play validation for Tycoon (Daifugō / President) card games.
//!
//! ## Design Principles
//!
//! 1. **Strings at the Boundary**: Cards arrive as loose codes ("10H", "th",
//!    "ten_of_hearts", "RJ"). Parsing never fails; codes that resolve to no
//!    rank are carried through and rejected by the rules.
//!
//! 2. **One Rulebook**: Client-side prediction and server-side adjudication
//!    call the same `RulesEngine` methods.
//!
//! 3. **Booleans Out, Reasons Aside**: Validation answers yes or no. Why a
//!    play was rejected goes to `tracing` and an optional `DiagnosticSink`.
//!
//! ## Rules in Brief
//!
//! - Ranks run 3 (weakest) to 2, then Joker. Revolution mode flips the
//!   comparison direction and moves the Joker to the front of the table;
//!   the plain ranks keep their order.
//! - A meld is 1+ cards of one rank; Jokers are wild.
//! - A play must match the pot's size and outrank its base rank.
//! - A lone 3 of Spades beats a lone Joker.
//!
//! ## Modules
//!
//! - `core`: Configuration, rule violations, diagnostics
//! - `cards`: Ranks, suits, card-code parsing, display, the standard deck
//! - `rules`: Strength tables, melds, play comparison, hands, pot history
//!
//! ## Example
//!
//! ```
//! use tycoon_rules::{RulesEngine, TycoonEngine};
//!
//! let engine = TycoonEngine::new();
//! assert!(engine.is_valid_play(&["9S", "9H"], &["7C", "7D"]));
//! assert!(!engine.is_valid_play(&["9S"], &["7C", "7D"]));
//! ```

pub mod core;
pub mod cards;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    CollectingSink, DiagnosticSink, EngineConfig, ParserConfig, RuleViolation,
};

pub use crate::cards::{
    card_color, display_label, is_joker_code, standard_deck, suit_of, CardColor,
    CardParser, ParsedCard, ParsedRank, Rank, Suit,
};

pub use crate::rules::{
    EngineSnapshot, MeldCheck, PlayOutcome, PotHistory, RankOrder, RulesEngine, TycoonEngine,
};
