//! Play validation rules.
//!
//! Hosts hold a `RulesEngine` (usually `TycoonEngine`) and ask it:
//! - Is this selection a consistent meld?
//! - Does it legally follow the current pot?
//! - How should this hand be ordered for display?
//!
//! The free functions underneath take the parser and revolution state
//! explicitly, for callers that manage mode themselves.

pub mod comparator;
pub mod engine;
pub mod hand;
pub mod meld;
pub mod pot;
pub mod strength;

pub use comparator::{evaluate_play, PlayOutcome};
pub use engine::{EngineSnapshot, RulesEngine, TycoonEngine};
pub use hand::{remove_played_cards, sort_hand};
pub use meld::{validate_meld, MeldCheck, ParsedMeld};
pub use pot::{last_non_empty_meld, PotHistory};
pub use strength::{RankOrder, NORMAL_ORDER, REVOLUTION_ORDER};
