//! Display helpers for card codes.
//!
//! The UI layer draws from these; nothing here affects validation.

use serde::{Deserialize, Serialize};

use super::parser::{is_joker_code, is_red_joker_code, suit_of};

/// Label shown for every joker code.
pub const JOKER_LABEL: &str = "JOKER";

/// Map internal joker codes to [`JOKER_LABEL`]; every other code unchanged.
///
/// ```
/// use tycoon_rules::cards::display_label;
///
/// assert_eq!(display_label("RJ"), "JOKER");
/// assert_eq!(display_label("bj"), "JOKER");
/// assert_eq!(display_label("10H"), "10H");
/// ```
#[must_use]
pub fn display_label(card_code: &str) -> String {
    if is_joker_code(card_code) {
        JOKER_LABEL.to_string()
    } else {
        card_code.to_string()
    }
}

/// Ink colour a card is drawn in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardColor {
    Red,
    Black,
}

/// Colour for a card code.
///
/// The red Joker and hearts/diamonds are red; other jokers and spades/clubs
/// are black. Codes without a recognisable suit have no colour.
#[must_use]
pub fn card_color(card_code: &str) -> Option<CardColor> {
    if is_joker_code(card_code) {
        return Some(if is_red_joker_code(card_code) {
            CardColor::Red
        } else {
            CardColor::Black
        });
    }
    suit_of(card_code).map(|suit| {
        if suit.is_red() {
            CardColor::Red
        } else {
            CardColor::Black
        }
    })
}
