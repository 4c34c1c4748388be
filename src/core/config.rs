//! Engine configuration types.
//!
//! Hosts configure the engine at construction time:
//! - `ParserConfig`: How lenient card-code parsing is
//! - `EngineConfig`: Combines parser settings with the initial revolution state
//!
//! The defaults reproduce the permissive parsing the game clients rely on.

use serde::{Deserialize, Serialize};

/// Card parser leniency switches.
///
/// The defaults match the behaviour of existing clients. `strict()` turns
/// every guess off: inputs that would have been guessed become unparseable
/// or resolve through a narrower rule instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Fall back to the first character of an unrecognised rank portion.
    ///
    /// A token like `"Kxyz"` silently becomes King under this fallback.
    pub first_char_fallback: bool,

    /// Read a numeric `"1"` as ten.
    pub one_means_ten: bool,

    /// Require `"ace"` rather than any `"a"` for the fuzzy Ace rule.
    ///
    /// Off by default: `"jack"` and `"3 of spades"` then contain an `a` and
    /// resolve to Ace.
    #[serde(default)]
    pub strict_ace_token: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            first_char_fallback: true,
            one_means_ten: true,
            strict_ace_token: false,
        }
    }
}

impl ParserConfig {
    /// Strict parsing: no first-character guess, no `"1"` for ten, and the
    /// Ace rule needs the whole word.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            first_char_fallback: false,
            one_means_ten: false,
            strict_ace_token: true,
        }
    }

    #[must_use]
    pub fn with_first_char_fallback(mut self, enabled: bool) -> Self {
        self.first_char_fallback = enabled;
        self
    }

    #[must_use]
    pub fn with_one_means_ten(mut self, enabled: bool) -> Self {
        self.one_means_ten = enabled;
        self
    }

    #[must_use]
    pub fn with_strict_ace_token(mut self, enabled: bool) -> Self {
        self.strict_ace_token = enabled;
        self
    }
}

/// Complete engine configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Card parser settings.
    #[serde(default)]
    pub parser: ParserConfig,

    /// Revolution state the engine starts in.
    #[serde(default)]
    pub initial_revolution: bool,
}

impl EngineConfig {
    /// Create a config with custom parser settings.
    #[must_use]
    pub fn with_parser(mut self, parser: ParserConfig) -> Self {
        self.parser = parser;
        self
    }

    /// Create a config that starts in revolution mode.
    #[must_use]
    pub fn with_revolution(mut self, revolution: bool) -> Self {
        self.initial_revolution = revolution;
        self
    }
}
