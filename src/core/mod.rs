//! Engine infrastructure: configuration, rule violations, diagnostics.
//!
//! Nothing in here knows what a meld is. The rules layer builds on these.

pub mod config;
pub mod diagnostics;
pub mod error;

pub use config::{EngineConfig, ParserConfig};
pub use diagnostics::{CollectingSink, DiagnosticSink};
pub use error::RuleViolation;
