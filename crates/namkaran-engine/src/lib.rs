//! Birth-attribute and name-selection engine.
//!
//! Turns a birth date and naming preferences into a sign label, a lunar
//! mansion label, lucky numbers and colors, scored name suggestions drawn
//! from a [`namkaran_core::NameCorpus`], and localized narrative text.
//! Stages run in order from [`sign`] through [`narrative`]; [`Engine`] wires
//! them together and owns the only async behavior, a configurable delay.

pub mod colors;
pub mod error;
pub mod mansion;
pub mod narrative;
pub mod numerology;
pub mod pipeline;
pub mod selection;
pub mod sign;
pub mod types;

pub use error::EngineError;
pub use narrative::Language;
pub use pipeline::{Consultation, Engine};
pub use selection::{RuleOutcome, RuleReport, SelectionTrace};
pub use sign::ZodiacSign;
pub use types::{AstrologyResult, BirthInput, BirthRequest, EngineConfig, NameSuggestion};
