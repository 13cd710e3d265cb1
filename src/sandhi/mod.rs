//! Sandhi (euphonic combination) of Sanskrit word pairs
//!
//! # Overview
//!
//! Two words are joined at their boundary according to a small ordered rule
//! table. Known irregular pairs are looked up in an override table first, and
//! anything no rule covers is simply concatenated, so combining never fails
//! for non-empty input.
//!
//! ```
//! use panini::sandhi::{SandhiEngine, Derivation};
//!
//! let engine = SandhiEngine::new();
//! assert_eq!(engine.combine("Ganga", "Uttara").unwrap(), "Gangottara");
//!
//! let traced = engine.combine_traced("Deva", "īśa").unwrap();
//! assert_eq!(traced.combined, "Deveśa");
//! assert!(matches!(traced.derivation, Derivation::MultiSegment { .. }));
//! ```

mod engine;
mod error;
mod rules;

pub use engine::{Combination, Derivation, SandhiEngine};
pub use error::{SandhiError, WordSlot};
pub use rules::{MatchStrategy, OverrideTable, Rule, RuleTable};
