//! Sandhi combination engine
//!
//! Combines two words in strict precedence order:
//! 1. exact override for the literal pair
//! 2. single-character boundary rule (last char of word1, first char of word2)
//! 3. multi-character initial segment rule on word2
//! 4. plain concatenation

use std::fmt;

use crate::config::GeneratorConfig;

use super::error::{SandhiError, WordSlot};
use super::rules::{lower_char, MatchStrategy, OverrideTable, RuleTable};

/// Which step produced a combination
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Derivation {
    /// Literal pair found in the override table
    Override,
    /// Boundary rule keyed by single characters (lowercased)
    SingleSegment { final_segment: char, initial_segment: char },
    /// Rule keyed by a multi-character initial segment of word2
    MultiSegment { prefix: String },
    /// No rule applied
    Concatenation,
}

impl fmt::Display for Derivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Derivation::Override => write!(f, "override"),
            Derivation::SingleSegment {
                final_segment,
                initial_segment,
            } => write!(f, "rule {} + {}", final_segment, initial_segment),
            Derivation::MultiSegment { prefix } => write!(f, "rule _ + {}", prefix),
            Derivation::Concatenation => write!(f, "concatenation"),
        }
    }
}

/// Combined word together with the step that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination {
    pub combined: String,
    pub derivation: Derivation,
}

/// Sandhi combination engine
///
/// Owns its tables; they are never modified after construction.
#[derive(Debug, Clone)]
pub struct SandhiEngine {
    rules: RuleTable,
    overrides: OverrideTable,
    strategy: MatchStrategy,
}

impl Default for SandhiEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SandhiEngine {
    /// Engine with the built-in rule and override tables
    pub fn new() -> Self {
        Self::with_tables(RuleTable::builtin(), OverrideTable::builtin())
    }

    /// Engine with caller-supplied tables
    pub fn with_tables(rules: RuleTable, overrides: OverrideTable) -> Self {
        Self {
            rules,
            overrides,
            strategy: MatchStrategy::default(),
        }
    }

    /// Engine with the built-in tables and the configured match strategy
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new().with_strategy(config.match_strategy)
    }

    /// Set how multi-segment rules break ties
    pub fn with_strategy(mut self, strategy: MatchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn overrides(&self) -> &OverrideTable {
        &self.overrides
    }

    pub fn strategy(&self) -> MatchStrategy {
        self.strategy
    }

    /// Combine two words
    ///
    /// # Examples
    /// ```
    /// use panini::SandhiEngine;
    ///
    /// let engine = SandhiEngine::new();
    /// assert_eq!(engine.combine("Deva", "Alaya").unwrap(), "Devalaya");
    /// assert_eq!(engine.combine("Rama", "Iti").unwrap(), "Rameti");
    /// ```
    pub fn combine(&self, word1: &str, word2: &str) -> Result<String, SandhiError> {
        self.combine_traced(word1, word2).map(|c| c.combined)
    }

    /// Combine two possibly absent words
    ///
    /// Absence is reported as `NullInput` and is checked before emptiness.
    pub fn combine_opt(
        &self,
        word1: Option<&str>,
        word2: Option<&str>,
    ) -> Result<String, SandhiError> {
        match (word1, word2) {
            (Some(w1), Some(w2)) => self.combine(w1, w2),
            (w1, w2) => Err(SandhiError::NullInput {
                slot: WordSlot::from_flags(w1.is_none(), w2.is_none()).unwrap_or(WordSlot::Both),
            }),
        }
    }

    /// Combine two words and report which step applied
    pub fn combine_traced(&self, word1: &str, word2: &str) -> Result<Combination, SandhiError> {
        if let Some(slot) = WordSlot::from_flags(word1.is_empty(), word2.is_empty()) {
            return Err(SandhiError::empty(slot));
        }

        let combination = self.apply(word1, word2);
        log::trace!(
            "{} + {} = {} ({})",
            word1,
            word2,
            combination.combined,
            combination.derivation
        );
        Ok(combination)
    }

    /// Whether combining the pair yields `expected`
    pub fn validate(&self, word1: &str, word2: &str, expected: &str) -> Result<bool, SandhiError> {
        Ok(self.combine(word1, word2)? == expected)
    }

    /// Rule application on non-empty words
    fn apply(&self, word1: &str, word2: &str) -> Combination {
        if let Some(combined) = self.overrides.get(word1, word2) {
            return Combination {
                combined: combined.to_string(),
                derivation: Derivation::Override,
            };
        }

        // both words are non-empty here
        let (Some(last), Some(first)) = (word1.chars().last(), word2.chars().next()) else {
            return concatenate(word1, word2);
        };
        let stem = &word1[..word1.len() - last.len_utf8()];

        if let Some(rule) = self.rules.lookup(last, first) {
            let rest = &word2[first.len_utf8()..];
            return Combination {
                combined: join(stem, &rule.replacement, rest),
                derivation: Derivation::SingleSegment {
                    final_segment: lower_char(last).unwrap_or(last),
                    initial_segment: lower_char(first).unwrap_or(first),
                },
            };
        }

        let lowered = word2.to_lowercase();
        if let Some(rule) = self.rules.match_prefix(&lowered, self.strategy) {
            let rest: String = word2.chars().skip(rule.prefix_len()).collect();
            return Combination {
                combined: join(stem, &rule.replacement, &rest),
                derivation: Derivation::MultiSegment {
                    prefix: rule.initial_segment.clone(),
                },
            };
        }

        concatenate(word1, word2)
    }
}

fn join(stem: &str, replacement: &str, rest: &str) -> String {
    let mut out = String::with_capacity(stem.len() + replacement.len() + rest.len());
    out.push_str(stem);
    out.push_str(replacement);
    out.push_str(rest);
    out
}

fn concatenate(word1: &str, word2: &str) -> Combination {
    Combination {
        combined: format!("{}{}", word1, word2),
        derivation: Derivation::Concatenation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_combinations() {
        let engine = SandhiEngine::new();
        assert_eq!(engine.combine("Deva", "Alaya").unwrap(), "Devalaya");
        assert_eq!(engine.combine("Rama", "Ayana").unwrap(), "Ramanayana");
        assert_eq!(engine.combine("Krishna", "Arjuna").unwrap(), "Krishnarjuna");
        assert_eq!(engine.combine("Ganga", "Uttara").unwrap(), "Gangottara");
    }

    #[test]
    fn test_override_beats_rules() {
        // a + a would otherwise give "Devālaya"
        let engine = SandhiEngine::new();
        let traced = engine.combine_traced("Deva", "Alaya").unwrap();
        assert_eq!(traced.derivation, Derivation::Override);

        let no_overrides = SandhiEngine::with_tables(RuleTable::builtin(), OverrideTable::new());
        assert_eq!(no_overrides.combine("Deva", "Alaya").unwrap(), "Devālaya");
    }

    #[test]
    fn test_vowel_sandhi() {
        let engine = SandhiEngine::new();
        assert_eq!(engine.combine("Rama", "Iti").unwrap(), "Rameti");
        assert_eq!(engine.combine("Surya", "Udaya").unwrap(), "Suryodaya");
        assert_eq!(engine.combine("Maha", "Oshadhi").unwrap(), "Mahaushadhi");
        assert_eq!(engine.combine("Iti", "Adi").unwrap(), "Ityadi");
        assert_eq!(engine.combine("Su", "Agata").unwrap(), "Svagata");
    }

    #[test]
    fn test_visarga_and_anusvara() {
        let engine = SandhiEngine::new();
        assert_eq!(engine.combine("Ramaḥ", "api").unwrap(), "Ramaapi");
        assert_eq!(engine.combine("Aham", "asmi").unwrap(), "Ahamasmi");
    }

    #[test]
    fn test_case_is_preserved_outside_boundary() {
        let engine = SandhiEngine::new();
        let traced = engine.combine_traced("RAMA", "ITI").unwrap();
        assert_eq!(traced.combined, "RAMeTI");
        assert_eq!(
            traced.derivation,
            Derivation::SingleSegment {
                final_segment: 'a',
                initial_segment: 'i'
            }
        );
    }

    #[test]
    fn test_multi_segment_rule() {
        let engine = SandhiEngine::new();
        let traced = engine.combine_traced("Deva", "īśa").unwrap();
        assert_eq!(traced.combined, "Deveśa");
        assert_eq!(
            traced.derivation,
            Derivation::MultiSegment {
                prefix: "īśa".to_string()
            }
        );
        // matched on the lowercased word, remainder keeps its case
        assert_eq!(engine.combine("Deva", "Īśana").unwrap(), "Deveśana");
        assert_eq!(engine.combine("Deva", "ĪŚANA").unwrap(), "DeveśaNA");
        // "īśvara" does not start with "īśa"
        assert_eq!(engine.combine("Deva", "Īśvara").unwrap(), "DevaĪśvara");
    }

    #[test]
    fn test_multi_segment_ignores_final_segment() {
        // the rule keyed on "a" still fires after a consonant-final word1,
        // and that final consonant is dropped
        let engine = SandhiEngine::new();
        let traced = engine.combine_traced("Jagat", "īśa").unwrap();
        assert_eq!(traced.combined, "Jagaeśa");
        assert_eq!(
            traced.derivation,
            Derivation::MultiSegment {
                prefix: "īśa".to_string()
            }
        );
    }

    #[test]
    fn test_strategy_changes_tie_break() {
        let rules = RuleTable::from_entries([("a", "ut", "o"), ("a", "utta", "otta")]);
        let first = SandhiEngine::with_tables(rules.clone(), OverrideTable::new());
        let longest = SandhiEngine::with_tables(rules, OverrideTable::new())
            .with_strategy(MatchStrategy::LongestPrefix);

        assert_eq!(first.combine("Ganga", "uttara").unwrap(), "Gangotara");
        assert_eq!(longest.combine("Ganga", "uttara").unwrap(), "Gangottara");
    }

    #[test]
    fn test_fallback_concatenation() {
        let engine = SandhiEngine::new();
        let traced = engine.combine_traced("Sita", "Kutira").unwrap();
        assert_eq!(traced.combined, "SitaKutira");
        assert_eq!(traced.derivation, Derivation::Concatenation);
        assert_eq!(engine.combine("x", "y").unwrap(), "xy");
    }

    #[test]
    fn test_empty_rule_table_concatenates() {
        let engine = SandhiEngine::with_tables(RuleTable::new(), OverrideTable::new());
        assert_eq!(engine.combine("Rama", "Iti").unwrap(), "RamaIti");
    }

    #[test]
    fn test_empty_input() {
        let engine = SandhiEngine::new();
        assert!(matches!(
            engine.combine("", "Alaya"),
            Err(SandhiError::InvalidInput {
                slot: WordSlot::First,
                ..
            })
        ));
        assert!(matches!(
            engine.combine("Deva", ""),
            Err(SandhiError::InvalidInput {
                slot: WordSlot::Second,
                ..
            })
        ));
        assert!(matches!(
            engine.combine("", ""),
            Err(SandhiError::InvalidInput {
                slot: WordSlot::Both,
                ..
            })
        ));
    }

    #[test]
    fn test_null_input() {
        let engine = SandhiEngine::new();
        assert_eq!(
            engine.combine_opt(None, Some("Alaya")),
            Err(SandhiError::NullInput {
                slot: WordSlot::First
            })
        );
        assert_eq!(
            engine.combine_opt(Some("Deva"), None),
            Err(SandhiError::NullInput {
                slot: WordSlot::Second
            })
        );
        // absence wins over emptiness
        assert_eq!(
            engine.combine_opt(None, Some("")),
            Err(SandhiError::NullInput {
                slot: WordSlot::First
            })
        );
        assert_eq!(
            engine.combine_opt(Some("Deva"), Some("Alaya")).unwrap(),
            "Devalaya"
        );
    }

    #[test]
    fn test_validate() {
        let engine = SandhiEngine::new();
        assert!(engine.validate("Deva", "Alaya", "Devalaya").unwrap());
        assert!(!engine.validate("Deva", "Alaya", "WrongResult").unwrap());
        assert!(engine.validate("", "Alaya", "Alaya").is_err());
    }

    #[test]
    fn test_deterministic() {
        let engine = SandhiEngine::new();
        let first = engine.combine("Lakshmana", "Mandira").unwrap();
        for _ in 0..10 {
            assert_eq!(engine.combine("Lakshmana", "Mandira").unwrap(), first);
        }
    }

    #[test]
    fn test_from_config() {
        let config = GeneratorConfig {
            match_strategy: MatchStrategy::LongestPrefix,
            ..GeneratorConfig::default()
        };
        let engine = SandhiEngine::from_config(&config);
        assert_eq!(engine.strategy(), MatchStrategy::LongestPrefix);
        assert_eq!(engine.overrides().len(), 4);
    }
}
