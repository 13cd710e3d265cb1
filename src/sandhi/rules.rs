//! Sandhi rule and override tables
//!
//! A rule rewrites the boundary between two words: the final segment of the
//! first word and the initial segment of the second are replaced by a single
//! replacement segment. Overrides map literal word pairs straight to their
//! combined form.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Built-in boundary rules: (final segment, initial segment, replacement)
///
/// Order matters: multi-segment rules are tried in this order.
const DEFAULT_RULES: &[(&str, &str, &str)] = &[
    // vowel + vowel
    ("a", "a", "ā"),
    ("a", "i", "e"),
    ("a", "u", "o"),
    ("a", "e", "ai"),
    ("a", "o", "au"),
    ("i", "a", "ya"),
    ("u", "a", "va"),
    ("e", "a", "aya"),
    ("o", "a", "ava"),
    // visarga before a vowel
    ("ḥ", "a", "a"),
    ("ḥ", "i", "i"),
    ("ḥ", "u", "u"),
    // anusvara
    ("m", "a", "ma"),
    ("m", "i", "mi"),
    ("m", "u", "mu"),
    // whole initial segments
    ("a", "alaya", "alaya"), // Deva + Alaya -> Devalaya
    ("a", "īśa", "eśa"),     // Deva + Īśa -> Deveśa
];

/// Built-in exact combinations
const DEFAULT_OVERRIDES: &[(&str, &str, &str)] = &[
    ("Deva", "Alaya", "Devalaya"),
    ("Rama", "Ayana", "Ramanayana"),
    ("Krishna", "Arjuna", "Krishnarjuna"),
    ("Ganga", "Uttara", "Gangottara"),
];

static BUILTIN_RULES: LazyLock<RuleTable> = LazyLock::new(|| {
    RuleTable::from_entries(DEFAULT_RULES.iter().copied())
});

static BUILTIN_OVERRIDES: LazyLock<OverrideTable> = LazyLock::new(|| {
    OverrideTable::from_entries(DEFAULT_OVERRIDES.iter().copied())
});

/// How multi-segment rules are chosen when several initial segments match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// First matching rule in definition order
    #[default]
    FirstInTableOrder,
    /// Longest matching initial segment; equal lengths keep definition order
    LongestPrefix,
}

/// One boundary rewrite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub final_segment: String,
    pub initial_segment: String,
    pub replacement: String,
}

impl Rule {
    /// Rule whose key segments are both exactly one character
    fn single_key(&self) -> Option<(char, char)> {
        Some((single_char(&self.final_segment)?, single_char(&self.initial_segment)?))
    }

    /// Whether the initial segment spans several characters
    pub fn is_multi_segment(&self) -> bool {
        self.prefix_len() > 1
    }

    /// Length of the initial segment in characters
    pub fn prefix_len(&self) -> usize {
        self.initial_segment.chars().count()
    }
}

/// Ordered boundary rule table
///
/// Keys are stored lowercase. Re-defining a key replaces its replacement but
/// keeps the position of the first definition.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: Vec<Rule>,
    /// (final char, initial char) -> index into `rules`
    single: HashMap<(char, char), usize>,
    /// indices of multi-segment rules, in definition order
    multi: Vec<usize>,
}

impl RuleTable {
    /// Empty table (every combination falls back to concatenation)
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the built-in table
    pub fn builtin() -> Self {
        BUILTIN_RULES.clone()
    }

    /// Build a table from (final, initial, replacement) entries in order
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, S, S)>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for (final_segment, initial_segment, replacement) in entries {
            table.insert(final_segment, initial_segment, replacement);
        }
        table
    }

    /// Add a rule, or replace the replacement of an existing key
    pub fn insert(
        &mut self,
        final_segment: impl Into<String>,
        initial_segment: impl Into<String>,
        replacement: impl Into<String>,
    ) {
        let final_segment = final_segment.into().to_lowercase();
        let initial_segment = initial_segment.into().to_lowercase();
        let replacement = replacement.into();

        if let Some(existing) = self
            .rules
            .iter_mut()
            .find(|r| r.final_segment == final_segment && r.initial_segment == initial_segment)
        {
            existing.replacement = replacement;
            return;
        }

        let rule = Rule {
            final_segment,
            initial_segment,
            replacement,
        };
        let index = self.rules.len();
        if let Some(key) = rule.single_key() {
            self.single.insert(key, index);
        }
        if rule.is_multi_segment() {
            self.multi.push(index);
        }
        self.rules.push(rule);
    }

    /// Rule keyed by a single final and initial character
    ///
    /// Both characters are lowercased before lookup.
    pub fn lookup(&self, last: char, first: char) -> Option<&Rule> {
        let key = (lower_char(last)?, lower_char(first)?);
        self.single.get(&key).map(|&i| &self.rules[i])
    }

    /// Multi-segment rule whose initial segment prefixes `word` (already lowercase)
    pub fn match_prefix(&self, word: &str, strategy: MatchStrategy) -> Option<&Rule> {
        let mut candidates = self
            .multi
            .iter()
            .map(|&i| &self.rules[i])
            .filter(|r| word.starts_with(r.initial_segment.as_str()));

        match strategy {
            MatchStrategy::FirstInTableOrder => candidates.next(),
            MatchStrategy::LongestPrefix => {
                candidates.fold(None, |best: Option<&Rule>, rule| match best {
                    Some(b) if b.prefix_len() >= rule.prefix_len() => Some(b),
                    _ => Some(rule),
                })
            }
        }
    }

    /// Rules in definition order
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Ordered exact-pair table, consulted before any rule
#[derive(Debug, Clone, Default)]
pub struct OverrideTable {
    entries: Vec<(String, String, String)>,
    /// word1 -> word2 -> index into `entries`
    index: HashMap<String, HashMap<String, usize>>,
}

impl OverrideTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the built-in table
    pub fn builtin() -> Self {
        BUILTIN_OVERRIDES.clone()
    }

    /// Build a table from (word1, word2, combined) entries in order
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, S, S)>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for (word1, word2, combined) in entries {
            table.insert(word1, word2, combined);
        }
        table
    }

    /// Add an override; an existing pair keeps its position
    pub fn insert(
        &mut self,
        word1: impl Into<String>,
        word2: impl Into<String>,
        combined: impl Into<String>,
    ) {
        let (word1, word2) = (word1.into(), word2.into());
        let combined = combined.into();

        if let Some(i) = self.position(&word1, &word2) {
            self.entries[i].2 = combined;
            return;
        }

        self.index
            .entry(word1.clone())
            .or_default()
            .insert(word2.clone(), self.entries.len());
        self.entries.push((word1, word2, combined));
    }

    /// Combined form of a literal pair (case-sensitive)
    pub fn get(&self, word1: &str, word2: &str) -> Option<&str> {
        self.position(word1, word2)
            .map(|i| self.entries[i].2.as_str())
    }

    fn position(&self, word1: &str, word2: &str) -> Option<usize> {
        self.index.get(word1)?.get(word2).copied()
    }

    /// Override pairs in definition order
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(w1, w2, _)| (w1.as_str(), w2.as_str()))
    }

    /// (word1, word2, combined) in definition order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.entries
            .iter()
            .map(|(w1, w2, c)| (w1.as_str(), w2.as_str(), c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Lowercase form of `c`, if it stays a single character
pub(crate) fn lower_char(c: char) -> Option<char> {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => Some(l),
        _ => None,
    }
}
