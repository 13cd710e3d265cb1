//! Deterministic word-pair sampling
//!
//! Index `i` always maps to the same pair, so a dataset of a given size can be
//! regenerated exactly.

use std::iter::FusedIterator;

use crate::sandhi::SandhiEngine;

/// Built-in first words
pub const DEFAULT_FIRST_WORDS: &[&str] =
    &["Deva", "Rama", "Krishna", "Ganga", "Sita", "Lakshmana"];

/// Built-in second words
pub const DEFAULT_SECOND_WORDS: &[&str] =
    &["Alaya", "Ayana", "Arjuna", "Uttara", "Mandira", "Kutira"];

/// Sampler construction failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SamplerError {
    #[error("word list is empty: {list}")]
    EmptyWordList { list: &'static str },
}

/// Source of (word1, word2) pairs
///
/// The first pairs are the override pairs in table order; after those,
/// `word1 = first[i % first.len()]` and
/// `word2 = second[(i / first.len()) % second.len()]`.
#[derive(Debug, Clone)]
pub struct PairSampler {
    overrides: Vec<(String, String)>,
    first_words: Vec<String>,
    second_words: Vec<String>,
}

impl PairSampler {
    pub fn new(
        overrides: Vec<(String, String)>,
        first_words: Vec<String>,
        second_words: Vec<String>,
    ) -> Result<Self, SamplerError> {
        if first_words.is_empty() {
            return Err(SamplerError::EmptyWordList { list: "first_words" });
        }
        if second_words.is_empty() {
            return Err(SamplerError::EmptyWordList { list: "second_words" });
        }
        Ok(Self {
            overrides,
            first_words,
            second_words,
        })
    }

    /// Sampler over the engine's overrides and the built-in word lists
    pub fn for_engine(engine: &SandhiEngine) -> Self {
        Self {
            overrides: override_pairs(engine),
            first_words: to_owned(DEFAULT_FIRST_WORDS),
            second_words: to_owned(DEFAULT_SECOND_WORDS),
        }
    }

    /// Sampler over the engine's overrides and custom word lists
    pub fn with_words(
        engine: &SandhiEngine,
        first_words: Vec<String>,
        second_words: Vec<String>,
    ) -> Result<Self, SamplerError> {
        Self::new(override_pairs(engine), first_words, second_words)
    }

    /// Pair at index `i`
    pub fn pair_at(&self, i: usize) -> (&str, &str) {
        if let Some((w1, w2)) = self.overrides.get(i) {
            return (w1.as_str(), w2.as_str());
        }
        let n = self.first_words.len();
        let word1 = &self.first_words[i % n];
        let word2 = &self.second_words[(i / n) % self.second_words.len()];
        (word1.as_str(), word2.as_str())
    }

    /// First `count` pairs
    ///
    /// The iterator is `Clone`, so a sequence can be replayed from the start.
    pub fn sample_pairs(&self, count: usize) -> PairIter<'_> {
        PairIter {
            sampler: self,
            index: 0,
            count,
        }
    }

    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }
}

fn override_pairs(engine: &SandhiEngine) -> Vec<(String, String)> {
    engine
        .overrides()
        .pairs()
        .map(|(w1, w2)| (w1.to_string(), w2.to_string()))
        .collect()
}

fn to_owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// Iterator returned by [`PairSampler::sample_pairs`]
#[derive(Debug, Clone)]
pub struct PairIter<'a> {
    sampler: &'a PairSampler,
    index: usize,
    count: usize,
}

impl<'a> Iterator for PairIter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.count {
            return None;
        }
        let sampler = self.sampler;
        let pair = sampler.pair_at(self.index);
        self.index += 1;
        Some(pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PairIter<'_> {}

impl FusedIterator for PairIter<'_> {}
