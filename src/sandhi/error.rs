//! Errors raised when a word pair cannot be combined

use std::fmt;

/// Which argument of a combination was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordSlot {
    First,
    Second,
    Both,
}

impl WordSlot {
    /// Slot for a pair given which sides failed the check
    pub(crate) fn from_flags(first: bool, second: bool) -> Option<Self> {
        match (first, second) {
            (true, true) => Some(WordSlot::Both),
            (true, false) => Some(WordSlot::First),
            (false, true) => Some(WordSlot::Second),
            (false, false) => None,
        }
    }
}

impl fmt::Display for WordSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordSlot::First => write!(f, "word1"),
            WordSlot::Second => write!(f, "word2"),
            WordSlot::Both => write!(f, "word1 and word2"),
        }
    }
}

/// Combination failure
///
/// Only argument validation can fail: once both words are present and
/// non-empty, combining always succeeds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SandhiError {
    /// Argument absent
    #[error("missing argument: {slot}")]
    NullInput { slot: WordSlot },
    /// Argument present but empty
    #[error("{message} (empty: {slot})")]
    InvalidInput { slot: WordSlot, message: String },
}

impl SandhiError {
    pub(crate) fn empty(slot: WordSlot) -> Self {
        SandhiError::InvalidInput {
            slot,
            message: "Both words must be non-empty".to_string(),
        }
    }

    pub fn slot(&self) -> WordSlot {
        match self {
            SandhiError::NullInput { slot } | SandhiError::InvalidInput { slot, .. } => *slot,
        }
    }
}
