//! Keyword moderation for submissions.
//!
//! # Responsibility
//! - Decide whether candidate text contains a blocked phrase.
//! - Own the phrase list as injectable configuration data.
//!
//! # Invariants
//! - Matching is case-insensitive substring containment, not word-boundary aware.
//! - Empty or whitespace-only text is never blocked.
//! - The decision never reveals which phrase matched.

mod phrases;

pub use phrases::DEFAULT_BLOCKED_PHRASES;

use std::collections::BTreeSet;

/// Static phrase filter applied before an entry is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentModerator {
    phrases: Vec<String>,
}

impl ContentModerator {
    /// Builds a moderator from a caller-supplied phrase list.
    ///
    /// Phrases are trimmed, case-folded and de-duplicated; blank phrases are
    /// dropped so they cannot match every input.
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let unique = phrases
            .into_iter()
            .map(|phrase| phrase.as_ref().trim().to_lowercase())
            .filter(|phrase| !phrase.is_empty())
            .collect::<BTreeSet<_>>();
        Self {
            phrases: unique.into_iter().collect(),
        }
    }

    /// Number of distinct phrases in the active list.
    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }

    /// Returns `true` when `text` contains any blocked phrase.
    pub fn is_blocked(&self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }

        let folded = trimmed.to_lowercase();
        self.phrases
            .iter()
            .any(|phrase| folded.contains(phrase.as_str()))
    }
}

impl Default for ContentModerator {
    fn default() -> Self {
        Self::new(DEFAULT_BLOCKED_PHRASES)
    }
}
