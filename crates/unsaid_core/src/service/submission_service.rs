//! Submission use-case service.
//!
//! # Responsibility
//! - Validate and moderate author text before it reaches the store.
//! - Expose composer helpers (word budget, edit acceptance, submit state).
//!
//! # Invariants
//! - Checks run in order: empty, word limit, moderation, then insert.
//! - The store is only called after every check passes; a rejected
//!   submission never writes.
//! - Store failures are returned once, without retry.
//! - Submitted text never appears in log lines.

use crate::config::CoreConfig;
use crate::model::entry::Entry;
use crate::moderation::ContentModerator;
use crate::repo::entry_repo::{EntryStore, RepoError};
use crate::text::word_count::count_words;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Terminal outcome of a rejected submission attempt.
#[derive(Debug)]
pub enum SubmissionError {
    /// Text is empty after trimming.
    EmptyContent,
    /// Text has more words than allowed.
    OverWordLimit { words: usize, max: usize },
    /// Text contains a blocked phrase. Which one is never exposed.
    Moderated,
    /// The store rejected or failed the insert.
    StoreUnavailable(RepoError),
}

impl SubmissionError {
    /// Author-facing message for this outcome.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::EmptyContent => "Write something first.",
            Self::OverWordLimit { .. } => "That's over the word limit.",
            Self::Moderated => "This space isn't meant for harm.",
            Self::StoreUnavailable(_) => "Something went wrong. Please try again.",
        }
    }

    fn reason_code(&self) -> &'static str {
        match self {
            Self::EmptyContent => "empty_content",
            Self::OverWordLimit { .. } => "over_word_limit",
            Self::Moderated => "moderated",
            Self::StoreUnavailable(_) => "store_unavailable",
        }
    }
}

impl Display for SubmissionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyContent => write!(f, "submission is empty"),
            Self::OverWordLimit { words, max } => {
                write!(f, "submission has {words} words, limit is {max}")
            }
            Self::Moderated => write!(f, "submission rejected by moderation"),
            Self::StoreUnavailable(err) => write!(f, "entry store unavailable: {err}"),
        }
    }
}

impl Error for SubmissionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::StoreUnavailable(err) => Some(err),
            _ => None,
        }
    }
}

/// Composer word counter state, e.g. "42 / 200 words".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordBudget {
    pub word_count: usize,
    pub max_words: usize,
}

impl WordBudget {
    pub fn is_over_limit(&self) -> bool {
        self.word_count > self.max_words
    }

    /// Words left before the limit; zero when at or over it.
    pub fn remaining(&self) -> usize {
        self.max_words.saturating_sub(self.word_count)
    }
}

impl Display for WordBudget {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {} words", self.word_count, self.max_words)
    }
}

/// Validates, moderates and persists anonymous submissions.
pub struct SubmissionPipeline<S: EntryStore> {
    store: S,
    moderator: ContentModerator,
    max_words: usize,
}

impl<S: EntryStore> SubmissionPipeline<S> {
    /// Creates a pipeline with an explicit moderator and word limit.
    pub fn new(store: S, moderator: ContentModerator, max_words: usize) -> Self {
        Self {
            store,
            moderator,
            max_words,
        }
    }

    /// Creates a pipeline from core configuration.
    pub fn from_config(store: S, config: &CoreConfig) -> Self {
        Self::new(store, config.moderator(), config.max_words)
    }

    /// Word limit enforced by `submit`.
    pub fn max_words(&self) -> usize {
        self.max_words
    }

    /// Counter state for the current draft.
    pub fn budget(&self, text: &str) -> WordBudget {
        WordBudget {
            word_count: count_words(text),
            max_words: self.max_words,
        }
    }

    /// Whether a draft edit from `previous` to `next` should be applied.
    ///
    /// Edits within the limit are always accepted; over the limit only
    /// shrinking edits are, so authors can always delete.
    pub fn accepts_edit(&self, previous: &str, next: &str) -> bool {
        count_words(next) <= self.max_words || next.chars().count() < previous.chars().count()
    }

    /// Whether the submit action should be enabled for `text`.
    ///
    /// Moderation is not evaluated here; it only runs on `submit`.
    pub fn can_submit(&self, text: &str) -> bool {
        !text.trim().is_empty() && !self.budget(text).is_over_limit()
    }

    /// Validates `raw_text` without touching the store.
    pub fn check(&self, raw_text: &str) -> Result<(), SubmissionError> {
        let trimmed = raw_text.trim();
        if trimmed.is_empty() {
            return Err(SubmissionError::EmptyContent);
        }

        let words = count_words(trimmed);
        if words > self.max_words {
            return Err(SubmissionError::OverWordLimit {
                words,
                max: self.max_words,
            });
        }

        if self.moderator.is_blocked(trimmed) {
            return Err(SubmissionError::Moderated);
        }

        Ok(())
    }

    /// Validates, moderates and persists one submission.
    ///
    /// Returns the stored entry with its assigned id and `created_at`.
    pub fn submit(&self, raw_text: &str) -> Result<Entry, SubmissionError> {
        let started_at = Instant::now();
        let trimmed = raw_text.trim();

        if let Err(err) = self.check(trimmed) {
            warn!(
                "event=entry_submit module=service status=rejected reason={} words={}",
                err.reason_code(),
                count_words(trimmed)
            );
            return Err(err);
        }

        match self.store.insert(trimmed) {
            Ok(entry) => {
                info!(
                    "event=entry_submit module=service status=ok entry_id={} words={} duration_ms={}",
                    entry.id,
                    count_words(trimmed),
                    started_at.elapsed().as_millis()
                );
                Ok(entry)
            }
            Err(err) => {
                let err = SubmissionError::StoreUnavailable(err);
                warn!(
                    "event=entry_submit module=service status=error reason={} duration_ms={} error={}",
                    err.reason_code(),
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }
}
