//! Entry domain model.
//!
//! # Responsibility
//! - Define the record shared by the write and read paths.
//! - Validate the invariants every persisted entry must hold.
//!
//! # Invariants
//! - `id` is never nil and never reused for another entry.
//! - `content` is never empty or whitespace-only.
//! - `created_at` is assigned by the store, not by the author.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one persisted entry.
pub type EntryId = Uuid;

/// Validation failures for entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryValidationError {
    /// Content is empty after trimming.
    EmptyContent,
    /// Identifier is the nil UUID.
    NilId,
}

impl Display for EntryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyContent => write!(f, "entry content cannot be empty"),
            Self::NilId => write!(f, "entry id cannot be nil"),
        }
    }
}

impl Error for EntryValidationError {}

/// One persisted anonymous submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Store-assigned identifier.
    pub id: EntryId,
    /// Author text, stored verbatim (internal whitespace preserved).
    pub content: String,
    /// Unix epoch milliseconds at persistence time.
    pub created_at: i64,
}

impl Entry {
    /// Builds an entry from store-assigned fields.
    ///
    /// Fails when the record would break the entry invariants.
    pub fn new(
        id: EntryId,
        content: impl Into<String>,
        created_at: i64,
    ) -> Result<Self, EntryValidationError> {
        let entry = Self {
            id,
            content: content.into(),
            created_at,
        };
        entry.validate()?;
        Ok(entry)
    }

    /// Checks id and content invariants.
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        if self.id.is_nil() {
            return Err(EntryValidationError::NilId);
        }
        validate_content(&self.content)
    }
}

/// Rejects content that is empty after trimming.
pub fn validate_content(content: &str) -> Result<(), EntryValidationError> {
    if content.trim().is_empty() {
        return Err(EntryValidationError::EmptyContent);
    }
    Ok(())
}
