//! Core logic for Unsaid, an anonymous write-and-read space.
//! This crate is the single source of truth for submission and feed invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod moderation;
pub mod repo;
pub mod service;
pub mod text;
pub mod timestamp;

pub use config::{ConfigError, CoreConfig, DEFAULT_LANE_COUNT, MAX_WORDS, PREVIEW_WORDS};
pub use db::DbError;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::entry::{Entry, EntryId, EntryValidationError};
pub use moderation::{ContentModerator, DEFAULT_BLOCKED_PHRASES};
pub use repo::entry_repo::{EntryStore, RepoError, RepoResult, SqliteEntryRepository};
pub use service::feed_service::{
    distribute, preview, Feed, FeedCard, FeedLayout, FeedService, FeedStatus,
};
pub use service::submission_service::{SubmissionError, SubmissionPipeline, WordBudget};
pub use text::word_count::{count_words, truncate_words, Truncation};
pub use timestamp::{humanize, now_epoch_ms};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
