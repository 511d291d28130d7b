//! Feed use-case service.
//!
//! # Responsibility
//! - Distribute newest-first entries across display lanes.
//! - Derive the preview and age label shown on each card.
//! - Degrade a failed store read to an empty, flagged feed.
//!
//! # Invariants
//! - Entry `i` lands in lane `i mod lane_count`; order within a lane follows input order.
//! - `lane_count = 1` reproduces the input order.
//! - A store read failure is logged and never propagated as a hard error.

use crate::config::CoreConfig;
use crate::model::entry::Entry;
use crate::repo::entry_repo::EntryStore;
use crate::text::word_count::{truncate_words, Truncation};
use crate::timestamp::humanize;
use log::{info, warn};
use std::num::NonZeroUsize;
use std::time::Instant;

/// Round-robin placement of `items` into `lane_count` ordered lanes.
///
/// Always returns exactly `lane_count` lanes, some possibly empty.
pub fn distribute<T>(items: impl IntoIterator<Item = T>, lane_count: NonZeroUsize) -> Vec<Vec<T>> {
    let lane_count = lane_count.get();
    let mut lanes: Vec<Vec<T>> = (0..lane_count).map(|_| Vec::new()).collect();
    for (index, item) in items.into_iter().enumerate() {
        lanes[index % lane_count].push(item);
    }
    lanes
}

/// Word-truncated preview of an entry's content.
pub fn preview(entry: &Entry, max_words: usize) -> Truncation {
    truncate_words(&entry.content, max_words)
}

/// One rendered entry in the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedCard {
    /// Full entry, shown when the card is opened.
    pub entry: Entry,
    /// Preview text for the list view.
    pub preview: String,
    /// Whether `preview` dropped words ("Read more").
    pub truncated: bool,
    /// Relative age such as "2 hours ago".
    pub age_label: String,
}

/// Outcome of loading the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedStatus {
    Loaded,
    Empty,
    /// The store could not be read; the feed is empty.
    Unavailable,
}

/// Lane-distributed feed ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feed {
    pub status: FeedStatus,
    pub lanes: Vec<Vec<FeedCard>>,
}

impl Feed {
    /// Total number of cards across lanes.
    pub fn len(&self) -> usize {
        self.lanes.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cards in newest-first order, as a single column.
    pub fn cards(&self) -> Vec<&FeedCard> {
        let lane_count = self.lanes.len();
        (0..self.len())
            .filter_map(|index| self.lanes[index % lane_count].get(index / lane_count))
            .collect()
    }
}

/// Lane count and preview length for the read path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedLayout {
    pub lane_count: NonZeroUsize,
    pub preview_words: usize,
}

impl FeedLayout {
    pub fn new(lane_count: NonZeroUsize, preview_words: usize) -> Self {
        Self {
            lane_count,
            preview_words,
        }
    }

    /// Builds the layout from configuration; a zero lane count falls back to one lane.
    pub fn from_config(config: &CoreConfig) -> Self {
        Self::new(
            NonZeroUsize::new(config.lane_count).unwrap_or(NonZeroUsize::MIN),
            config.preview_words,
        )
    }

    /// Turns newest-first entries into lanes of cards labelled against `now_ms`.
    pub fn arrange(&self, entries: Vec<Entry>, now_ms: i64) -> Vec<Vec<FeedCard>> {
        let cards = entries.into_iter().map(|entry| {
            let truncation = preview(&entry, self.preview_words);
            let age_label = humanize(entry.created_at, now_ms);
            FeedCard {
                entry,
                preview: truncation.preview,
                truncated: truncation.was_truncated,
                age_label,
            }
        });
        distribute(cards, self.lane_count)
    }
}

/// Read-side service over an entry store.
pub struct FeedService<S: EntryStore> {
    store: S,
    layout: FeedLayout,
}

impl<S: EntryStore> FeedService<S> {
    pub fn new(store: S, layout: FeedLayout) -> Self {
        Self { store, layout }
    }

    pub fn from_config(store: S, config: &CoreConfig) -> Self {
        Self::new(store, FeedLayout::from_config(config))
    }

    /// Loads every entry and arranges the feed as seen at `now_ms`.
    pub fn load(&self, now_ms: i64) -> Feed {
        let started_at = Instant::now();
        let entries = match self.store.list_all() {
            Ok(entries) => entries,
            Err(err) => {
                warn!(
                    "event=feed_load module=service status=error duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Feed {
                    status: FeedStatus::Unavailable,
                    lanes: distribute(Vec::new(), self.layout.lane_count),
                };
            }
        };

        let status = if entries.is_empty() {
            FeedStatus::Empty
        } else {
            FeedStatus::Loaded
        };
        let count = entries.len();
        let lanes = self.layout.arrange(entries, now_ms);
        info!(
            "event=feed_load module=service status=ok entries={} lanes={} duration_ms={}",
            count,
            lanes.len(),
            started_at.elapsed().as_millis()
        );

        Feed { status, lanes }
    }
}
