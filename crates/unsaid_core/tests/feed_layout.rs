mod common;

use common::{FailingStore, RecordingStore};
use std::num::NonZeroUsize;
use unsaid_core::db::open_db_in_memory;
use unsaid_core::{
    distribute, preview, CoreConfig, Entry, EntryStore, FeedLayout, FeedService, FeedStatus,
    SqliteEntryRepository,
};
use uuid::Uuid;

const NOW: i64 = 1_700_000_000_000;

fn lanes(count: usize) -> NonZeroUsize {
    NonZeroUsize::new(count).unwrap()
}

fn entry(content: &str, created_at: i64) -> Entry {
    Entry::new(Uuid::new_v4(), content, created_at).unwrap()
}

#[test]
fn distribute_places_entries_round_robin() {
    let entries: Vec<Entry> = (0..5).map(|idx| entry(&format!("e{idx}"), NOW - idx)).collect();

    let result = distribute(entries.clone(), lanes(3));
    assert_eq!(
        result,
        vec![
            vec![entries[0].clone(), entries[3].clone()],
            vec![entries[1].clone(), entries[4].clone()],
            vec![entries[2].clone()],
        ]
    );
}

#[test]
fn preview_truncates_long_content_and_keeps_short_content() {
    let long = entry(&vec!["word"; 40].join("  "), NOW);
    let truncated = preview(&long, 30);
    assert!(truncated.was_truncated);
    assert_eq!(truncated.preview, vec!["word"; 30].join(" "));

    let short = entry("two\nlines", NOW);
    let kept = preview(&short, 30);
    assert!(!kept.was_truncated);
    assert_eq!(kept.preview, "two\nlines");
}

#[test]
fn arrange_builds_cards_with_preview_and_age_label() {
    let layout = FeedLayout::new(lanes(2), 2);
    let cards = layout.arrange(
        vec![
            entry("just now thought", NOW - 30_000),
            entry("short", NOW - 7_200_000),
            entry("older one", NOW - 8 * 86_400_000),
        ],
        NOW,
    );

    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].len(), 2);
    assert_eq!(cards[1].len(), 1);

    assert_eq!(cards[0][0].preview, "just now");
    assert!(cards[0][0].truncated);
    assert_eq!(cards[0][0].age_label, "Just now");

    assert_eq!(cards[1][0].preview, "short");
    assert!(!cards[1][0].truncated);
    assert_eq!(cards[1][0].age_label, "2 hours ago");

    assert_eq!(cards[0][1].age_label, "A week ago");
}

#[test]
fn feed_loads_from_store_in_lanes_and_single_column_order() {
    let store = RecordingStore::new();
    for idx in 0..4 {
        store.insert(&format!("entry {idx}")).unwrap();
    }

    let service = FeedService::new(&store, FeedLayout::new(lanes(3), 30));
    let feed = service.load(NOW + 60_000);

    assert_eq!(feed.status, FeedStatus::Loaded);
    assert_eq!(feed.len(), 4);
    assert_eq!(feed.lanes.len(), 3);
    let column: Vec<_> = feed
        .cards()
        .into_iter()
        .map(|card| card.entry.content.as_str())
        .collect();
    assert_eq!(column, vec!["entry 3", "entry 2", "entry 1", "entry 0"]);
    assert_eq!(feed.lanes[0][0].entry.content, "entry 3");
    assert_eq!(feed.lanes[0][1].entry.content, "entry 0");
}

#[test]
fn empty_store_yields_empty_status() {
    let store = RecordingStore::new();
    let service = FeedService::from_config(&store, &CoreConfig::default());
    let feed = service.load(NOW);

    assert_eq!(feed.status, FeedStatus::Empty);
    assert!(feed.is_empty());
    assert_eq!(feed.lanes.len(), 3);
}

#[test]
fn store_failure_degrades_to_unavailable_empty_feed() {
    let store = FailingStore::default();
    let service = FeedService::from_config(&store, &CoreConfig::default());
    let feed = service.load(NOW);

    assert_eq!(feed.status, FeedStatus::Unavailable);
    assert!(feed.is_empty());
    assert!(feed.cards().is_empty());
}

#[test]
fn feed_reads_newest_entry_first_from_sqlite() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEntryRepository::try_new(&conn).unwrap();
    repo.insert("first").unwrap();
    let newest = repo.insert("second").unwrap();

    let service = FeedService::from_config(&repo, &CoreConfig::default());
    let feed = service.load(newest.created_at);

    assert_eq!(feed.cards()[0].entry, newest);
    assert_eq!(feed.cards()[0].age_label, "Just now");
}
