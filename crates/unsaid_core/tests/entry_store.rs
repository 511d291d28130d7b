use rusqlite::params;
use std::collections::HashSet;
use unsaid_core::db::open_db_in_memory;
use unsaid_core::{EntryStore, EntryValidationError, RepoError, SqliteEntryRepository};

fn fixed_clock() -> i64 {
    1_700_000_000_000
}

#[test]
fn insert_assigns_id_and_created_at_and_keeps_content_verbatim() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEntryRepository::with_clock(&conn, fixed_clock).unwrap();

    let content = "first line\n\n   second  line";
    let entry = repo.insert(content).unwrap();

    assert!(!entry.id.is_nil());
    assert_eq!(entry.content, content);
    assert_eq!(entry.created_at, fixed_clock());
}

#[test]
fn insert_then_list_returns_entry_once_at_head() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEntryRepository::try_new(&conn).unwrap();

    repo.insert("older").unwrap();
    let newest = repo.insert("newest").unwrap();

    let listed = repo.list_all().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0], newest);
    assert_eq!(
        listed.iter().filter(|entry| entry.id == newest.id).count(),
        1
    );
}

#[test]
fn list_orders_by_created_at_desc_with_later_insert_winning_ties() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEntryRepository::with_clock(&conn, fixed_clock).unwrap();

    let first = repo.insert("first").unwrap();
    let second = repo.insert("second").unwrap();
    let third = repo.insert("third").unwrap();
    assert_eq!(first.created_at, second.created_at);

    conn.execute(
        "UPDATE entries SET created_at = ?2 WHERE id = ?1;",
        params![first.id.to_string(), fixed_clock() + 5_000],
    )
    .unwrap();

    let ids: Vec<_> = repo.list_all().unwrap().into_iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![first.id, third.id, second.id]);
}

#[test]
fn created_at_never_goes_backwards() {
    fn early_clock() -> i64 {
        1_000
    }

    let conn = open_db_in_memory().unwrap();
    let late = SqliteEntryRepository::with_clock(&conn, fixed_clock).unwrap();
    let stored = late.insert("from the future clock").unwrap();

    let early = SqliteEntryRepository::with_clock(&conn, early_clock).unwrap();
    let next = early.insert("after clock stepped back").unwrap();

    assert_eq!(next.created_at, stored.created_at);
    assert_eq!(early.list_all().unwrap()[0].id, next.id);
}

#[test]
fn ids_are_unique_across_inserts() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEntryRepository::try_new(&conn).unwrap();

    let ids: HashSet<_> = (0..25)
        .map(|idx| repo.insert(&format!("entry {idx}")).unwrap().id)
        .collect();
    assert_eq!(ids.len(), 25);
}

#[test]
fn insert_rejects_blank_content_without_writing() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEntryRepository::try_new(&conn).unwrap();

    let err = repo.insert(" \n\t").unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(EntryValidationError::EmptyContent)
    ));
    assert!(repo.list_all().unwrap().is_empty());
}

#[test]
fn list_rejects_corrupted_id_rows() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO entries (id, content, created_at) VALUES ('not-a-uuid', 'body', 1);",
        [],
    )
    .unwrap();

    let repo = SqliteEntryRepository::try_new(&conn).unwrap();
    let err = repo.list_all().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}

#[test]
fn try_new_requires_entries_table() {
    let conn = rusqlite::Connection::open_in_memory().unwrap();
    let err = SqliteEntryRepository::try_new(&conn).err().unwrap();
    assert!(matches!(err, RepoError::MissingRequiredTable("entries")));
}
