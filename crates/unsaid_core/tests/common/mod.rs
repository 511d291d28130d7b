//! Entry store fakes shared by integration tests.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use unsaid_core::{DbError, Entry, EntryStore, RepoError, RepoResult};
use uuid::Uuid;

/// In-memory store that records every insert it receives.
#[derive(Default)]
pub struct RecordingStore {
    entries: RefCell<Vec<Entry>>,
    next_created_at: Cell<i64>,
    pub insert_calls: Cell<usize>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self {
            next_created_at: Cell::new(1_700_000_000_000),
            ..Self::default()
        }
    }

    pub fn inserted_contents(&self) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .map(|entry| entry.content.clone())
            .collect()
    }
}

impl EntryStore for RecordingStore {
    fn insert(&self, content: &str) -> RepoResult<Entry> {
        self.insert_calls.set(self.insert_calls.get() + 1);
        let created_at = self.next_created_at.get();
        self.next_created_at.set(created_at + 1_000);
        let entry = Entry::new(Uuid::new_v4(), content, created_at)?;
        self.entries.borrow_mut().push(entry.clone());
        Ok(entry)
    }

    fn list_all(&self) -> RepoResult<Vec<Entry>> {
        let mut entries = self.entries.borrow().clone();
        entries.reverse();
        Ok(entries)
    }
}

/// Store whose every call fails like an unreachable backend.
#[derive(Default)]
pub struct FailingStore {
    pub insert_calls: Cell<usize>,
}

impl EntryStore for FailingStore {
    fn insert(&self, _content: &str) -> RepoResult<Entry> {
        self.insert_calls.set(self.insert_calls.get() + 1);
        Err(unavailable())
    }

    fn list_all(&self) -> RepoResult<Vec<Entry>> {
        Err(unavailable())
    }
}

fn unavailable() -> RepoError {
    RepoError::Db(DbError::Sqlite(rusqlite::Error::InvalidQuery))
}
