//! Domain model for anonymous entries.
//!
//! # Responsibility
//! - Define the canonical record persisted by the entry store.
//!
//! # Invariants
//! - Every entry is identified by a stable `EntryId` assigned at insert.
//! - Entries are immutable once created; there is no update or delete path.

pub mod entry;
