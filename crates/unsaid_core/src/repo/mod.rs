//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the entry store contract consumed by the services.
//! - Isolate SQLite query details from submission/feed orchestration.
//!
//! # Invariants
//! - Store writes must validate entry content before persistence.
//! - Read paths reject invalid persisted state instead of masking it.

pub mod entry_repo;
