//! Entry store contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist validated entry text and assign identity plus creation time.
//! - Return all entries newest first.
//!
//! # Invariants
//! - Each insert yields a fresh UUID v4 id.
//! - `created_at` never goes backwards relative to already stored entries.
//! - Listing order is `created_at DESC, seq DESC`, so ties surface the later insert first.
//! - Content is stored verbatim.

use crate::db::DbError;
use crate::model::entry::{validate_content, Entry, EntryValidationError};
use crate::timestamp::now_epoch_ms;
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const ENTRY_SELECT_SQL: &str = "SELECT
    id,
    content,
    created_at
FROM entries";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for entry persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(EntryValidationError),
    Db(DbError),
    InvalidData(String),
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted entry data: {message}"),
            Self::MissingRequiredTable(table) => write!(f, "missing required table `{table}`"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "missing required column `{table}.{column}`")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<EntryValidationError> for RepoError {
    fn from(value: EntryValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Store contract for anonymous entries.
///
/// Implementations own identity and timestamp assignment; callers only
/// hand over already validated text.
pub trait EntryStore {
    /// Persists one entry and returns it with assigned `id` and `created_at`.
    fn insert(&self, content: &str) -> RepoResult<Entry>;
    /// Returns every entry, newest first.
    fn list_all(&self) -> RepoResult<Vec<Entry>>;
}

impl<S: EntryStore + ?Sized> EntryStore for &S {
    fn insert(&self, content: &str) -> RepoResult<Entry> {
        (**self).insert(content)
    }

    fn list_all(&self) -> RepoResult<Vec<Entry>> {
        (**self).list_all()
    }
}

/// SQLite-backed entry store.
pub struct SqliteEntryRepository<'conn> {
    conn: &'conn Connection,
    clock: fn() -> i64,
}

impl<'conn> SqliteEntryRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        Self::with_clock(conn, now_epoch_ms)
    }

    /// Constructs a repository with a custom epoch-millisecond clock.
    pub fn with_clock(conn: &'conn Connection, clock: fn() -> i64) -> RepoResult<Self> {
        ensure_entry_connection_ready(conn)?;
        Ok(Self { conn, clock })
    }
}

impl EntryStore for SqliteEntryRepository<'_> {
    fn insert(&self, content: &str) -> RepoResult<Entry> {
        validate_content(content)?;

        let id = Uuid::new_v4();
        // created_at is clamped to the newest stored value.
        self.conn.execute(
            "INSERT INTO entries (id, content, created_at)
             VALUES (
                ?1,
                ?2,
                MAX(?3, COALESCE((SELECT MAX(created_at) FROM entries), ?3))
             );",
            params![id.to_string(), content, (self.clock)()],
        )?;

        let seq = self.conn.last_insert_rowid();
        let mut stmt = self
            .conn
            .prepare(&format!("{ENTRY_SELECT_SQL} WHERE seq = ?1;"))?;
        let mut rows = stmt.query([seq])?;
        if let Some(row) = rows.next()? {
            return parse_entry_row(row);
        }

        Err(RepoError::InvalidData(format!(
            "inserted entry missing on read-back (seq={seq})"
        )))
    }

    fn list_all(&self) -> RepoResult<Vec<Entry>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ENTRY_SELECT_SQL} ORDER BY created_at DESC, seq DESC;"))?;
        let mut rows = stmt.query([])?;
        let mut entries = Vec::new();
        while let Some(row) = rows.next()? {
            entries.push(parse_entry_row(row)?);
        }
        Ok(entries)
    }
}

fn parse_entry_row(row: &Row<'_>) -> RepoResult<Entry> {
    let id_text: String = row.get("id")?;
    let id = Uuid::parse_str(&id_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{id_text}` in entries.id"))
    })?;

    let entry = Entry::new(id, row.get::<_, String>("content")?, row.get("created_at")?)?;
    Ok(entry)
}

fn ensure_entry_connection_ready(conn: &Connection) -> RepoResult<()> {
    if !table_exists(conn, "entries")? {
        return Err(RepoError::MissingRequiredTable("entries"));
    }

    for column in ["seq", "id", "content", "created_at"] {
        if !table_has_column(conn, "entries", column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: "entries",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
