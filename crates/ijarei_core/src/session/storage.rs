//! Browser-style key/value storage.
//!
//! # Responsibility
//! - Define the `getItem/setItem/removeItem` contract the admin session
//!   persists through.
//! - Provide an in-memory store and a SQLite-backed persistent store.
//!
//! # Invariants
//! - Keys and values are opaque UTF-8 strings; no parsing happens here.
//! - `remove_item` on a missing key succeeds.

use crate::db::{open_db, open_db_in_memory, DbError};
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

pub type StorageResult<T> = Result<T, StorageError>;

/// Storage backend errors.
#[derive(Debug)]
pub enum StorageError {
    Db(DbError),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "storage failure: {err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Key/value store with local-storage semantics.
pub trait SessionStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()>;
    fn remove_item(&mut self, key: &str) -> StorageResult<()>;
}

/// Process-local storage, lost when dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> StorageResult<()> {
        self.items.remove(key);
        Ok(())
    }
}

/// SQLite-backed storage surviving process restarts.
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Opens (or creates) the storage file at `path`.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        Ok(Self {
            conn: open_db(path)?,
        })
    }

    /// Opens a migrated in-memory store.
    pub fn open_in_memory() -> StorageResult<Self> {
        Ok(Self {
            conn: open_db_in_memory()?,
        })
    }

    /// Lists stored keys in ascending order.
    pub fn keys(&self) -> StorageResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT key FROM local_storage ORDER BY key ASC;")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        let mut keys = Vec::new();
        for key in rows {
            keys.push(key?);
        }
        Ok(keys)
    }
}

impl SessionStorage for SqliteStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM local_storage WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO local_storage (key, value)
             VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> StorageResult<()> {
        self.conn
            .execute("DELETE FROM local_storage WHERE key = ?1;", [key])?;
        Ok(())
    }
}
