//! Opportunistic local key/value cache.
//!
//! JSON-serialized values in an embedded `redb` database. The backend is
//! the source of truth; nothing stored here is ever synced back.

use std::path::Path;

use redb::{Database, ReadableTable, TableDefinition};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

const KV: TableDefinition<&str, &str> = TableDefinition::new("kv");

/// Errors from the local key/value store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage error: {0}")]
    Database(#[from] redb::DatabaseError),
    #[error("storage error: {0}")]
    Transaction(#[from] redb::TransactionError),
    #[error("storage error: {0}")]
    Table(#[from] redb::TableError),
    #[error("storage error: {0}")]
    Io(#[from] redb::StorageError),
    #[error("storage error: {0}")]
    Commit(#[from] redb::CommitError),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Thin get/set/remove wrapper with JSON values.
pub struct Storage {
    db: Database,
}

impl Storage {
    /// Open the store at `path`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the database file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        Ok(Self {
            db: Database::create(path)?,
        })
    }

    /// Read and deserialize the value under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] on a read failure or when the stored
    /// value does not deserialize into `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let txn = self.db.begin_read()?;
        let table = match txn.open_table(KV) {
            Ok(table) => table,
            // A fresh database has no table until the first write.
            Err(redb::TableError::TableDoesNotExist(_)) => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        match table.get(key)? {
            Some(value) => Ok(Some(serde_json::from_str(value.value())?)),
            None => Ok(None),
        }
    }

    /// Serialize and store `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the value cannot be serialized or
    /// the write does not commit.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let encoded = serde_json::to_string(value)?;
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(KV)?;
            table.insert(key, encoded.as_str())?;
        }
        txn.commit()?;
        Ok(())
    }

    /// Drop the value under `key`, if present.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the write does not commit.
    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(KV)?;
            table.remove(key)?;
        }
        txn.commit()?;
        Ok(())
    }
}
