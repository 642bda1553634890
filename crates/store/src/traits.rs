//! Repository contract shared by every backend.

use crate::error::Result;
use crate::record::Record;

/// Keyed storage for one kind of record.
///
/// Backends use interior mutability so a repository can be shared behind an
/// `Arc` without extra locking by the caller.
pub trait Repository<T: Record>: Send + Sync {
    /// Store a new record, assigning its key and any missing nested ids.
    ///
    /// Returns the record as stored. A record that already carries a key
    /// present in the repository fails with `Conflict`.
    fn insert(&self, record: T) -> Result<T>;

    /// Replace a stored record. Nested values added since the last save
    /// receive ids; existing ids are kept.
    fn update(&self, record: T) -> Result<T>;

    /// Load a record by key.
    fn load(&self, key: u32) -> Result<Option<T>>;

    /// Delete a record; returns whether it existed.
    fn delete(&self, key: u32) -> Result<bool>;

    /// List stored keys in ascending order.
    fn keys(&self) -> Result<Vec<u32>>;

    /// Check if a record exists.
    fn exists(&self, key: u32) -> bool {
        matches!(self.load(key), Ok(Some(_)))
    }

    /// Load every stored record in key order.
    fn load_all(&self) -> Result<Vec<T>> {
        let mut records = Vec::new();
        for key in self.keys()? {
            if let Some(record) = self.load(key)? {
                records.push(record);
            }
        }
        Ok(records)
    }

    /// Load a record, failing with `NotFound` when it is missing.
    fn get(&self, key: u32) -> Result<T> {
        self.load(key)?
            .ok_or(crate::RepositoryError::NotFound { kind: T::KIND, key })
    }
}
