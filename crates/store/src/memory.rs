//! In-memory Repository implementation for tests and local runs.

use std::sync::RwLock;

use crate::error::{RepositoryError, Result};
use crate::record::Record;
use crate::table::Table;
use crate::traits::Repository;

/// In-memory implementation of [`Repository`].
pub struct InMemoryRepository<T> {
    table: RwLock<Table<T>>,
}

impl<T: Record> InMemoryRepository<T> {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table::default()),
        }
    }
}

impl<T: Record> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> Repository<T> for InMemoryRepository<T> {
    fn insert(&self, record: T) -> Result<T> {
        let mut table = self
            .table
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        table.insert(record)
    }

    fn update(&self, record: T) -> Result<T> {
        let mut table = self
            .table
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        table.update(record)
    }

    fn load(&self, key: u32) -> Result<Option<T>> {
        let table = self
            .table
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(table.get(key).cloned())
    }

    fn delete(&self, key: u32) -> Result<bool> {
        let mut table = self
            .table
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(table.remove(key))
    }

    fn keys(&self) -> Result<Vec<u32>> {
        let table = self
            .table
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(table.keys())
    }
}
