//! File-based Repository implementation.

use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::{RepositoryError, Result};
use crate::record::Record;
use crate::table::Table;
use crate::traits::Repository;

/// File-based implementation of [`Repository`].
///
/// Each record kind is stored as one bincode snapshot,
/// `{base_dir}/{kind}.bin`, rewritten atomically (temp file + rename) on
/// every change. bincode keeps the integer- and enum-keyed maps inside the
/// records intact.
pub struct FileRepository<T> {
    path: PathBuf,
    lock: Mutex<()>,
    _records: PhantomData<fn() -> T>,
}

impl<T: Record> FileRepository<T> {
    /// Create a new file-based repository under `base_dir`.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        fs::create_dir_all(base_dir).map_err(RepositoryError::Io)?;
        Ok(Self {
            path: base_dir.join(format!("{}.bin", T::KIND)),
            lock: Mutex::new(()),
            _records: PhantomData,
        })
    }

    /// Path of the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_table(&self) -> Result<Table<T>> {
        if !self.path.exists() {
            return Ok(Table::default());
        }

        let bytes = fs::read(&self.path).map_err(RepositoryError::Io)?;
        let table: Table<T> = bincode::deserialize(&bytes)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        tracing::debug!("Loaded {} table from {}", T::KIND, self.path.display());
        Ok(table)
    }

    fn write_table(&self, table: &Table<T>) -> Result<()> {
        let temp_path = self.path.with_extension("bin.tmp");

        let bytes =
            bincode::serialize(table).map_err(|e| RepositoryError::Serialization(e.to_string()))?;
        fs::write(&temp_path, bytes).map_err(RepositoryError::Io)?;
        fs::rename(&temp_path, &self.path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved {} table to {}", T::KIND, self.path.display());
        Ok(())
    }

    /// Read, change and write back the table under the repository lock.
    fn modify<R>(&self, change: impl FnOnce(&mut Table<T>) -> Result<R>) -> Result<R> {
        let _guard = self.lock.lock().map_err(|_| RepositoryError::LockPoisoned)?;
        let mut table = self.read_table()?;
        let outcome = change(&mut table)?;
        self.write_table(&table)?;
        Ok(outcome)
    }
}

impl<T: Record> Repository<T> for FileRepository<T> {
    fn insert(&self, record: T) -> Result<T> {
        let stored = self.modify(|table| table.insert(record))?;
        tracing::debug!("Inserted {}[{:?}]", T::KIND, stored.key());
        Ok(stored)
    }

    fn update(&self, record: T) -> Result<T> {
        self.modify(|table| table.update(record))
    }

    fn load(&self, key: u32) -> Result<Option<T>> {
        let _guard = self.lock.lock().map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(self.read_table()?.get(key).cloned())
    }

    fn delete(&self, key: u32) -> Result<bool> {
        let removed = self.modify(|table| Ok(table.remove(key)))?;
        if removed {
            tracing::debug!("Deleted {}[{}]", T::KIND, key);
        }
        Ok(removed)
    }

    fn keys(&self) -> Result<Vec<u32>> {
        let _guard = self.lock.lock().map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(self.read_table()?.keys())
    }
}
