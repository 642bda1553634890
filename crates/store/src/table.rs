//! Key allocation and row storage shared by every backend.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{RepositoryError, Result};
use crate::record::Record;

/// All rows of one record kind plus the next free keys.
///
/// Keys start at 1 and are never reused after a delete.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "T: Record")]
pub(crate) struct Table<T> {
    next_key: u32,
    next_nested: u32,
    rows: BTreeMap<u32, T>,
}

impl<T: Record> Default for Table<T> {
    fn default() -> Self {
        Self {
            next_key: 1,
            next_nested: 1,
            rows: BTreeMap::new(),
        }
    }
}

impl<T: Record> Table<T> {
    pub(crate) fn insert(&mut self, mut record: T) -> Result<T> {
        let key = match record.key() {
            Some(key) if self.rows.contains_key(&key) => {
                return Err(RepositoryError::Conflict { kind: T::KIND, key });
            }
            Some(key) => key,
            None => {
                let key = self.next_key;
                record.assign_key(key)?;
                key
            }
        };

        self.assign_nested(&mut record)?;
        self.next_key = self.next_key.max(successor::<T>(key)?);
        self.rows.insert(key, record.clone());
        Ok(record)
    }

    pub(crate) fn update(&mut self, mut record: T) -> Result<T> {
        let key = record.key().ok_or(RepositoryError::Unsaved { kind: T::KIND })?;
        if !self.rows.contains_key(&key) {
            return Err(RepositoryError::NotFound { kind: T::KIND, key });
        }

        self.assign_nested(&mut record)?;
        self.rows.insert(key, record.clone());
        Ok(record)
    }

    pub(crate) fn get(&self, key: u32) -> Option<&T> {
        self.rows.get(&key)
    }

    pub(crate) fn remove(&mut self, key: u32) -> bool {
        self.rows.remove(&key).is_some()
    }

    pub(crate) fn keys(&self) -> Vec<u32> {
        self.rows.keys().copied().collect()
    }

    /// Nested ids are unique across the whole table, not per record.
    fn assign_nested(&mut self, record: &mut T) -> Result<()> {
        let mut next = self.next_nested;
        for existing in record.nested_keys() {
            next = next.max(successor::<T>(existing)?);
        }

        record.assign_nested(&mut || {
            let key = next;
            next = successor::<T>(key)?;
            Ok(key)
        })?;

        self.next_nested = next;
        Ok(())
    }
}

fn successor<T: Record>(key: u32) -> Result<u32> {
    key.checked_add(1)
        .ok_or(RepositoryError::KeysExhausted(T::KIND))
}
