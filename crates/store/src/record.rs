//! Binding between domain values and repository keys.

use race_core::{CurrencyGroup, Race, Treasure};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;

/// A value a [`Repository`](crate::Repository) can store.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Table name used in file names and error messages.
    const KIND: &'static str;

    fn key(&self) -> Option<u32>;

    /// Record the storage key. Called once, on first insert.
    fn assign_key(&mut self, key: u32) -> Result<()>;

    /// Ids already carried by nested values.
    fn nested_keys(&self) -> Vec<u32> {
        Vec::new()
    }

    /// Give every nested value without an id the next one from `next`.
    fn assign_nested(&mut self, _next: &mut dyn FnMut() -> Result<u32>) -> Result<()> {
        Ok(())
    }
}

impl Record for CurrencyGroup {
    const KIND: &'static str = "currency_group";

    fn key(&self) -> Option<u32> {
        self.id().map(|id| id.value())
    }

    fn assign_key(&mut self, key: u32) -> Result<()> {
        self.assign_id(i64::from(key))?;
        Ok(())
    }

    fn nested_keys(&self) -> Vec<u32> {
        self.iter()
            .filter_map(|denomination| denomination.id())
            .map(|id| id.value())
            .collect()
    }

    fn assign_nested(&mut self, next: &mut dyn FnMut() -> Result<u32>) -> Result<()> {
        for denomination in self.iter_mut() {
            if denomination.id().is_none() {
                denomination.assign_id(i64::from(next()?))?;
            }
        }
        Ok(())
    }
}

impl Record for Treasure {
    const KIND: &'static str = "treasure";

    fn key(&self) -> Option<u32> {
        self.id().map(|id| id.value())
    }

    fn assign_key(&mut self, key: u32) -> Result<()> {
        self.assign_id(i64::from(key))?;
        Ok(())
    }
}

impl Record for Race {
    const KIND: &'static str = "race";

    fn key(&self) -> Option<u32> {
        self.id().map(|id| id.value())
    }

    fn assign_key(&mut self, key: u32) -> Result<()> {
        self.assign_id(i64::from(key))?;
        Ok(())
    }
}
