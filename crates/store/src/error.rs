//! Error types raised by repository implementations.

use race_core::{CoreError, CurrencyError, RaceError, TreasureError};
use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("JSON error: {0}")]
    Json(String),

    #[error("{kind} #{key} not found")]
    NotFound { kind: &'static str, key: u32 },

    #[error("{kind} #{key} already exists")]
    Conflict { kind: &'static str, key: u32 },

    #[error("{kind} has not been stored yet")]
    Unsaved { kind: &'static str },

    #[error("key space exhausted for {0}")]
    KeysExhausted(&'static str),

    /// A domain rule rejected the operation; carries the error code and message.
    #[error("domain error: {0}")]
    Domain(String),
}

impl RepositoryError {
    pub(crate) fn domain(err: impl CoreError) -> Self {
        Self::Domain(format!("[{}] {}", err.error_code(), err))
    }
}

impl From<CurrencyError> for RepositoryError {
    fn from(err: CurrencyError) -> Self {
        Self::domain(err)
    }
}

impl From<TreasureError> for RepositoryError {
    fn from(err: TreasureError) -> Self {
        Self::domain(err)
    }
}

impl From<RaceError> for RepositoryError {
    fn from(err: RaceError) -> Self {
        Self::domain(err)
    }
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
