//! Common error infrastructure for race-core.
//!
//! This module provides shared types and traits used across all error types in race-core.
//! Domain-specific errors (e.g., `DiceError`, `CurrencyError`) are defined in their
//! respective modules alongside the values they validate.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each value object has its own error type with specific variants
//! - **Fail Fast**: Every violation is reported at the point it happens
//! - **No Partial Writes**: A failed mutation leaves the value in its prior state
//! - **Uniform Taxonomy**: Every error maps onto one [`ErrorKind`]

/// Classification shared by every error in the crate.
///
/// The kind is what outer layers (validators, request handlers) use to pick a
/// user-visible response:
/// - **InvalidArgument**: empty names, absent references, dice counts below one
/// - **OutOfRange**: levels, rates, ids or scores outside their numeric domain
/// - **Conflict**: a hierarchy level is already taken inside a currency group
/// - **NotFound**: a named entry does not exist
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// A required value is empty, whitespace or otherwise unusable.
    ///
    /// Examples: blank denomination name, dice count of zero
    InvalidArgument,

    /// A numeric value lies outside the domain of the operation.
    ///
    /// Examples: ability score 43, exchange rate 0, negative id
    OutOfRange,

    /// The operation would break a uniqueness invariant.
    ///
    /// Examples: two denominations at hierarchy level 2
    Conflict,

    /// The addressed entry does not exist.
    ///
    /// Examples: removing "Platinum" from a group that never had it
    NotFound,
}

impl ErrorKind {
    /// Returns a human-readable description of this kind.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "invalid_argument",
            Self::OutOfRange => "out_of_range",
            Self::Conflict => "conflict",
            Self::NotFound => "not_found",
        }
    }

    /// Returns true if the caller supplied malformed input.
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidArgument | Self::OutOfRange)
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Common trait for all race-core errors.
///
/// This trait provides a uniform interface for error classification across all
/// error types in the crate.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Keep variants specific; the kind is derived, never stored
pub trait CoreError: core::fmt::Display + core::fmt::Debug {
    /// Returns the taxonomy kind of this error.
    fn kind(&self) -> ErrorKind;

    /// Returns a static string identifier for this error variant.
    ///
    /// This is useful for error categorization, metrics, and testing.
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Shared name validation: rejects empty and whitespace-only strings.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
