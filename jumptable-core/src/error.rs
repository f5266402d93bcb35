//! Error types for jumptable.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`JumpTableError`] - Top-level error type for all table operations
//! - [`BuildError`] - Errors raised while constructing a table
//! - [`LookupError`] - Errors raised by the fail-fast accessors

use thiserror::Error;

/// Top-level error type for all jumptable operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JumpTableError {
    /// The table could not be constructed.
    #[error("build error: {0}")]
    Build(#[from] BuildError),

    /// A fail-fast lookup missed.
    #[error("lookup error: {0}")]
    Lookup(#[from] LookupError),
}

/// Errors that can occur while building a table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// The key cannot address a slot (negative integer, `NaN`, or an index
    /// not representable by the key type).
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// The key was supplied twice under [`DuplicatePolicy::Reject`].
    ///
    /// [`DuplicatePolicy::Reject`]: crate::DuplicatePolicy::Reject
    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    /// A dense key would grow the table past its configured limit.
    #[error("key {key} exceeds the dense capacity limit of {limit} slots")]
    CapacityExceeded {
        /// The offending key.
        key: String,
        /// The configured slot limit.
        limit: usize,
    },
}

/// Errors returned by [`DispatchTable::at`] and friends.
///
/// [`DispatchTable::at`]: crate::DispatchTable::at
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// Dense lookup outside `[0, len)` or on an unbound slot.
    #[error("key {key} is out of range or unbound (table length {len})")]
    OutOfRange {
        /// The requested key.
        key: String,
        /// Number of slots in the table.
        len: usize,
    },

    /// Sparse lookup for a key that is not present.
    #[error("key not found: {0}")]
    KeyNotFound(String),
}

impl BuildError {
    /// Create a [`BuildError::InvalidKey`] from the key's `Debug` rendering.
    pub fn invalid_key(key: &impl std::fmt::Debug) -> Self {
        BuildError::InvalidKey(format!("{key:?}"))
    }

    /// Create a [`BuildError::DuplicateKey`] from the key's `Debug` rendering.
    pub fn duplicate_key(key: &impl std::fmt::Debug) -> Self {
        BuildError::DuplicateKey(format!("{key:?}"))
    }
}

impl LookupError {
    /// Create a [`LookupError::KeyNotFound`] from the key's `Debug` rendering.
    pub fn not_found(key: &impl std::fmt::Debug) -> Self {
        LookupError::KeyNotFound(format!("{key:?}"))
    }
}
