//! # jumptable-core
//!
//! Core traits for the jumptable dispatch-table library.
//!
//! This crate has minimal dependencies and is meant to be imported by code
//! that is generic over table backends without pulling in the concrete
//! stores from `jumptable-std`.
//!
//! # Layers
//!
//! ## Keys ([`DenseKey`])
//!
//! Integer keys index a vector directly; everything else is hashed.
//!
//! ## Callables ([`Callable`])
//!
//! Every entry of one table shares a single signature. [`Callable`] exposes it
//! as an argument tuple so a looked-up entry can be invoked generically.
//!
//! ## Tables ([`DispatchTable`], [`DispatchTableMut`])
//!
//! Two lookup flavours: [`DispatchTable::probe`] never fails and returns the
//! [`Probe::Unbound`] sentinel on a miss, [`DispatchTable::at`] fails fast with
//! a [`LookupError`].
//!
//! ## Construction ([`BuildTable`], [`TableBuilder`])
//!
//! Tables are built once from ordered `(key, callable)` pairs, with a
//! [`DuplicatePolicy`] deciding what repeated keys mean.
//!
//! # Error Types
//!
//! - [`JumpTableError`] - Top-level error type
//! - [`BuildError`] - Construction errors
//! - [`LookupError`] - Fail-fast lookup misses

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod callable;
mod error;
mod key;
mod table;

// Re-exports
pub use callable::{BoxFn, Callable};
pub use error::{BuildError, JumpTableError, LookupError};
pub use key::DenseKey;
pub use table::{
    BuildTable, DispatchTable, DispatchTableMut, DuplicatePolicy, Probe, TableBuilder,
};
