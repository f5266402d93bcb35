//! # jumptable-std
//!
//! Standard table backends for the jumptable library.
//!
//! This crate provides:
//! - **Dense tables**: [`DenseTable`], vector-backed, for integer keys
//! - **Sparse tables**: [`SparseTable`], `HashMap`-backed, for any hashable key
//! - **Float tables**: [`FloatTable`] and [`FloatKey`] for `f32`/`f64` keys
//! - **Static tables**: `PhfTable` over a compile-time `phf::Map` (feature `phf`)
//! - **Backend selection**: [`TableKey`], [`JumpTable`], [`build`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use jumptable_core;

// Modules
pub mod dense;
pub mod float;
#[cfg(feature = "phf")]
pub mod phf_table;
pub mod select;
pub mod sparse;
pub mod testing;

pub use dense::{DenseTable, DenseTableBuilder};
pub use float::{FloatKey, FloatTable, FloatTableBuilder, FloatValue};
#[cfg(feature = "phf")]
pub use phf_table::PhfTable;
pub use select::{JumpTable, TableKey, build};
pub use sparse::{SparseTable, SparseTableBuilder};
