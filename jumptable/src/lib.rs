//! # jumptable - Key-to-Callable Dispatch Tables
//!
//! `jumptable` maps keys to callables with a storage strategy chosen by the
//! key type: small non-negative integers index a vector directly, anything
//! else goes through a hash map. The choice is made at compile time; callers
//! see one interface either way.
//!
//! ## Quick Start
//!
//! ```rust
//! use jumptable::prelude::*;
//!
//! type Parser = fn(&[u8]) -> usize;
//!
//! fn forward(bytes: &[u8]) -> usize { bytes.len() }
//! fn sum(bytes: &[u8]) -> usize { bytes.iter().map(|&b| b as usize).sum() }
//!
//! let parsers: JumpTable<i32, Parser> = jump_table!(Parser; 3 => forward, 8 => sum).unwrap();
//!
//! for key in parsers.keys() {
//!     match parsers.probe(&key) {
//!         Probe::Bound(parse) => println!("{key}: {}", parse(&[1, 2, 3])),
//!         Probe::Unbound => println!("no parser for {key}"),
//!     }
//! }
//!
//! assert!(matches!(parsers.at(&4), Err(LookupError::OutOfRange { .. })));
//! ```
//!
//! ## Lookup Flavours
//!
//! - [`DispatchTable::probe`] never fails; a miss is [`Probe::Unbound`].
//! - [`DispatchTable::at`] / [`DispatchTableMut::at_mut`] fail fast with a
//!   [`LookupError`].
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events when tables are built and when
//!   fail-fast lookups miss.
//! - `phf`: enable [`PhfTable`](crate::PhfTable) over compile-time maps.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod macros;

pub use jumptable_core::{
    // Callables
    BoxFn,
    // Construction
    BuildError,
    BuildTable,
    Callable,
    // Keys
    DenseKey,
    // Table traits
    DispatchTable,
    DispatchTableMut,
    DuplicatePolicy,
    // Errors
    JumpTableError,
    LookupError,
    Probe,
    TableBuilder,
};

// Backends
pub use jumptable_std::{
    DenseTable, DenseTableBuilder, FloatKey, FloatTable, FloatTableBuilder, FloatValue,
    JumpTable, SparseTable, SparseTableBuilder, TableKey, build,
};

#[cfg(feature = "phf")]
pub use jumptable_std::PhfTable;

#[cfg(feature = "phf")]
pub use phf;

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use jumptable_std::testing::*;
}

/// Prelude module - common imports for jumptable.
///
/// # Usage
///
/// ```rust,ignore
/// use jumptable::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        BuildError, BuildTable, Callable, DispatchTable, DispatchTableMut, DuplicatePolicy,
        JumpTable, LookupError, Probe, TableBuilder, jump_table,
    };
}
