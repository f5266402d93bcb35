//! Compile-time backend selection.
//!
//! [`TableKey`] maps a key type to the table that stores it: integers get a
//! [`DenseTable`], floats a [`FloatTable`], everything else a [`SparseTable`].
//! [`JumpTable<K, F>`] names the selected type, so callers never spell out
//! which store they are using.
//!
//! # Choosing a Backend
//!
//! | Key | Table | Lookup |
//! |-----|-------|--------|
//! | `u8`..`u128`, `i8`..`i128`, `usize`, `isize` | `DenseTable` | Index |
//! | `f32`, `f64` | `FloatTable` | Hash of bit pattern |
//! | `String`, `&'static str`, `char`, `bool`, `FloatKey` | `SparseTable` | Hash |
//!
//! Other key types opt in by implementing [`TableKey`] themselves.

use jumptable_core::{BuildError, BuildTable, DispatchTableMut};

use crate::{
    dense::DenseTable,
    float::{FloatKey, FloatTable},
    sparse::SparseTable,
};

/// A key type with a designated table backend.
pub trait TableKey: Sized {
    /// The table used for this key type.
    type Table<F>: DispatchTableMut<Self, F> + BuildTable<Self, F>;
}

/// The table selected for key type `K` and callable type `F`.
pub type JumpTable<K, F> = <K as TableKey>::Table<F>;

/// Build the table selected for `K` from ordered `(key, callable)` pairs.
///
/// # Example
///
/// ```rust
/// use jumptable_core::DispatchTable;
///
/// type Op = fn(i32) -> i32;
///
/// fn double(x: i32) -> i32 { x * 2 }
///
/// let dense = jumptable_std::build([(2u8, double as Op)]).unwrap();
/// assert_eq!(dense.keys(), vec![0, 1, 2]);
///
/// let sparse = jumptable_std::build([("double", double as Op)]).unwrap();
/// assert_eq!(sparse.keys(), vec!["double"]);
/// ```
pub fn build<K, F, I>(pairs: I) -> Result<JumpTable<K, F>, BuildError>
where
    K: TableKey,
    I: IntoIterator<Item = (K, F)>,
{
    <JumpTable<K, F> as BuildTable<K, F>>::from_pairs(pairs)
}

macro_rules! dense_keys {
    ($($t:ty),* $(,)?) => {
        $(
            impl TableKey for $t {
                type Table<F> = DenseTable<$t, F>;
            }
        )*
    };
}

macro_rules! sparse_keys {
    ($($t:ty),* $(,)?) => {
        $(
            impl TableKey for $t {
                type Table<F> = SparseTable<$t, F>;
            }
        )*
    };
}

dense_keys!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
sparse_keys!(String, &'static str, char, bool, FloatKey);

impl TableKey for f32 {
    type Table<F> = FloatTable<f32, F>;
}

impl TableKey for f64 {
    type Table<F> = FloatTable<f64, F>;
}
