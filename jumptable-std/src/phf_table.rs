//! PHF-based table implementation.
//!
//! Provides compile-time perfect hash dispatch for string keys.
//! This table is immutable and must be constructed with a static map reference.

use jumptable_core::{DispatchTable, LookupError, Probe};

/// A read-only table over a static `phf::Map`.
///
/// # Example
///
/// ```rust
/// use jumptable_core::DispatchTable;
/// use jumptable_std::PhfTable;
/// use phf::phf_map;
///
/// type Op = fn(i32) -> i32;
///
/// fn double(x: i32) -> i32 { x * 2 }
/// fn negate(x: i32) -> i32 { -x }
///
/// static OPS: phf::Map<&'static str, Op> = phf_map! {
///     "double" => double as Op,
///     "negate" => negate as Op,
/// };
///
/// let table = PhfTable::new(&OPS);
/// assert_eq!(table.get("double").map(|f| f(4)), Some(8));
/// assert_eq!(table.invoke(&"negate", (4,)), Ok(-4));
/// assert!(table.get("quit").is_none());
/// ```
pub struct PhfTable<F: 'static> {
    map: &'static phf::Map<&'static str, F>,
}

impl<F: 'static> PhfTable<F> {
    /// Create a new table from a static PHF map.
    pub const fn new(map: &'static phf::Map<&'static str, F>) -> Self {
        Self { map }
    }

    /// Get the callable for `key`.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&'static F> {
        self.map.get(key)
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<F: 'static> Clone for PhfTable<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: 'static> Copy for PhfTable<F> {}

impl<F: 'static> DispatchTable<&'static str, F> for PhfTable<F> {
    fn probe(&self, key: &&'static str) -> Probe<'_, F> {
        self.get(key).into()
    }

    fn at(&self, key: &&'static str) -> Result<&F, LookupError> {
        self.get(key).ok_or_else(|| LookupError::not_found(key))
    }

    /// In the map's internal order.
    fn keys(&self) -> Vec<&'static str> {
        self.map.keys().copied().collect()
    }

    fn len(&self) -> usize {
        self.map.len()
    }
}

// Note: BuildTable is not implemented for PhfTable because PHF maps
// are constructed at compile time, not runtime.
