//! Floating-point keys.
//!
//! `f32` and `f64` are neither `Eq` nor `Hash`, so they cannot key a
//! `HashMap` directly. [`FloatKey`] compares and hashes the IEEE bit pattern
//! instead, with `-0.0` folded into `0.0` and `NaN` refused, which makes it a
//! lawful map key. [`FloatTable`] puts a float-keyed face on a
//! [`SparseTable`] of `FloatKey`s.

use std::{
    cmp::Ordering,
    fmt::Debug,
    hash::{Hash, Hasher},
    marker::PhantomData,
};

use jumptable_core::{
    BuildError, BuildTable, DispatchTable, DispatchTableMut, DuplicatePolicy, LookupError, Probe,
    TableBuilder,
};

use crate::sparse::{SparseTable, SparseTableBuilder};

/// A float usable as a table key. Never `NaN`.
#[derive(Clone, Copy, Debug)]
pub struct FloatKey(f64);

impl FloatKey {
    /// Wrap `value`, failing with [`BuildError::InvalidKey`] on `NaN`.
    pub fn new(value: impl Into<f64>) -> Result<Self, BuildError> {
        let value = value.into();
        if value.is_nan() {
            return Err(BuildError::invalid_key(&value));
        }
        // -0.0 == 0.0 must hash alike
        Ok(Self(if value == 0.0 { 0.0 } else { value }))
    }

    /// The wrapped value.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl PartialEq for FloatKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for FloatKey {}

impl Hash for FloatKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl PartialOrd for FloatKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Float types accepted by [`FloatTable`].
pub trait FloatValue: Copy + Debug + Into<f64> {
    /// Narrow a stored key back to this type.
    fn from_f64(value: f64) -> Self;
}

impl FloatValue for f64 {
    fn from_f64(value: f64) -> Self {
        value
    }
}

impl FloatValue for f32 {
    // Lossless: every stored key was widened from an f32.
    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

/// A sparse table keyed directly by `f32` or `f64`.
pub struct FloatTable<T, F> {
    inner: SparseTable<FloatKey, F>,
    _value: PhantomData<fn() -> T>,
}

impl<T, F> FloatTable<T, F> {
    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<T: FloatValue, F> FloatTable<T, F> {
    /// Get the callable for `key`. `NaN` is never bound.
    pub fn get(&self, key: T) -> Option<&F> {
        let key = FloatKey::new(key).ok()?;
        self.inner.get(&key)
    }

    /// Iterate over entries in hash order.
    pub fn iter(&self) -> impl Iterator<Item = (T, &F)> + '_ {
        self.inner
            .iter()
            .map(|(key, callable)| (T::from_f64(key.value()), callable))
    }
}

impl<T, F> Default for FloatTable<T, F> {
    fn default() -> Self {
        Self {
            inner: SparseTable::new(),
            _value: PhantomData,
        }
    }
}

impl<T, F> Debug for FloatTable<T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FloatTable")
            .field("inner", &self.inner)
            .finish()
    }
}

impl<T: FloatValue, F> DispatchTable<T, F> for FloatTable<T, F> {
    fn probe(&self, key: &T) -> Probe<'_, F> {
        self.get(*key).into()
    }

    fn at(&self, key: &T) -> Result<&F, LookupError> {
        self.get(*key).ok_or_else(|| LookupError::not_found(key))
    }

    fn keys(&self) -> Vec<T> {
        self.iter().map(|(key, _)| key).collect()
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T: FloatValue, F> DispatchTableMut<T, F> for FloatTable<T, F> {
    fn at_mut(&mut self, key: &T) -> Result<&mut F, LookupError> {
        let Ok(float) = FloatKey::new(*key) else {
            return Err(LookupError::not_found(key));
        };
        self.inner
            .get_mut(&float)
            .ok_or_else(|| LookupError::not_found(key))
    }

    fn bind(&mut self, key: T, callable: F) -> Result<Option<F>, BuildError> {
        self.inner.bind(FloatKey::new(key)?, callable)
    }

    fn unbind(&mut self, key: &T) -> Option<F> {
        self.inner.unbind(&FloatKey::new(*key).ok()?)
    }
}

impl<T: FloatValue, F> BuildTable<T, F> for FloatTable<T, F> {
    type Builder = FloatTableBuilder<T, F>;
}

/// Builder for [`FloatTable`].
pub struct FloatTableBuilder<T, F> {
    inner: SparseTableBuilder<FloatKey, F>,
    _value: PhantomData<fn() -> T>,
}

impl<T, F> Default for FloatTableBuilder<T, F> {
    fn default() -> Self {
        Self {
            inner: SparseTableBuilder::default(),
            _value: PhantomData,
        }
    }
}

impl<T: FloatValue, F> TableBuilder<T, F> for FloatTableBuilder<T, F> {
    type Table = FloatTable<T, F>;

    fn with_policy(self, policy: DuplicatePolicy) -> Self {
        Self {
            inner: self.inner.with_policy(policy),
            _value: PhantomData,
        }
    }

    fn insert(&mut self, key: T, callable: F) -> Result<(), BuildError> {
        self.inner.insert(FloatKey::new(key)?, callable)
    }

    fn build(self) -> Result<Self::Table, BuildError> {
        Ok(FloatTable {
            inner: self.inner.build()?,
            _value: PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Op = fn(i32) -> i32;

    fn add_one(x: i32) -> i32 {
        x + 1
    }

    fn square(x: i32) -> i32 {
        x * x
    }

    fn negate(x: i32) -> i32 {
        -x
    }

    #[test]
    fn test_float_key_identity() {
        assert_eq!(FloatKey::new(0.0).unwrap(), FloatKey::new(-0.0).unwrap());
        assert_ne!(FloatKey::new(1.5).unwrap(), FloatKey::new(1.25).unwrap());
        assert!(matches!(
            FloatKey::new(f64::NAN),
            Err(BuildError::InvalidKey(_))
        ));
        assert!(FloatKey::new(1.0).unwrap() < FloatKey::new(2.0).unwrap());
    }

    #[test]
    fn test_f32_table() {
        let table: FloatTable<f32, Op> = FloatTable::from_pairs([
            (4.6f32, add_one as Op),
            (5.66666, square as Op),
            (7890.2, negate as Op),
        ])
        .unwrap();

        assert_eq!(table.invoke(&4.6, (1,)), Ok(2));
        assert_eq!(table.invoke(&5.66666, (3,)), Ok(9));
        assert!(!table.probe(&4.7).is_bound());
        assert!(matches!(table.at(&1.0), Err(LookupError::KeyNotFound(_))));

        let mut keys = table.keys();
        keys.sort_by(|a, b| a.total_cmp(b));
        assert_eq!(keys, vec![4.6f32, 5.66666, 7890.2]);
    }

    #[test]
    fn test_nan_rejected_at_build() {
        let result: Result<FloatTable<f64, Op>, _> =
            FloatTable::from_pairs([(1.0, add_one as Op), (f64::NAN, square as Op)]);
        assert!(matches!(result, Err(BuildError::InvalidKey(_))));
    }

    #[test]
    fn test_nan_probe_is_unbound() {
        let table: FloatTable<f64, Op> = FloatTable::from_pairs([(1.0, add_one as Op)]).unwrap();
        assert!(!table.probe(&f64::NAN).is_bound());
        assert!(table.at(&f64::NAN).is_err());
    }

    #[test]
    fn test_signed_zero_is_one_key() {
        let mut table: FloatTable<f64, Op> =
            FloatTable::from_pairs([(0.0, add_one as Op), (-0.0, negate as Op)]).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.invoke(&0.0, (4,)), Ok(-4));

        *table.at_mut(&-0.0).unwrap() = square;
        assert_eq!(table.invoke(&0.0, (4,)), Ok(16));
        assert!(table.unbind(&0.0).is_some());
        assert!(table.is_empty());
    }
}
