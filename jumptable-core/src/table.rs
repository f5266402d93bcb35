//! Dispatch table abstraction layer.
//!
//! This module provides a trait-based abstraction that allows different
//! backing stores (dense vector, hash map, perfect hash) to be swapped without
//! changing the code that looks callables up.

use crate::{
    callable::Callable,
    error::{BuildError, LookupError},
};

/// Result of a probe lookup.
///
/// `Unbound` is the sentinel for "no callable": the key is out of range, was
/// never bound, or is absent.
#[derive(Debug, PartialEq, Eq)]
pub enum Probe<'a, F> {
    /// The key is bound; contains the callable.
    Bound(&'a F),
    /// No callable for this key.
    Unbound,
}

impl<'a, F> Probe<'a, F> {
    /// Returns true if the key was bound.
    pub fn is_bound(&self) -> bool {
        matches!(self, Probe::Bound(_))
    }

    /// Returns the bound callable, if any.
    pub fn bound(self) -> Option<&'a F> {
        match self {
            Probe::Bound(f) => Some(f),
            Probe::Unbound => None,
        }
    }
}

impl<F> Clone for Probe<'_, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for Probe<'_, F> {}

impl<'a, F> From<Option<&'a F>> for Probe<'a, F> {
    fn from(value: Option<&'a F>) -> Self {
        match value {
            Some(f) => Probe::Bound(f),
            None => Probe::Unbound,
        }
    }
}

/// What a builder does when the same key is inserted twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// The later callable replaces the earlier one (default).
    #[default]
    LastWriteWins,
    /// The second insertion fails with [`BuildError::DuplicateKey`].
    Reject,
}

/// A table that maps keys to callables.
///
/// Implementors hide whether the store is array- or map-backed; callers only
/// see the two lookup flavours and key enumeration.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a dispatch table keyed by `{K}`",
    label = "missing `DispatchTable<{K}, {F}>` implementation"
)]
pub trait DispatchTable<K, F> {
    /// Probe lookup. Never fails; misses yield [`Probe::Unbound`].
    fn probe(&self, key: &K) -> Probe<'_, F>;

    /// Fail-fast lookup.
    fn at(&self, key: &K) -> Result<&F, LookupError>;

    /// Every key the table addresses, as a fresh vector.
    fn keys(&self) -> Vec<K>;

    /// Number of addressable keys.
    fn len(&self) -> usize;

    /// Check if the table addresses no keys at all.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if a key is bound to a callable.
    fn contains(&self, key: &K) -> bool {
        self.probe(key).is_bound()
    }

    /// Look up `key` and call the callable with `args`.
    ///
    /// Fails exactly like [`DispatchTable::at`]; the callable's own result is
    /// returned untouched.
    fn invoke<Args>(
        &self,
        key: &K,
        args: Args,
    ) -> Result<<F as Callable<Args>>::Output, LookupError>
    where
        F: Callable<Args>,
    {
        Ok(Callable::invoke(self.at(key)?, args))
    }
}

/// Mutable access to the bindings of a [`DispatchTable`].
pub trait DispatchTableMut<K, F>: DispatchTable<K, F> {
    /// Fail-fast mutable lookup. Assigning through the returned reference
    /// reseats the binding.
    fn at_mut(&mut self, key: &K) -> Result<&mut F, LookupError>;

    /// Bind `key` to `callable`, returning the callable it replaced.
    fn bind(&mut self, key: K, callable: F) -> Result<Option<F>, BuildError>;

    /// Remove the binding for `key`, returning it.
    fn unbind(&mut self, key: &K) -> Option<F>;
}

/// Builder for constructing tables.
///
/// This trait allows different table implementations to be built using a
/// common interface.
pub trait TableBuilder<K, F>: Default {
    /// The table type this builder produces.
    type Table;

    /// Set the duplicate-key policy.
    fn with_policy(self, policy: DuplicatePolicy) -> Self;

    /// Insert a key-callable pair.
    ///
    /// Returns an error if the key is invalid, or already present under
    /// [`DuplicatePolicy::Reject`].
    fn insert(&mut self, key: K, callable: F) -> Result<(), BuildError>;

    /// Build the table, consuming the builder.
    fn build(self) -> Result<Self::Table, BuildError>;
}

/// Tables constructible from an ordered list of pairs.
pub trait BuildTable<K, F>: Sized {
    /// The builder used by [`BuildTable::from_pairs`].
    type Builder: TableBuilder<K, F, Table = Self>;

    /// Start a builder with the default policy.
    fn builder() -> Self::Builder {
        Self::Builder::default()
    }

    /// Build a table from `(key, callable)` pairs, in order.
    fn from_pairs<I>(pairs: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = (K, F)>,
    {
        Self::from_pairs_with(pairs, DuplicatePolicy::default())
    }

    /// Build a table from pairs under an explicit duplicate policy.
    fn from_pairs_with<I>(pairs: I, policy: DuplicatePolicy) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = (K, F)>,
    {
        let mut builder = Self::builder().with_policy(policy);
        for (key, callable) in pairs {
            builder.insert(key, callable)?;
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_helpers() {
        let val = 42;
        let bound = Probe::Bound(&val);
        let unbound: Probe<i32> = Probe::Unbound;

        assert!(bound.is_bound());
        assert!(!unbound.is_bound());

        assert_eq!(bound.bound(), Some(&42));
        assert_eq!(unbound.bound(), None);
    }

    #[test]
    fn test_probe_from_option() {
        let val = "x";
        assert_eq!(Probe::from(Some(&val)), Probe::Bound(&"x"));
        assert_eq!(Probe::<&str>::from(None), Probe::Unbound);
    }

    #[test]
    fn test_default_policy() {
        assert_eq!(DuplicatePolicy::default(), DuplicatePolicy::LastWriteWins);
    }
}
