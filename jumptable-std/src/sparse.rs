//! HashMap-backed table for arbitrary keys.
//!
//! This is the store for any key that is not a dense integer: strings,
//! chars, enums, or [`FloatKey`](crate::FloatKey).

use std::{borrow::Borrow, collections::HashMap, fmt::Debug, hash::Hash};

use jumptable_core::{
    BuildError, BuildTable, DispatchTable, DispatchTableMut, DuplicatePolicy, LookupError, Probe,
    TableBuilder,
};

/// A table backed by `HashMap`.
///
/// Presence implies a callable: there is no unbound state for a present key.
pub struct SparseTable<K, F> {
    map: HashMap<K, F>,
}

impl<K, F> SparseTable<K, F> {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Create a table from an existing HashMap.
    pub fn from_map(map: HashMap<K, F>) -> Self {
        Self { map }
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over entries in hash order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &F)> + '_ {
        self.map.iter()
    }
}

impl<K, F> SparseTable<K, F>
where
    K: Hash + Eq,
{
    /// Create a builder with default settings.
    pub fn builder() -> SparseTableBuilder<K, F> {
        SparseTableBuilder::default()
    }

    /// Get the callable for `key`, accepting borrowed key forms such as `&str`
    /// for `String` keys.
    #[inline]
    pub fn get<Q>(&self, key: &Q) -> Option<&F>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.get(key)
    }

    /// Get the callable for `key`, mutably.
    #[inline]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut F>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.get_mut(key)
    }
}

impl<K, F> Default for SparseTable<K, F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, F: Clone> Clone for SparseTable<K, F> {
    fn clone(&self) -> Self {
        Self {
            map: self.map.clone(),
        }
    }
}

impl<K: Debug, F> Debug for SparseTable<K, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SparseTable")
            .field("keys", &self.map.keys().collect::<Vec<_>>())
            .finish()
    }
}

fn not_found<K: Debug>(key: &K) -> LookupError {
    #[cfg(feature = "tracing")]
    {
        tracing::debug!(key = ?key, "sparse lookup missed");
    }

    LookupError::not_found(key)
}

impl<K, F> DispatchTable<K, F> for SparseTable<K, F>
where
    K: Hash + Eq + Clone + Debug,
{
    fn probe(&self, key: &K) -> Probe<'_, F> {
        self.map.get(key).into()
    }

    fn at(&self, key: &K) -> Result<&F, LookupError> {
        self.map.get(key).ok_or_else(|| not_found(key))
    }

    fn keys(&self) -> Vec<K> {
        self.map.keys().cloned().collect()
    }

    fn len(&self) -> usize {
        self.map.len()
    }
}

impl<K, F> DispatchTableMut<K, F> for SparseTable<K, F>
where
    K: Hash + Eq + Clone + Debug,
{
    fn at_mut(&mut self, key: &K) -> Result<&mut F, LookupError> {
        self.map.get_mut(key).ok_or_else(|| not_found(key))
    }

    fn bind(&mut self, key: K, callable: F) -> Result<Option<F>, BuildError> {
        Ok(self.map.insert(key, callable))
    }

    fn unbind(&mut self, key: &K) -> Option<F> {
        self.map.remove(key)
    }
}

impl<K, F> BuildTable<K, F> for SparseTable<K, F>
where
    K: Hash + Eq + Debug,
{
    type Builder = SparseTableBuilder<K, F>;
}

/// Builder for [`SparseTable`].
pub struct SparseTableBuilder<K, F> {
    map: HashMap<K, F>,
    policy: DuplicatePolicy,
}

impl<K, F> SparseTableBuilder<K, F> {
    /// Reject duplicate keys instead of overwriting.
    pub fn reject_duplicates(mut self) -> Self {
        self.policy = DuplicatePolicy::Reject;
        self
    }
}

impl<K, F> Default for SparseTableBuilder<K, F> {
    fn default() -> Self {
        Self {
            map: HashMap::new(),
            policy: DuplicatePolicy::default(),
        }
    }
}

impl<K, F> TableBuilder<K, F> for SparseTableBuilder<K, F>
where
    K: Hash + Eq + Debug,
{
    type Table = SparseTable<K, F>;

    fn with_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    fn insert(&mut self, key: K, callable: F) -> Result<(), BuildError> {
        if self.map.contains_key(&key) {
            if self.policy == DuplicatePolicy::Reject {
                return Err(BuildError::duplicate_key(&key));
            }

            #[cfg(feature = "tracing")]
            {
                tracing::trace!(key = ?key, "overwriting sparse binding");
            }
        }
        self.map.insert(key, callable);
        Ok(())
    }

    fn build(self) -> Result<Self::Table, BuildError> {
        #[cfg(feature = "tracing")]
        {
            tracing::debug!(
                entries = self.map.len(),
                policy = ?self.policy,
                "built sparse jump table"
            );
        }

        Ok(SparseTable { map: self.map })
    }
}
