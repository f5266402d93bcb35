//! Vector-backed table for integer keys.
//!
//! Slot `i` holds the callable bound to key `i`, or `None` when nothing was
//! bound there. The table is as long as the greatest key it was built with,
//! plus one.

use std::marker::PhantomData;

use jumptable_core::{
    BuildError, BuildTable, DenseKey, DispatchTable, DispatchTableMut, DuplicatePolicy,
    LookupError, Probe, TableBuilder,
};

/// A table backed by `Vec<Option<F>>`, indexed by key value.
///
/// # Example
///
/// ```rust
/// use jumptable_core::{BuildTable, DispatchTable};
/// use jumptable_std::DenseTable;
///
/// fn double(x: i32) -> i32 { x * 2 }
/// fn negate(x: i32) -> i32 { -x }
///
/// type Op = fn(i32) -> i32;
///
/// let table: DenseTable<i32, Op> =
///     DenseTable::from_pairs([(1, double as Op), (3, negate as Op)]).unwrap();
///
/// assert_eq!(table.keys(), vec![0, 1, 2, 3]);
/// assert_eq!(table.invoke(&3, (5,)), Ok(-5));
/// assert!(!table.contains(&2));
/// ```
pub struct DenseTable<K, F> {
    slots: Vec<Option<F>>,
    _key: PhantomData<fn() -> K>,
}

impl<K, F> DenseTable<K, F> {
    fn from_slots(slots: Vec<Option<F>>) -> Self {
        Self {
            slots,
            _key: PhantomData,
        }
    }

    /// Get the number of slots, bound or not.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if the table has no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Get the number of slots holding a callable.
    pub fn bound_len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}

impl<K: DenseKey, F> DenseTable<K, F> {
    /// Create a builder with default settings.
    pub fn builder() -> DenseTableBuilder<K, F> {
        DenseTableBuilder::default()
    }

    /// Build a table whose keys are the positions of `callables`, starting at
    /// zero. Every slot is bound.
    ///
    /// Fails with [`BuildError::InvalidKey`] if the last position does not fit
    /// in `K`.
    pub fn from_fns<I>(callables: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = F>,
    {
        let slots: Vec<Option<F>> = callables.into_iter().map(Some).collect();
        if let Some(last) = slots.len().checked_sub(1) {
            if K::from_index(last).is_none() {
                return Err(BuildError::invalid_key(&last));
            }
        }
        Ok(Self::from_slots(slots))
    }

    /// Get the callable bound to `key`.
    #[inline]
    pub fn get(&self, key: K) -> Option<&F> {
        let index = key.to_index()?;
        self.slots.get(index)?.as_ref()
    }

    /// Get the callable bound to `key`, mutably.
    #[inline]
    pub fn get_mut(&mut self, key: K) -> Option<&mut F> {
        let index = key.to_index()?;
        self.slots.get_mut(index)?.as_mut()
    }

    /// Keys of the slots that hold a callable, ascending.
    pub fn bound_keys(&self) -> Vec<K> {
        self.iter().map(|(key, _)| key).collect()
    }

    /// Iterate over bound entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (K, &F)> + '_ {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            let callable = slot.as_ref()?;
            Some((K::from_index(index)?, callable))
        })
    }
}

fn out_of_range<K: DenseKey>(key: &K, len: usize) -> LookupError {
    #[cfg(feature = "tracing")]
    {
        tracing::debug!(key = ?key, len, "dense lookup missed");
    }

    LookupError::OutOfRange {
        key: format!("{key:?}"),
        len,
    }
}

/// Most slots a `Vec<Option<F>>` can address.
fn max_slots<F>() -> usize {
    isize::MAX.unsigned_abs() / std::mem::size_of::<Option<F>>().max(1)
}

/// Extend `slots` so that `index` is addressable. Keys past what the vector
/// can hold, or that the allocator refuses, fail with
/// [`BuildError::CapacityExceeded`] instead of aborting.
fn grow_to<K: DenseKey, F>(
    slots: &mut Vec<Option<F>>,
    index: usize,
    key: &K,
) -> Result<(), BuildError> {
    if index < slots.len() {
        return Ok(());
    }

    let limit = max_slots::<F>();
    let exceeded = || {
        #[cfg(feature = "tracing")]
        {
            tracing::debug!(key = ?key, limit, "dense key past addressable slots");
        }

        BuildError::CapacityExceeded {
            key: format!("{key:?}"),
            limit,
        }
    };

    let new_len = index
        .checked_add(1)
        .filter(|&len| len <= limit)
        .ok_or_else(exceeded)?;
    slots
        .try_reserve_exact(new_len - slots.len())
        .map_err(|_| exceeded())?;
    slots.resize_with(new_len, || None);
    Ok(())
}

impl<K, F> Default for DenseTable<K, F> {
    fn default() -> Self {
        Self::from_slots(Vec::new())
    }
}

impl<K, F: Clone> Clone for DenseTable<K, F> {
    fn clone(&self) -> Self {
        Self::from_slots(self.slots.clone())
    }
}

impl<K, F> std::fmt::Debug for DenseTable<K, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DenseTable")
            .field("len", &self.slots.len())
            .field("bound", &self.bound_len())
            .finish()
    }
}

impl<K: DenseKey, F> DispatchTable<K, F> for DenseTable<K, F> {
    fn probe(&self, key: &K) -> Probe<'_, F> {
        self.get(*key).into()
    }

    fn at(&self, key: &K) -> Result<&F, LookupError> {
        match self.get(*key) {
            Some(callable) => Ok(callable),
            None => Err(out_of_range(key, self.slots.len())),
        }
    }

    /// Every index in `0..len`, including slots that were never bound.
    fn keys(&self) -> Vec<K> {
        (0..self.slots.len()).filter_map(K::from_index).collect()
    }

    fn len(&self) -> usize {
        self.slots.len()
    }
}

impl<K: DenseKey, F> DispatchTableMut<K, F> for DenseTable<K, F> {
    fn at_mut(&mut self, key: &K) -> Result<&mut F, LookupError> {
        let len = self.slots.len();
        match key.to_index().and_then(|index| self.slots.get_mut(index)) {
            Some(Some(callable)) => Ok(callable),
            _ => Err(out_of_range(key, len)),
        }
    }

    /// Grows the table when `key` is past the end.
    fn bind(&mut self, key: K, callable: F) -> Result<Option<F>, BuildError> {
        let index = key.to_index().ok_or_else(|| BuildError::invalid_key(&key))?;
        grow_to(&mut self.slots, index, &key)?;
        Ok(self.slots[index].replace(callable))
    }

    /// Leaves the slot in place, unbound.
    fn unbind(&mut self, key: &K) -> Option<F> {
        let index = key.to_index()?;
        self.slots.get_mut(index)?.take()
    }
}

impl<K: DenseKey, F> BuildTable<K, F> for DenseTable<K, F> {
    type Builder = DenseTableBuilder<K, F>;
}

/// Builder for [`DenseTable`].
pub struct DenseTableBuilder<K, F> {
    slots: Vec<Option<F>>,
    policy: DuplicatePolicy,
    capacity_limit: Option<usize>,
    _key: PhantomData<fn() -> K>,
}

impl<K, F> DenseTableBuilder<K, F> {
    /// Reject duplicate keys instead of overwriting.
    pub fn reject_duplicates(mut self) -> Self {
        self.policy = DuplicatePolicy::Reject;
        self
    }

    /// Refuse keys that would grow the table past `limit` slots.
    pub fn with_capacity_limit(mut self, limit: usize) -> Self {
        self.capacity_limit = Some(limit);
        self
    }
}

impl<K, F> Default for DenseTableBuilder<K, F> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            policy: DuplicatePolicy::default(),
            capacity_limit: None,
            _key: PhantomData,
        }
    }
}

impl<K: DenseKey, F> TableBuilder<K, F> for DenseTableBuilder<K, F> {
    type Table = DenseTable<K, F>;

    fn with_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    fn insert(&mut self, key: K, callable: F) -> Result<(), BuildError> {
        let index = key.to_index().ok_or_else(|| BuildError::invalid_key(&key))?;

        if let Some(limit) = self.capacity_limit {
            if index >= limit {
                return Err(BuildError::CapacityExceeded {
                    key: format!("{key:?}"),
                    limit,
                });
            }
        }

        grow_to(&mut self.slots, index, &key)?;

        let slot = &mut self.slots[index];
        if slot.is_some() {
            if self.policy == DuplicatePolicy::Reject {
                return Err(BuildError::duplicate_key(&key));
            }

            #[cfg(feature = "tracing")]
            {
                tracing::trace!(key = ?key, "overwriting dense binding");
            }
        }
        *slot = Some(callable);
        Ok(())
    }

    fn build(self) -> Result<Self::Table, BuildError> {
        let table = DenseTable::from_slots(self.slots);

        #[cfg(feature = "tracing")]
        {
            tracing::debug!(
                slots = table.len(),
                bound = table.bound_len(),
                policy = ?self.policy,
                "built dense jump table"
            );
        }

        Ok(table)
    }
}
