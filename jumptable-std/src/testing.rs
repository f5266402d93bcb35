//! Testing utilities for jumptable.
//!
//! This module provides helpers for asserting which table entries were
//! actually invoked.
//!
//! # Features
//!
//! - [`CallRecorder`]: wraps callables so every invocation is logged by label

use std::sync::{Arc, Mutex};

use jumptable_core::BoxFn;

/// Records the labels of wrapped callables as they are invoked.
///
/// # Example
///
/// ```rust
/// use jumptable_core::{BoxFn, BuildTable, DispatchTable};
/// use jumptable_std::{DenseTable, testing::CallRecorder};
///
/// let recorder = CallRecorder::new();
/// let table: DenseTable<usize, BoxFn<i32, i32>> = DenseTable::from_pairs([
///     (0, recorder.track("inc", |x: i32| x + 1)),
///     (2, recorder.track("dec", |x: i32| x - 1)),
/// ])
/// .unwrap();
///
/// table.invoke(&2, (10,)).unwrap();
/// table.invoke(&0, (10,)).unwrap();
/// assert_eq!(recorder.calls(), vec!["dec", "inc"]);
/// ```
#[derive(Clone, Default)]
pub struct CallRecorder {
    calls: Arc<Mutex<Vec<&'static str>>>,
}

impl CallRecorder {
    /// Create a new, empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `callable` so each call records `label` before running it.
    pub fn track<A, R, C>(&self, label: &'static str, callable: C) -> BoxFn<A, R>
    where
        C: Fn(A) -> R + Send + Sync + 'static,
    {
        let calls = self.calls.clone();
        Box::new(move |arg| {
            calls.lock().unwrap().push(label);
            callable(arg)
        })
    }

    /// Get the recorded labels, oldest first.
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    /// Get the number of recorded calls.
    pub fn count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Clear all recorded calls.
    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}
