//! Testing utilities for genfn.
//!
//! This module provides utilities to make testing dispatch behavior easier.
//!
//! # Features
//!
//! - [`RecordingImplementation`]: An implementation that records the argument lists it receives
//! - [`CountingPredicate`]: A predicate with a fixed verdict that counts its evaluations

use genfn_core::{BoxError, Callable, Function, Predicate, Value};
use parking_lot::Mutex;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Recording Implementation
// ============================================================================

/// An implementation that records every argument list it is invoked with.
///
/// Useful for verifying which method a call was routed to.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingImplementation::returning("hit");
/// generic.method(wildcard(), recorder.function());
///
/// generic.call(&[Value::Int(1)])?;
/// assert_eq!(recorder.calls(), vec![vec![Value::Int(1)]]);
/// ```
pub struct RecordingImplementation {
    calls: Arc<Mutex<Vec<Vec<Value>>>>,
    result: Value,
}

impl RecordingImplementation {
    /// Create a recorder that returns `Null`.
    pub fn new() -> Self {
        Self::returning(Value::Null)
    }

    /// Create a recorder that returns a specific value.
    pub fn returning(result: impl Into<Value>) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            result: result.into(),
        }
    }

    /// This recorder as a [`Function`] sharing the same log.
    pub fn function(&self) -> Function {
        Function::from_callable(self.clone())
    }

    /// Get a clone of the recorded argument lists.
    pub fn calls(&self) -> Vec<Vec<Value>> {
        self.calls.lock().clone()
    }

    /// Get the number of recorded invocations.
    pub fn count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Clear all recorded invocations.
    pub fn clear(&self) {
        self.calls.lock().clear();
    }
}

impl Default for RecordingImplementation {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for RecordingImplementation {
    fn clone(&self) -> Self {
        Self {
            calls: self.calls.clone(),
            result: self.result.clone(),
        }
    }
}

impl Callable for RecordingImplementation {
    fn call(&self, args: &[Value]) -> Result<Value, BoxError> {
        self.calls.lock().push(args.to_vec());
        Ok(self.result.clone())
    }
}

// ============================================================================
// Counting Predicate
// ============================================================================

/// A predicate with a fixed verdict that counts how often it is evaluated.
///
/// Useful for verifying that dispatch stops scanning at the first match.
pub struct CountingPredicate {
    count: Arc<AtomicUsize>,
    verdict: bool,
}

impl CountingPredicate {
    /// Create a counting predicate that always answers `verdict`.
    pub fn new(verdict: bool) -> Self {
        Self {
            count: Arc::new(AtomicUsize::new(0)),
            verdict,
        }
    }

    /// A [`Predicate`] sharing this counter.
    pub fn predicate(&self) -> Predicate {
        let count = self.count.clone();
        let verdict = self.verdict;
        Predicate::named("counting", move |_| {
            count.fetch_add(1, Ordering::SeqCst);
            verdict
        })
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl Clone for CountingPredicate {
    fn clone(&self) -> Self {
        Self {
            count: self.count.clone(),
            verdict: self.verdict,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_implementation() {
        let recorder = RecordingImplementation::returning(5);
        let function = recorder.function();
        assert_eq!(function.call(&[Value::Int(1)]).unwrap(), Value::Int(5));
        assert_eq!(recorder.count(), 1);
        assert_eq!(recorder.calls(), vec![vec![Value::Int(1)]]);
        recorder.clear();
        assert_eq!(recorder.count(), 0);
    }

    #[test]
    fn test_counting_predicate() {
        let counter = CountingPredicate::new(false);
        let predicate = counter.predicate();
        assert!(!predicate.test(&Value::Null));
        assert!(!predicate.test(&Value::Null));
        assert_eq!(counter.count(), 2);
        counter.reset();
        assert_eq!(counter.count(), 0);
    }
}
