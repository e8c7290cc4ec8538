//! Method table for runtime method registration.

use genfn_core::{DispatchError, Pattern, Value};
use parking_lot::RwLock;
use std::sync::Arc;

/// A registered `(pattern, implementation)` pair.
#[derive(Debug)]
pub struct Method {
    pattern: Pattern,
    implementation: Value,
}

impl Method {
    /// Create a new method.
    pub fn new(pattern: Pattern, implementation: Value) -> Self {
        Self {
            pattern,
            implementation,
        }
    }

    /// Pattern matched against the whole argument list.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// The implementation value.
    pub fn implementation(&self) -> &Value {
        &self.implementation
    }

    /// Produce the method's result for `args`.
    ///
    /// A function implementation is invoked and its faults propagate; any
    /// other implementation is returned as is.
    pub fn invoke(&self, args: &[Value]) -> Result<Value, DispatchError> {
        match &self.implementation {
            Value::Function(function) => function.call(args).map_err(DispatchError::from_fault),
            value => Ok(value.clone()),
        }
    }
}

/// Immutable view of the table at one point in time, oldest method first.
pub type Snapshot = Arc<[Arc<Method>]>;

/// An append-only, insertion-ordered method table.
///
/// Appends publish a new snapshot; readers clone the current snapshot and
/// scan it without holding the lock, so implementations may register new
/// methods while a call is in flight.
pub struct MethodTable {
    methods: RwLock<Snapshot>,
}

impl MethodTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            methods: RwLock::new(Arc::from(Vec::<Arc<Method>>::new())),
        }
    }

    /// Append a method. Returns the new number of methods.
    pub fn push(&self, method: Method) -> usize {
        let mut guard = self.methods.write();
        let mut next = Vec::with_capacity(guard.len() + 1);
        next.extend(guard.iter().cloned());
        next.push(Arc::new(method));
        *guard = next.into();
        guard.len()
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> Snapshot {
        self.methods.read().clone()
    }

    /// Number of registered methods.
    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Find the most recently registered method whose pattern matches
    /// `subject`, together with its registration index.
    pub fn find(&self, subject: &Value) -> Option<(usize, Arc<Method>)> {
        self.snapshot()
            .iter()
            .enumerate()
            .rev()
            .find(|(_, method)| method.pattern().matches(subject))
            .map(|(index, method)| (index, method.clone()))
    }
}

impl Default for MethodTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use genfn_core::Function;

    #[test]
    fn test_push_preserves_order() {
        let table = MethodTable::new();
        assert!(table.is_empty());
        assert_eq!(table.push(Method::new(Pattern::from(1), Value::from("one"))), 1);
        assert_eq!(table.push(Method::new(Pattern::from(2), Value::from("two"))), 2);

        let snapshot = table.snapshot();
        assert_eq!(snapshot[0].implementation(), &Value::from("one"));
        assert_eq!(snapshot[1].implementation(), &Value::from("two"));
    }

    #[test]
    fn test_find_prefers_newest() {
        let table = MethodTable::new();
        table.push(Method::new(Pattern::wildcard(), Value::from("first")));
        table.push(Method::new(Pattern::wildcard(), Value::from("second")));

        let (index, method) = table.find(&Value::Null).unwrap();
        assert_eq!(index, 1);
        assert_eq!(method.implementation(), &Value::from("second"));
    }

    #[test]
    fn test_find_none_when_nothing_matches() {
        let table = MethodTable::new();
        table.push(Method::new(Pattern::from(1), Value::Null));
        assert!(table.find(&Value::Int(2)).is_none());
    }

    #[test]
    fn test_snapshot_is_unaffected_by_later_push() {
        let table = MethodTable::new();
        table.push(Method::new(Pattern::wildcard(), Value::Null));
        let before = table.snapshot();
        table.push(Method::new(Pattern::wildcard(), Value::Null));
        assert_eq!(before.len(), 1);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_push_during_find_does_not_deadlock() {
        let table = Arc::new(MethodTable::new());
        let handle = Arc::downgrade(&table);
        table.push(Method::new(
            Pattern::predicate(move |_| {
                if let Some(table) = handle.upgrade() {
                    table.push(Method::new(Pattern::wildcard(), Value::Null));
                }
                false
            }),
            Value::Null,
        ));

        assert!(table.find(&Value::Null).is_none());
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_invoke_function_and_constant() {
        let constant = Method::new(Pattern::wildcard(), Value::Int(0));
        assert_eq!(constant.invoke(&[Value::Int(9)]).unwrap(), Value::Int(0));

        let first = Method::new(
            Pattern::wildcard(),
            Value::from(Function::new(|args| Ok(args[0].clone()))),
        );
        assert_eq!(first.invoke(&[Value::Int(9)]).unwrap(), Value::Int(9));
    }

    #[test]
    fn test_invoke_propagates_fault() {
        let failing = Method::new(
            Pattern::wildcard(),
            Value::from(Function::new(|_| Err("out of cheese".into()))),
        );
        let err = failing.invoke(&[]).unwrap_err();
        assert!(!err.is_no_match());
        assert_eq!(err.to_string(), "out of cheese");
    }
}
