//! # Patterns
//!
//! A [`Pattern`] describes what an argument list (or a nested part of it)
//! must look like for a method to apply. Patterns are classified once, when
//! they are built:
//!
//! | Variant | Built from | Matches |
//! |---------|------------|---------|
//! | `Predicate` | closures, [`Function`] values | when the predicate says so |
//! | `Literal` | scalars | by strict equality |
//! | `Sequence` | arrays, vectors, list values | lists of the same length, element-wise |
//! | `Object` | field maps, map values | maps with the same key set, field-wise |

use crate::{function::Function, matcher, values::Value};
use std::{collections::BTreeMap, fmt, sync::Arc};

/// A test applied to a single candidate value.
#[derive(Clone)]
pub struct Predicate {
    label: &'static str,
    test: Arc<dyn Fn(&Value) -> bool + Send + Sync>,
}

impl Predicate {
    /// Create a predicate from a closure.
    pub fn new<F>(test: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self::named("predicate", test)
    }

    /// Create a predicate with a label shown in `Debug` output.
    pub fn named<F>(label: &'static str, test: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            label,
            test: Arc::new(test),
        }
    }

    /// The predicate that accepts every value.
    pub fn wildcard() -> Self {
        Self::named("_", |_| true)
    }

    /// Evaluate the predicate.
    pub fn test(&self, value: &Value) -> bool {
        (self.test)(value)
    }

    /// Label given at construction.
    pub fn label(&self) -> &'static str {
        self.label
    }
}

/// A function used as a predicate matches only when it returns exactly
/// `Bool(true)`. Errors count as a non-match.
impl From<Function> for Predicate {
    fn from(function: Function) -> Self {
        Self::named("function", move |value| {
            matches!(
                function.call(std::slice::from_ref(value)),
                Ok(Value::Bool(true))
            )
        })
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Predicate({})", self.label)
    }
}

/// A structural pattern.
#[derive(Clone, Debug)]
pub enum Pattern {
    /// Delegate to a predicate.
    Predicate(Predicate),
    /// Strict equality with a value.
    Literal(Value),
    /// Positional sub-patterns.
    Sequence(Vec<Pattern>),
    /// Keyed sub-patterns.
    Object(BTreeMap<String, Pattern>),
}

impl Pattern {
    /// The pattern that matches anything.
    pub fn wildcard() -> Self {
        Pattern::Predicate(Predicate::wildcard())
    }

    /// A predicate pattern from a closure.
    pub fn predicate<F>(test: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Pattern::Predicate(Predicate::new(test))
    }

    /// A pattern that keeps `value` unclassified.
    ///
    /// It is matched with [`matches_value`](crate::matches_value): a function
    /// still acts as a predicate, and structured values are compared by
    /// reference first and structurally after that.
    pub fn literal(value: impl Into<Value>) -> Self {
        Pattern::Literal(value.into())
    }

    /// A sequence pattern.
    pub fn sequence(items: impl IntoIterator<Item = Pattern>) -> Self {
        Pattern::Sequence(items.into_iter().collect())
    }

    /// An object pattern from `(field, pattern)` pairs.
    pub fn object<K: Into<String>>(fields: impl IntoIterator<Item = (K, Pattern)>) -> Self {
        Pattern::Object(fields.into_iter().map(|(k, p)| (k.into(), p)).collect())
    }

    /// Test this pattern against a value.
    pub fn matches(&self, value: &Value) -> bool {
        matcher::matches(self, value)
    }
}

/// Classification of a value: callable first, then structured, else scalar.
impl From<Value> for Pattern {
    fn from(value: Value) -> Self {
        match value {
            Value::Function(function) => Pattern::Predicate(function.into()),
            Value::List(items) => items.iter().cloned().map(Pattern::from).collect(),
            Value::Map(fields) => Pattern::Object(
                fields
                    .iter()
                    .map(|(k, v)| (k.clone(), Pattern::from(v.clone())))
                    .collect(),
            ),
            scalar => {
                debug_assert!(scalar.kind().is_scalar());
                Pattern::Literal(scalar)
            }
        }
    }
}

impl From<Predicate> for Pattern {
    fn from(predicate: Predicate) -> Self {
        Pattern::Predicate(predicate)
    }
}

impl From<Function> for Pattern {
    fn from(function: Function) -> Self {
        Pattern::Predicate(function.into())
    }
}

impl From<bool> for Pattern {
    fn from(b: bool) -> Self {
        Pattern::Literal(b.into())
    }
}

impl From<i64> for Pattern {
    fn from(n: i64) -> Self {
        Pattern::Literal(n.into())
    }
}

impl From<i32> for Pattern {
    fn from(n: i32) -> Self {
        Pattern::Literal(n.into())
    }
}

impl From<f64> for Pattern {
    fn from(n: f64) -> Self {
        Pattern::Literal(n.into())
    }
}

impl From<&str> for Pattern {
    fn from(s: &str) -> Self {
        Pattern::Literal(s.into())
    }
}

impl From<String> for Pattern {
    fn from(s: String) -> Self {
        Pattern::Literal(s.into())
    }
}

impl<T: Into<Pattern>> From<Vec<T>> for Pattern {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().map(Into::into).collect()
    }
}

impl<T: Into<Pattern>, const N: usize> From<[T; N]> for Pattern {
    fn from(items: [T; N]) -> Self {
        items.into_iter().map(Into::into).collect()
    }
}

impl From<BTreeMap<String, Pattern>> for Pattern {
    fn from(fields: BTreeMap<String, Pattern>) -> Self {
        Pattern::Object(fields)
    }
}

impl FromIterator<Pattern> for Pattern {
    fn from_iter<I: IntoIterator<Item = Pattern>>(iter: I) -> Self {
        Pattern::Sequence(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_classification() {
        assert!(matches!(Pattern::from(Value::Int(1)), Pattern::Literal(_)));
        assert!(matches!(
            Pattern::from(Value::from([1, 2])),
            Pattern::Sequence(ref items) if items.len() == 2
        ));
        assert!(matches!(
            Pattern::from(Value::map([("a", Value::Null)])),
            Pattern::Object(ref fields) if fields.contains_key("a")
        ));
        assert!(matches!(
            Pattern::from(Value::from(Function::new(|_| Ok(Value::Bool(true))))),
            Pattern::Predicate(_)
        ));
    }

    #[test]
    fn test_function_predicate_requires_exact_true() {
        let truthy = Predicate::from(Function::new(|_| Ok(Value::Int(1))));
        let exact = Predicate::from(Function::new(|_| Ok(Value::Bool(true))));
        let failing = Predicate::from(Function::new(|_| Err("nope".into())));

        assert!(!truthy.test(&Value::Null));
        assert!(exact.test(&Value::Null));
        assert!(!failing.test(&Value::Null));
    }

    #[test]
    fn test_function_predicate_receives_candidate() {
        let is_seven = Predicate::from(Function::new(|args| {
            Ok(Value::Bool(args == [Value::Int(7)]))
        }));
        assert!(is_seven.test(&Value::Int(7)));
        assert!(!is_seven.test(&Value::Int(8)));
    }

    #[test]
    fn test_debug_shows_label() {
        assert_eq!(format!("{:?}", Predicate::wildcard()), "Predicate(_)");
    }
}
