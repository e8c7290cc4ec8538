//! # Structural matcher
//!
//! Decides whether a subject [`Value`] satisfies a [`Pattern`]. Matching is
//! total: it never fails, it only answers `false`.
//!
//! Keyed containers and sequences go through one routine over the
//! [`Structure`] abstraction, where a sequence is a container keyed by
//! position. Sizes must agree before any entry is compared, so a subject with
//! extra or missing entries never matches.

use crate::{
    patterns::{Pattern, Predicate},
    values::{Kind, Value},
};
use std::collections::BTreeMap;

/// Address of an entry inside a structured value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key<'a> {
    /// Position in a sequence.
    Index(usize),
    /// Field of a keyed container.
    Field(&'a str),
}

/// A container exposing key enumeration and keyed lookup.
pub trait Structure {
    /// Type of the nested entries.
    type Entry;

    /// Number of entries.
    fn size(&self) -> usize;

    /// All keys, in container order.
    fn keys(&self) -> impl Iterator<Item = Key<'_>>;

    /// Entry stored under `key`.
    fn lookup(&self, key: Key<'_>) -> Option<&Self::Entry>;
}

impl<T> Structure for [T] {
    type Entry = T;

    fn size(&self) -> usize {
        self.len()
    }

    fn keys(&self) -> impl Iterator<Item = Key<'_>> {
        (0..self.len()).map(Key::Index)
    }

    fn lookup(&self, key: Key<'_>) -> Option<&T> {
        match key {
            Key::Index(i) => self.get(i),
            Key::Field(_) => None,
        }
    }
}

impl<T> Structure for BTreeMap<String, T> {
    type Entry = T;

    fn size(&self) -> usize {
        self.len()
    }

    fn keys(&self) -> impl Iterator<Item = Key<'_>> {
        BTreeMap::keys(self).map(|k| Key::Field(k.as_str()))
    }

    fn lookup(&self, key: Key<'_>) -> Option<&T> {
        match key {
            Key::Field(name) => self.get(name),
            Key::Index(_) => None,
        }
    }
}

/// Shared structural rule: equal sizes, then every pattern entry matches the
/// subject entry under the same key.
fn structural<P, S, F>(pattern: &P, subject: &S, each: F) -> bool
where
    P: Structure + ?Sized,
    S: Structure<Entry = Value> + ?Sized,
    F: Fn(&P::Entry, &Value) -> bool,
{
    if pattern.size() != subject.size() {
        return false;
    }
    pattern.keys().all(|key| {
        match (pattern.lookup(key), subject.lookup(key)) {
            (Some(expected), Some(actual)) => each(expected, actual),
            _ => false,
        }
    })
}

/// Entries of a structured value, or `None` for scalars and functions.
enum Entries<'a> {
    Sequence(&'a [Value]),
    Keyed(&'a BTreeMap<String, Value>),
}

impl<'a> Entries<'a> {
    fn of(value: &'a Value) -> Option<Self> {
        match value {
            Value::List(items) => Some(Entries::Sequence(&**items)),
            Value::Map(fields) => Some(Entries::Keyed(&**fields)),
            _ => None,
        }
    }

    fn matched_by<P, F>(&self, pattern: &P, each: F) -> bool
    where
        P: Structure + ?Sized,
        F: Fn(&P::Entry, &Value) -> bool,
    {
        match self {
            Entries::Sequence(items) => structural(pattern, *items, each),
            Entries::Keyed(fields) => structural(pattern, *fields, each),
        }
    }
}

/// Test `pattern` against `value`.
pub fn matches(pattern: &Pattern, value: &Value) -> bool {
    match pattern {
        Pattern::Predicate(predicate) => predicate.test(value),
        Pattern::Literal(expected) => matches_value(expected, value),
        Pattern::Sequence(items) => Entries::of(value)
            .is_some_and(|entries| entries.matched_by(items.as_slice(), matches)),
        Pattern::Object(fields) => {
            Entries::of(value).is_some_and(|entries| entries.matched_by(fields, matches))
        }
    }
}

/// Test a pattern given as a plain [`Value`].
///
/// Rules, in order:
/// 1. a function is a predicate and must return exactly `Bool(true)`;
/// 2. strict equality (identity for structured values) matches;
/// 3. two structured values match structurally;
/// 4. anything else does not match.
pub fn matches_value(pattern: &Value, value: &Value) -> bool {
    if let Value::Function(function) = pattern {
        return Predicate::from(function.clone()).test(value);
    }
    if pattern.strict_eq(value) {
        return true;
    }
    if !pattern.kind().contains(Kind::STRUCTURED) {
        return false;
    }
    let Some(entries) = Entries::of(value) else {
        return false;
    };
    match pattern {
        Value::List(items) => entries.matched_by(&**items, matches_value),
        Value::Map(fields) => entries.matched_by(&**fields, matches_value),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::Function;

    fn book() -> Value {
        Value::map([
            ("title", Value::from("Common Lisp the Language, 2nd edition")),
            ("author", Value::from("Guy L. Steele")),
            ("year", Value::from(1990)),
            ("ISBN", Value::from("1-55558-041-6")),
        ])
    }

    #[test]
    fn test_wildcard_matches_everything() {
        let wildcard = Pattern::wildcard();
        for value in [
            Value::Null,
            Value::Bool(false),
            Value::Int(0),
            Value::from("x"),
            Value::from([1, 2]),
            book(),
            Value::from(Function::new(|_| Ok(Value::Null))),
        ] {
            assert!(matches(&wildcard, &value), "wildcard rejected {value}");
        }
    }

    #[test]
    fn test_literal_equality() {
        assert!(matches(&Pattern::from(13), &Value::Int(13)));
        assert!(!matches(&Pattern::from(13), &Value::Int(14)));
        assert!(!matches(&Pattern::from("13"), &Value::Int(13)));
        assert!(matches(&Pattern::from("lisp"), &Value::from("lisp")));
    }

    #[test]
    fn test_object_with_wildcards() {
        let pattern = Pattern::object([
            ("title", Pattern::wildcard()),
            ("author", Pattern::wildcard()),
            ("year", Pattern::wildcard()),
            ("ISBN", Pattern::wildcard()),
        ]);
        assert!(matches(&pattern, &book()));
    }

    #[test]
    fn test_object_size_gate() {
        let pattern = Pattern::object([("title", Pattern::wildcard())]);
        assert!(!matches(&pattern, &book()));

        let wider = Pattern::object([
            ("a", Pattern::wildcard()),
            ("b", Pattern::wildcard()),
        ]);
        assert!(!matches(&wider, &Value::map([("a", Value::Int(1))])));
    }

    #[test]
    fn test_object_missing_key_never_matches() {
        // Same size, different key set.
        let pattern = Pattern::object([("a", Pattern::wildcard())]);
        assert!(!matches(&pattern, &Value::map([("b", Value::Int(1))])));
    }

    #[test]
    fn test_empty_structures() {
        let empty_object = Pattern::object(Vec::<(String, Pattern)>::new());
        assert!(matches(&empty_object, &Value::map(Vec::<(String, Value)>::new())));
        assert!(!matches(&empty_object, &Value::map([("a", Value::Null)])));

        let empty_sequence = Pattern::sequence([]);
        assert!(matches(&empty_sequence, &Value::list([])));
        assert!(!matches(&empty_sequence, &Value::from([1])));
    }

    #[test]
    fn test_sequence_length_must_match() {
        let pattern = Pattern::from([Pattern::wildcard()]);
        assert!(matches(&pattern, &Value::from([1])));
        assert!(!matches(&pattern, &Value::from([1, 2])));
        assert!(!matches(&pattern, &Value::list([])));
    }

    #[test]
    fn test_shape_mismatch_is_false() {
        let sequence = Pattern::from([Pattern::wildcard()]);
        let object = Pattern::object([("0", Pattern::wildcard())]);
        let list = Value::from([1]);
        let map = Value::map([("0", Value::Int(1))]);

        assert!(!matches(&sequence, &map));
        assert!(!matches(&object, &list));
        assert!(!matches(&sequence, &Value::Int(1)));
        assert!(!matches(&object, &Value::Null));
    }

    #[test]
    fn test_predicate_is_not_recursed_into() {
        let seen = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let log = seen.clone();
        let pattern = Pattern::object([(
            "inner",
            Pattern::predicate(move |v| {
                log.lock().unwrap().push(v.clone());
                v.size() == Some(2)
            }),
        )]);
        let subject = Value::map([("inner", Value::from([1, 2]))]);

        assert!(matches(&pattern, &subject));
        assert_eq!(*seen.lock().unwrap(), vec![Value::from([1, 2])]);
    }

    #[test]
    fn test_matches_value_identity_shortcut() {
        // The function inside would reject the map, but identity wins first.
        let shared = Value::map([(
            "check",
            Value::from(Function::new(|_| Ok(Value::Bool(false)))),
        )]);
        assert!(matches_value(&shared, &shared.clone()));
    }

    #[test]
    fn test_matches_value_structural_and_predicates() {
        let is_int = Value::from(Function::new(|args| Ok(Value::Bool(args[0].as_int().is_some()))));
        let pattern = Value::list([Value::from("history"), is_int]);

        assert!(matches_value(&pattern, &Value::list([Value::from("history"), Value::Int(3)])));
        assert!(!matches_value(&pattern, &Value::list([Value::from("history"), Value::from("3")])));
        assert!(!matches_value(&pattern, &Value::from("history")));
    }

    #[test]
    fn test_literal_variant_uses_value_rules() {
        let list = Value::from([1, 2]);
        let pattern = Pattern::literal(list.clone());
        assert!(matches(&pattern, &list));
        assert!(matches(&pattern, &Value::from([1, 2])));
        assert!(!matches(&pattern, &Value::from([2, 1])));
    }
}
