//! Stock predicates for use inside patterns.

use genfn_core::{Kind, Predicate, Value};

/// Matches [`Value::Null`].
pub fn is_null() -> Predicate {
    Predicate::named("is_null", Value::is_null)
}

/// Matches booleans.
pub fn is_bool() -> Predicate {
    Predicate::named("is_bool", |v| matches!(v, Value::Bool(_)))
}

/// Matches integers.
pub fn is_int() -> Predicate {
    Predicate::named("is_int", |v| matches!(v, Value::Int(_)))
}

/// Matches floats.
pub fn is_float() -> Predicate {
    Predicate::named("is_float", |v| matches!(v, Value::Float(_)))
}

/// Matches either number variant.
pub fn is_number() -> Predicate {
    Predicate::named("is_number", |v| v.as_number().is_some())
}

/// Matches strings.
pub fn is_str() -> Predicate {
    Predicate::named("is_str", |v| matches!(v, Value::Str(_)))
}

/// Matches lists.
pub fn is_list() -> Predicate {
    Predicate::named("is_list", |v| v.kind().contains(Kind::SEQUENCE))
}

/// Matches maps.
pub fn is_map() -> Predicate {
    Predicate::named("is_map", |v| v.kind().contains(Kind::KEYED))
}

/// Matches invocables.
pub fn is_function() -> Predicate {
    Predicate::named("is_function", |v| v.kind().contains(Kind::CALLABLE))
}

/// Matches lists and maps with exactly `size` entries.
pub fn length(size: usize) -> Predicate {
    Predicate::named("length", move |v| v.size() == Some(size))
}

/// Matches values deeply equal to `expected`.
pub fn equals(expected: impl Into<Value>) -> Predicate {
    let expected = expected.into();
    Predicate::named("equals", move |v| *v == expected)
}

/// Inverts a predicate.
pub fn not(inner: Predicate) -> Predicate {
    Predicate::named("not", move |v| !inner.test(v))
}

/// Matches when every predicate matches.
pub fn all_of(predicates: impl IntoIterator<Item = Predicate>) -> Predicate {
    let predicates: Vec<_> = predicates.into_iter().collect();
    Predicate::named("all_of", move |v| predicates.iter().all(|p| p.test(v)))
}

/// Matches when any predicate matches.
pub fn any_of(predicates: impl IntoIterator<Item = Predicate>) -> Predicate {
    let predicates: Vec<_> = predicates.into_iter().collect();
    Predicate::named("any_of", move |v| predicates.iter().any(|p| p.test(v)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use genfn_core::Function;

    #[test]
    fn test_type_predicates() {
        assert!(is_null().test(&Value::Null));
        assert!(is_bool().test(&Value::Bool(false)));
        assert!(is_int().test(&Value::Int(1)));
        assert!(!is_int().test(&Value::Float(1.0)));
        assert!(is_float().test(&Value::Float(1.0)));
        assert!(is_number().test(&Value::Int(1)));
        assert!(is_number().test(&Value::Float(1.5)));
        assert!(!is_number().test(&Value::from("1")));
        assert!(is_str().test(&Value::from("s")));
        assert!(is_list().test(&Value::from([1])));
        assert!(!is_list().test(&Value::map([("a", Value::Null)])));
        assert!(is_map().test(&Value::map([("a", Value::Null)])));
        assert!(is_function().test(&Value::from(Function::new(|_| Ok(Value::Null)))));
    }

    #[test]
    fn test_length_and_equals() {
        assert!(length(2).test(&Value::from([1, 2])));
        assert!(!length(2).test(&Value::from([1])));
        assert!(!length(0).test(&Value::Null));
        assert!(equals([1, 2]).test(&Value::from([1, 2])));
        assert!(!equals([1, 2]).test(&Value::from([2, 1])));
    }

    #[test]
    fn test_combinators() {
        let positive_int = all_of([
            is_int(),
            Predicate::new(|v| v.as_int().is_some_and(|n| n > 0)),
        ]);
        assert!(positive_int.test(&Value::Int(3)));
        assert!(!positive_int.test(&Value::Int(-3)));

        let scalar_text = any_of([is_str(), is_null()]);
        assert!(scalar_text.test(&Value::Null));
        assert!(!scalar_text.test(&Value::Int(0)));

        assert!(not(is_null()).test(&Value::Int(0)));
        assert!(all_of([]).test(&Value::Null));
        assert!(!any_of([]).test(&Value::Null));
    }
}
