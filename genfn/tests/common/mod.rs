#![allow(dead_code)]

use genfn::{BoxError, Function, Predicate, Value, predicates};

// ============================================================================
// Predicates
// ============================================================================

/// Strings made of more than one space-separated word.
pub fn multi_word() -> Predicate {
    Predicate::named("multi_word", |v| {
        v.as_str().is_some_and(|s| s.split(' ').count() > 1)
    })
}

pub fn is_number() -> Predicate {
    predicates::is_number()
}

pub fn is_array() -> Predicate {
    predicates::is_list()
}

// ============================================================================
// Implementations
// ============================================================================

/// Returns its first argument.
pub fn identity() -> Function {
    Function::new(|args| Ok(Value::arg(args, 0)?.clone()))
}

/// Adds two integers.
pub fn add() -> Function {
    Function::new(|args| {
        let a = i64::try_from(Value::arg(args, 0)?)?;
        let b = i64::try_from(Value::arg(args, 1)?)?;
        Ok(Value::Int(a + b))
    })
}

/// Concatenates two lists.
pub fn concat() -> Function {
    Function::new(|args| {
        let a = <&[Value]>::try_from(Value::arg(args, 0)?)?;
        let b = <&[Value]>::try_from(Value::arg(args, 1)?)?;
        Ok(a.iter().chain(b).cloned().collect())
    })
}

/// Multiplies an integer by two.
pub fn double() -> Function {
    Function::new(|args| Ok(Value::Int(2 * i64::try_from(Value::arg(args, 0)?)?)))
}

/// Applies the callback in the first argument to every element of the list
/// in the second argument.
pub fn map_list() -> Function {
    Function::new(|args| {
        let callback = <&Function>::try_from(Value::arg(args, 0)?)?;
        let items = <&[Value]>::try_from(Value::arg(args, 1)?)?;
        items
            .iter()
            .map(|item| callback.call(std::slice::from_ref(item)))
            .collect::<Result<Value, BoxError>>()
    })
}

pub fn int(n: i64) -> Value {
    Value::Int(n)
}
