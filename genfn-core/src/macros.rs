//! Literal syntax for values and patterns.

/// Construct a [`Value`](crate::Value) from JSON-like syntax.
///
/// Elements and field values must be single token trees: wrap negative
/// numbers and other compound expressions in parentheses.
///
/// # Example
/// ```ignore
/// let book = value!({ title: "Lisp", year: 1958, tags: ["ai", (-1)] });
/// ```
#[macro_export]
macro_rules! value {
    (null) => { $crate::Value::Null };
    ([]) => { $crate::Value::list([]) };
    ([ $($elem:tt),+ $(,)? ]) => {
        $crate::Value::list([ $( $crate::value!($elem) ),+ ])
    };
    ({}) => { $crate::Value::Map(::std::default::Default::default()) };
    ({ $($key:tt : $val:tt),+ $(,)? }) => {
        $crate::Value::map([ $( ($crate::__field_name!($key), $crate::value!($val)) ),+ ])
    };
    ($other:expr) => { $crate::Value::from($other) };
}

/// Construct a [`Pattern`](crate::Pattern) from JSON-like syntax.
///
/// `_` is the wildcard. Arrays become sequence patterns, braces become
/// object patterns, and any other expression goes through `Pattern::from`
/// (closures must be wrapped with `Pattern::predicate`).
///
/// # Example
/// ```ignore
/// let p = pattern!(["history", { name: _, predecessor: { name: "Lisp", author: (is_str()) } }]);
/// ```
#[macro_export]
macro_rules! pattern {
    (_) => { $crate::Pattern::wildcard() };
    (null) => { $crate::Pattern::Literal($crate::Value::Null) };
    ([]) => { $crate::Pattern::sequence([]) };
    ([ $($elem:tt),+ $(,)? ]) => {
        $crate::Pattern::sequence([ $( $crate::pattern!($elem) ),+ ])
    };
    ({}) => { $crate::Pattern::Object(::std::collections::BTreeMap::new()) };
    ({ $($key:tt : $val:tt),+ $(,)? }) => {
        $crate::Pattern::object([ $( ($crate::__field_name!($key), $crate::pattern!($val)) ),+ ])
    };
    ($other:expr) => { $crate::Pattern::from($other) };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field_name {
    ($key:ident) => {
        ::std::string::String::from(stringify!($key))
    };
    ($key:literal) => {
        ::std::string::String::from($key)
    };
}
