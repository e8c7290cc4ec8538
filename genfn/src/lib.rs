//! # genfn - Generic Functions with Structural Dispatch
//!
//! `genfn` attaches several pattern-guarded implementations ("methods") to a
//! single callable, the generic function. A call tries the methods from the
//! most recently registered to the oldest and runs the first one whose
//! pattern matches the whole argument list.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use genfn::prelude::*;
//!
//! let sum = create(Options::default().name("sum"));
//! sum.method(pattern!([(is_number()), (is_number())]), Function::new(|args| {
//!     Ok(Value::Float(f64::try_from(&args[0])? + f64::try_from(&args[1])?))
//! }));
//! sum.method(pattern!([(is_list()), (is_list())]), Function::new(|args| {
//!     let a = <&[Value]>::try_from(&args[0])?;
//!     let b = <&[Value]>::try_from(&args[1])?;
//!     Ok(a.iter().chain(b).cloned().collect())
//! }));
//!
//! assert_eq!(sum.call(&[value!(1), value!(2)])?, Value::Float(3.0));
//! ```
//!
//! ## Patterns
//!
//! | Pattern | Matches |
//! |---------|---------|
//! | [`wildcard()`] / `_` in [`pattern!`] | anything |
//! | predicate | values the predicate accepts (a [`Function`] must return exactly `true`) |
//! | literal | strictly equal values |
//! | sequence | lists of the same length, element by element |
//! | object | maps with the same key set, field by field |

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use genfn_core::{
    // Errors
    BoxError,
    // Callables
    Callable,
    DispatchError,
    Function,
    // Matching
    Key,
    Kind,
    Pattern,
    Predicate,
    Structure,
    // Values
    Value,
    ValueError,
    matches,
    matches_value,
    // Macros
    pattern,
    value,
};

pub use genfn_std::{
    Curried, Dispatch, GenericFunction, GenericFunctionBuilder, Method, MethodTable, Options,
    WeakGenericFunction,
};

/// Stock predicates for use inside patterns.
pub mod predicates {
    #![allow(clippy::wildcard_imports)]
    pub use genfn_std::predicates::*;
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use genfn_std::testing::*;
}

/// Create a generic function with no methods.
pub fn create(options: Options) -> GenericFunction {
    GenericFunction::with_options(options)
}

/// The pattern that matches any value.
pub fn wildcard() -> Pattern {
    Pattern::wildcard()
}

/// Prelude module - common imports for genfn.
///
/// # Usage
///
/// ```rust,ignore
/// use genfn::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Errors
        BoxError,
        DispatchError,
        // Core types
        Function,
        GenericFunction,
        Options,
        Pattern,
        Predicate,
        Value,
        WeakGenericFunction,
        // Operations
        create,
        matches,
        // Macros
        pattern,
        value,
        wildcard,
    };

    pub use crate::predicates::{
        all_of, any_of, equals, is_bool, is_float, is_function, is_int, is_list, is_map,
        is_null, is_number, is_str, length, not,
    };
}
