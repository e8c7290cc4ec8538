//! # genfn-core
//!
//! Core data model and structural matcher for the genfn generic-function
//! library.
//!
//! This crate has minimal dependencies and holds everything that does not
//! need a method table: the values that flow through calls, the patterns
//! that guard methods, and the matcher that relates the two.
//!
//! # Building Blocks
//!
//! ## Values ([`Value`])
//!
//! A dynamically typed value: scalars, lists, string-keyed maps and
//! invocable [`Function`]s. Structured payloads are reference counted, so a
//! value is cheap to clone and structured values carry an identity.
//!
//! ## Callables ([`Callable`], [`Function`])
//!
//! Anything invocable with a positional argument list. Closures qualify
//! directly; generic functions and curry adapters implement the trait in
//! `genfn-std`.
//!
//! ## Patterns ([`Pattern`])
//!
//! A tagged union classified once at construction: predicate, literal,
//! sequence or object.
//!
//! ## Matcher ([`matches`], [`matches_value`])
//!
//! A pure, total, recursive test of a pattern against a value.
//!
//! # Error Types
//!
//! - [`DispatchError`] - Lookup failures and implementation faults
//! - [`ValueError`] - Failed extraction of Rust data from a [`Value`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod function;
mod macros;
mod matcher;
mod patterns;
mod values;

// Re-exports
pub use error::{BoxError, DispatchError, ValueError};
pub use function::{Callable, Function};
pub use matcher::{Key, Structure, matches, matches_value};
pub use patterns::{Pattern, Predicate};
pub use values::{Kind, Value};
