//! # genfn-std
//!
//! Standard implementations for the genfn generic-function library.
//!
//! This crate provides:
//! - **Dispatch**: [`GenericFunction`] and its append-only [`MethodTable`]
//! - **Configuration**: [`Options`] and [`GenericFunctionBuilder`]
//! - **Currying**: the fixed-arity [`Curried`] adapter
//! - **Stock predicates**: type tests and combinators in [`predicates`]
//! - **Testing utilities**: recorders and counters in [`testing`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core types
pub use genfn_core;

// Modules
pub mod curry;
pub mod dispatch;
pub mod options;
pub mod predicates;
pub mod testing;

pub use curry::Curried;
pub use dispatch::{Dispatch, GenericFunction, Method, MethodTable, WeakGenericFunction};
pub use options::{GenericFunctionBuilder, Options};
