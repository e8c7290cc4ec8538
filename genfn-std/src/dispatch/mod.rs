//! Dispatch support.
//!
//! This module provides the generic function and the method table it owns.

pub mod generic;
pub mod table;

pub use generic::{Dispatch, GenericFunction, WeakGenericFunction};
pub use table::{Method, MethodTable, Snapshot};
