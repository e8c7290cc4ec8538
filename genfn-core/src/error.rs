//! Error types for genfn.
//!
//! This module provides a small error hierarchy using `thiserror`:
//!
//! - [`DispatchError`] - Errors raised by invoking a generic function or a
//!   weak handle to one
//! - [`ValueError`] - Errors from extracting Rust data out of a [`Value`]
//!
//! [`Value`]: crate::Value

use thiserror::Error;

/// A boxed error type for dynamic error handling.
///
/// Implementations and callables report their faults with this type.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur when a generic function is invoked.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// Every registered method was tried and none matched the arguments.
    #[error(
        "No method matches {} in call to generic function{}.",
        argument_phrase(.arguments),
        name_clause(.name)
    )]
    NoMatch {
        /// Number of positional arguments supplied to the call.
        arguments: usize,
        /// Name the generic function was created with, if any.
        name: Option<String>,
    },

    /// A weak handle was called after its generic function was dropped.
    #[error("Generic function{} has been dropped.", name_clause(.name))]
    Released {
        /// Name the generic function was created with, if any.
        name: Option<String>,
    },

    /// The selected implementation raised a fault.
    #[error(transparent)]
    Implementation(BoxError),
}

impl DispatchError {
    /// Wrap a fault raised by an implementation.
    ///
    /// A fault that already is a [`DispatchError`] (for example a lookup
    /// failure from a recursive call) is unwrapped instead of nested.
    pub fn from_fault(fault: BoxError) -> Self {
        match fault.downcast::<DispatchError>() {
            Ok(inner) => *inner,
            Err(other) => DispatchError::Implementation(other),
        }
    }

    /// Returns `true` for a lookup failure.
    pub fn is_no_match(&self) -> bool {
        matches!(self, DispatchError::NoMatch { .. })
    }
}

fn argument_phrase(count: &usize) -> String {
    if *count == 1 {
        "single argument".to_string()
    } else {
        format!("{count} arguments")
    }
}

fn name_clause(name: &Option<String>) -> String {
    match name.as_deref() {
        Some(name) if !name.is_empty() => format!(" '{name}'"),
        _ => String::new(),
    }
}

/// Errors from converting a [`Value`](crate::Value) into Rust data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// The value has a different kind than requested.
    #[error("expected {expected}, found {found}")]
    Mismatch {
        /// Kind that was requested.
        expected: &'static str,
        /// Kind that was present.
        found: &'static str,
    },

    /// An argument list is shorter than the requested position.
    #[error("missing argument at position {0}")]
    MissingArgument(usize),
}
