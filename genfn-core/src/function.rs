//! # Invocable values
//!
//! A [`Function`] is the invocable variant of [`Value`]. It wraps anything
//! implementing [`Callable`]: plain closures, generic functions, and the
//! partial-application adapters produced by currying.
//!
//! # Use Cases
//!
//! - Method implementations that compute their result from the arguments
//! - Predicate patterns expressed as values (they must return `Bool(true)`)
//! - Callbacks passed as arguments to other generic functions

use crate::{error::BoxError, values::Value};
use std::{fmt, sync::Arc};

/// Something that can be invoked with a positional argument list.
///
/// Closures of type `Fn(&[Value]) -> Result<Value, BoxError>` implement this
/// trait automatically.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be invoked as a genfn callable",
    label = "missing `Callable` implementation",
    note = "Closures must have the signature `Fn(&[Value]) -> Result<Value, BoxError>`."
)]
pub trait Callable: Send + Sync + 'static {
    /// Invoke with the given arguments.
    fn call(&self, args: &[Value]) -> Result<Value, BoxError>;

    /// Number of arguments the callable expects, if fixed.
    fn arity(&self) -> Option<usize> {
        None
    }
}

impl<F> Callable for F
where
    F: Fn(&[Value]) -> Result<Value, BoxError> + Send + Sync + 'static,
{
    fn call(&self, args: &[Value]) -> Result<Value, BoxError> {
        (self)(args)
    }
}

/// A shared, type-erased [`Callable`].
///
/// Cloning is O(1). Two `Function`s are equal only when they share the same
/// underlying callable.
#[derive(Clone)]
pub struct Function(Arc<dyn Callable>);

impl Function {
    /// Wrap a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, BoxError> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Wrap any [`Callable`].
    pub fn from_callable<C: Callable>(callable: C) -> Self {
        Self(Arc::new(callable))
    }

    /// Invoke the function.
    pub fn call(&self, args: &[Value]) -> Result<Value, BoxError> {
        self.0.call(args)
    }

    /// Reported arity, if the callable declares one.
    pub fn arity(&self) -> Option<usize> {
        self.0.arity()
    }

    /// Returns `true` if both handles point to the same callable.
    pub fn ptr_eq(&self, other: &Function) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.arity() {
            Some(arity) => write!(f, "Function(arity = {arity})"),
            None => f.write_str("Function"),
        }
    }
}
