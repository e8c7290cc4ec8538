//! # Generic functions
//!
//! A [`GenericFunction`] is a single callable identity backed by an ordered
//! table of pattern-guarded methods.
//!
//! # Dispatch Order
//!
//! Methods are tried from the most recently registered to the oldest. The
//! first one whose pattern matches the argument list wins; there is no other
//! precedence rule.
//!
//! # Recursion
//!
//! A method that calls its own generic function should capture a
//! [`WeakGenericFunction`]. A strong clone stored in the table keeps the table
//! alive after its last owner is gone.
//!
//! ```rust,ignore
//! let fibonacci = GenericFunction::new();
//! let recurse = fibonacci.downgrade();
//! fibonacci.method([wildcard()], Function::new(move |args| {
//!     let n = i64::try_from(&args[0])?;
//!     let a = i64::try_from(&recurse.call(&[Value::Int(n - 1)])?)?;
//!     let b = i64::try_from(&recurse.call(&[Value::Int(n - 2)])?)?;
//!     Ok(Value::Int(a + b))
//! }));
//! fibonacci.method([1], 1);
//! fibonacci.method([0], 0);
//! assert_eq!(fibonacci.call(&[Value::Int(13)])?, Value::Int(233));
//! ```

use super::table::{Method, MethodTable};
use crate::{curry::Curried, options::Options};
use genfn_core::{BoxError, Callable, DispatchError, Function, Pattern, Value};
use std::{
    fmt,
    num::NonZeroUsize,
    sync::{Arc, Weak},
};

/// Immediate, arity-agnostic dispatch over an argument list.
///
/// This is the seam the curry adapter forwards to once it has collected
/// enough arguments.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot dispatch argument lists",
    label = "missing `Dispatch` implementation",
    note = "Implement `Dispatch` to receive the accumulated arguments of a curried call."
)]
pub trait Dispatch: Send + Sync + 'static {
    /// Dispatch on the full argument list.
    fn dispatch(&self, args: &[Value]) -> Result<Value, DispatchError>;
}

struct Inner {
    name: Option<String>,
    curry: Option<NonZeroUsize>,
    methods: MethodTable,
}

/// A generic function.
///
/// Cloning yields another handle to the same method table.
#[derive(Clone)]
pub struct GenericFunction {
    inner: Arc<Inner>,
}

impl GenericFunction {
    /// Create an unnamed, uncurried generic function with no methods.
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    /// Create a generic function from options.
    pub fn with_options(options: Options) -> Self {
        Self {
            inner: Arc::new(Inner {
                name: options.name,
                curry: options.curry,
                methods: MethodTable::new(),
            }),
        }
    }

    /// Start building a generic function.
    pub fn builder() -> crate::options::GenericFunctionBuilder {
        crate::options::GenericFunctionBuilder::new()
    }

    /// Name used in lookup-failure messages.
    pub fn name(&self) -> Option<&str> {
        self.inner.name.as_deref()
    }

    /// Curry arity, if the function was created with one.
    pub fn arity(&self) -> Option<usize> {
        self.inner.curry.map(NonZeroUsize::get)
    }

    /// Number of registered methods.
    pub fn len(&self) -> usize {
        self.inner.methods.len()
    }

    /// Returns `true` if no method has been registered.
    pub fn is_empty(&self) -> bool {
        self.inner.methods.is_empty()
    }

    /// Register a method.
    ///
    /// The new method takes priority over every method registered before it.
    /// The pattern is not validated; a malformed pattern simply never matches.
    /// A [`Value::Function`] implementation is invoked with the call's
    /// arguments, any other value is returned verbatim.
    pub fn method(&self, pattern: impl Into<Pattern>, implementation: impl Into<Value>) {
        let count = self
            .inner
            .methods
            .push(Method::new(pattern.into(), implementation.into()));
        #[cfg(feature = "tracing")]
        {
            tracing::trace!(generic = ?self.name(), methods = count, "method registered");
        }
        #[cfg(not(feature = "tracing"))]
        {
            let _ = count;
        }
    }

    /// Invoke the generic function.
    ///
    /// With a curry arity, fewer arguments than the arity yield a
    /// partial-application [`Value::Function`] instead of dispatching.
    pub fn call(&self, args: &[Value]) -> Result<Value, DispatchError> {
        match self.inner.curry {
            Some(arity) => Curried::new(arity.get(), self.clone()).apply(args),
            None => self.dispatch(args),
        }
    }

    /// Dispatch immediately, ignoring any curry arity.
    pub fn dispatch(&self, args: &[Value]) -> Result<Value, DispatchError> {
        let subject = Value::list(args.iter().cloned());
        match self.inner.methods.find(&subject) {
            Some((index, method)) => {
                #[cfg(feature = "tracing")]
                {
                    tracing::trace!(
                        generic = ?self.name(),
                        method = index,
                        arguments = args.len(),
                        "method selected"
                    );
                }
                #[cfg(not(feature = "tracing"))]
                {
                    let _ = index;
                }
                method.invoke(args)
            }
            None => {
                #[cfg(feature = "tracing")]
                {
                    tracing::debug!(
                        generic = ?self.name(),
                        arguments = args.len(),
                        "no method matches"
                    );
                }
                Err(DispatchError::NoMatch {
                    arguments: args.len(),
                    name: self.inner.name.clone(),
                })
            }
        }
    }

    /// This generic function as a [`Function`] value.
    pub fn to_function(&self) -> Function {
        Function::from_callable(self.clone())
    }

    /// Returns `true` if both handles share one method table.
    pub fn ptr_eq(&self, other: &GenericFunction) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// A handle that does not keep the method table alive.
    pub fn downgrade(&self) -> WeakGenericFunction {
        WeakGenericFunction {
            inner: Arc::downgrade(&self.inner),
            name: self.inner.name.clone(),
        }
    }
}

impl Default for GenericFunction {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GenericFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenericFunction")
            .field("name", &self.name())
            .field("arity", &self.arity())
            .field("methods", &self.len())
            .finish()
    }
}

impl Dispatch for GenericFunction {
    fn dispatch(&self, args: &[Value]) -> Result<Value, DispatchError> {
        GenericFunction::dispatch(self, args)
    }
}

impl Callable for GenericFunction {
    fn call(&self, args: &[Value]) -> Result<Value, BoxError> {
        GenericFunction::call(self, args).map_err(BoxError::from)
    }

    fn arity(&self) -> Option<usize> {
        GenericFunction::arity(self)
    }
}

impl From<GenericFunction> for Function {
    fn from(generic: GenericFunction) -> Self {
        Function::from_callable(generic)
    }
}

impl From<GenericFunction> for Value {
    fn from(generic: GenericFunction) -> Self {
        Value::Function(generic.into())
    }
}

// ============================================================================
// Weak handle
// ============================================================================

/// A non-owning handle to a [`GenericFunction`].
///
/// Calling it after every owning handle has been dropped fails with
/// [`DispatchError::Released`].
#[derive(Clone)]
pub struct WeakGenericFunction {
    inner: Weak<Inner>,
    name: Option<String>,
}

impl WeakGenericFunction {
    /// The generic function, if an owning handle still exists.
    pub fn upgrade(&self) -> Option<GenericFunction> {
        self.inner.upgrade().map(|inner| GenericFunction { inner })
    }

    /// Invoke the generic function if it is still alive.
    pub fn call(&self, args: &[Value]) -> Result<Value, DispatchError> {
        match self.upgrade() {
            Some(generic) => generic.call(args),
            None => Err(DispatchError::Released {
                name: self.name.clone(),
            }),
        }
    }
}

impl fmt::Debug for WeakGenericFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakGenericFunction")
            .field("name", &self.name)
            .field("alive", &(self.inner.strong_count() > 0))
            .finish()
    }
}

impl Callable for WeakGenericFunction {
    fn call(&self, args: &[Value]) -> Result<Value, BoxError> {
        WeakGenericFunction::call(self, args).map_err(BoxError::from)
    }

    fn arity(&self) -> Option<usize> {
        self.upgrade().and_then(|generic| generic.arity())
    }
}

impl From<WeakGenericFunction> for Function {
    fn from(weak: WeakGenericFunction) -> Self {
        Function::from_callable(weak)
    }
}

impl From<WeakGenericFunction> for Value {
    fn from(weak: WeakGenericFunction) -> Self {
        Value::Function(weak.into())
    }
}
