//! Fixed-arity partial application in front of a [`Dispatch`] target.

use crate::dispatch::Dispatch;
use genfn_core::{BoxError, Callable, DispatchError, Function, Value};
use std::{fmt, sync::Arc};

/// An argument accumulator of fixed arity.
///
/// Each application appends its arguments to the ones already bound. Below
/// the arity a new adapter is returned as a [`Value::Function`]; at or above
/// it the whole list is forwarded to the target.
pub struct Curried<D> {
    arity: usize,
    bound: Arc<[Value]>,
    target: D,
}

impl<D: Dispatch + Clone> Curried<D> {
    /// An adapter with no bound arguments.
    pub fn new(arity: usize, target: D) -> Self {
        Self::with_bound(arity, Vec::<Value>::new(), target)
    }

    /// An adapter with `bound` already captured.
    pub fn with_bound(arity: usize, bound: impl Into<Arc<[Value]>>, target: D) -> Self {
        Self {
            arity,
            bound: bound.into(),
            target,
        }
    }

    /// Arguments captured so far.
    pub fn bound(&self) -> &[Value] {
        &self.bound
    }

    /// Arguments still needed before the target is invoked.
    pub fn remaining(&self) -> usize {
        self.arity.saturating_sub(self.bound.len())
    }

    /// Apply more arguments.
    pub fn apply(&self, args: &[Value]) -> Result<Value, DispatchError> {
        let mut all = Vec::with_capacity(self.bound.len() + args.len());
        all.extend_from_slice(&self.bound);
        all.extend_from_slice(args);

        if all.len() < self.arity {
            #[cfg(feature = "tracing")]
            {
                tracing::trace!(bound = all.len(), arity = self.arity, "deferring curried call");
            }
            let next = Curried::with_bound(self.arity, all, self.target.clone());
            return Ok(Value::Function(Function::from_callable(next)));
        }
        self.target.dispatch(&all)
    }
}

impl<D: Dispatch + Clone> Callable for Curried<D> {
    fn call(&self, args: &[Value]) -> Result<Value, BoxError> {
        self.apply(args).map_err(BoxError::from)
    }

    fn arity(&self) -> Option<usize> {
        Some(self.arity)
    }
}

impl<D: Clone> Clone for Curried<D> {
    fn clone(&self) -> Self {
        Self {
            arity: self.arity,
            bound: self.bound.clone(),
            target: self.target.clone(),
        }
    }
}

impl<D> fmt::Debug for Curried<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Curried")
            .field("arity", &self.arity)
            .field("bound", &self.bound)
            .finish_non_exhaustive()
    }
}
