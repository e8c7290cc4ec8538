//! Configuration for creating generic functions.

use crate::dispatch::GenericFunction;
use std::num::NonZeroUsize;

/// Options recognized when creating a [`GenericFunction`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Name quoted in lookup-failure messages.
    pub name: Option<String>,
    /// Fixed arity for automatic partial application.
    pub curry: Option<NonZeroUsize>,
}

impl Options {
    /// Set the name. An empty name leaves the function unnamed.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into()).filter(|name| !name.is_empty());
        self
    }

    /// Set the curry arity. Zero disables currying.
    pub fn curry(mut self, arity: usize) -> Self {
        self.curry = NonZeroUsize::new(arity);
        self
    }
}

/// Builder for constructing a [`GenericFunction`].
#[derive(Debug, Default)]
pub struct GenericFunctionBuilder {
    options: Options,
}

impl GenericFunctionBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Name the generic function.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.options = self.options.name(name);
        self
    }

    /// Curry the generic function to `arity` arguments.
    pub fn curry(mut self, arity: usize) -> Self {
        self.options = self.options.curry(arity);
        self
    }

    /// Build the generic function.
    pub fn build(self) -> GenericFunction {
        GenericFunction::with_options(self.options)
    }
}
