use crate::{
    errors::ArgumentError,
    types::{Instance, Scalar},
};

pub mod arc;
pub mod scalar;

/// A constructor argument after references have been replaced by instances
#[derive(Debug, Clone)]
pub enum ResolvedArgument {
    Literal(Scalar),
    Instance(Instance),
}

/// Converts a resolved argument into a typed value
pub trait Resolver: Sized {
    fn resolve(argument: &ResolvedArgument, index: usize) -> Result<Self, ArgumentError>;

    /// Called when the argument list is shorter than `index`
    fn resolve_missing(index: usize) -> Result<Self, ArgumentError> {
        Err(ArgumentError::Missing(index))
    }
}

/// The arguments handed to a factory, in declaration order
#[derive(Debug, Clone, Default)]
pub struct Arguments {
    values: Vec<ResolvedArgument>,
}

impl Arguments {
    pub fn new(values: Vec<ResolvedArgument>) -> Self {
        Self { values }
    }

    /// Resolves the argument at `index`
    pub fn get<T: Resolver>(&self, index: usize) -> Result<T, ArgumentError> {
        match self.values.get(index) {
            Some(argument) => T::resolve(argument, index),
            None => T::resolve_missing(index),
        }
    }

    /// Resolves the argument at `index`, `None` if the list is shorter
    pub fn optional<T: Resolver>(&self, index: usize) -> Result<Option<T>, ArgumentError> {
        self.get::<Option<T>>(index)
    }

    pub fn raw(&self, index: usize) -> Option<&ResolvedArgument> {
        self.values.get(index)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<Resolvable: Resolver> Resolver for Option<Resolvable> {
    fn resolve(argument: &ResolvedArgument, index: usize) -> Result<Self, ArgumentError> {
        Resolvable::resolve(argument, index).map(Some)
    }

    fn resolve_missing(_index: usize) -> Result<Self, ArgumentError> {
        Ok(None)
    }
}
