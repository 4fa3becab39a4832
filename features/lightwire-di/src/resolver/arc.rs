use std::{any::type_name, sync::Arc};

use crate::{
    errors::ArgumentError,
    resolver::{ResolvedArgument, Resolver},
    types::{Injectable, Instance},
};

impl<T: Injectable> Resolver for Arc<T> {
    fn resolve(argument: &ResolvedArgument, index: usize) -> Result<Self, ArgumentError> {
        let ResolvedArgument::Instance(instance) = argument else {
            return Err(ArgumentError::ExpectedInstance { index });
        };

        instance
            .downcast::<T>()
            .map_err(|actual_type| ArgumentError::DowncastFailed {
                index,
                required_type: type_name::<T>(),
                actual_type,
            })
    }
}

impl Resolver for Instance {
    fn resolve(argument: &ResolvedArgument, index: usize) -> Result<Self, ArgumentError> {
        match argument {
            ResolvedArgument::Instance(instance) => Ok(instance.clone()),
            ResolvedArgument::Literal(_) => Err(ArgumentError::ExpectedInstance { index }),
        }
    }
}
