use crate::{
    resolver::Arguments,
    types::{DynError, Injectable, Instance, TypeInfo},
};

/// A Factory providing instances of a given type
///
/// Implemented for any `Fn(&Arguments) -> Result<T, E>`, so most
/// registrations are plain closures:
///
/// ```rust
/// # use lightwire_di::{Arguments, DiBuilder, DynError};
/// struct Greeter { name: String }
///
/// let builder = DiBuilder::new().add_factory("Greeter", |args: &Arguments| {
///     Ok::<_, DynError>(Greeter { name: args.get(0)? })
/// });
/// assert!(builder.has_factory("Greeter"));
/// ```
pub trait InstanceFactory: Send + Sync {
    type Provides: Injectable;

    /// Returns the typeinfo about the factory's provided type
    fn supplies() -> TypeInfo {
        TypeInfo::of::<Self::Provides>()
    }

    /// Constructs a new instance from fully resolved arguments
    fn construct(&self, args: &Arguments) -> Result<Self::Provides, impl Into<DynError>>;

    /// Wraps the product into an [Instance]
    ///
    /// Override to expose capability views of the product.
    fn into_instance(product: Self::Provides) -> Instance {
        Instance::new(product)
    }
}

impl<T, E, F> InstanceFactory for F
where
    T: Injectable,
    E: Into<DynError>,
    F: Fn(&Arguments) -> Result<T, E> + Send + Sync,
{
    type Provides = T;

    #[allow(refining_impl_trait)]
    fn construct(&self, args: &Arguments) -> Result<T, E> {
        self(args)
    }
}

/// Wrapper Trait for factories, providing instances of Any
pub trait DynFactory: Send + Sync {
    fn supplies(&self) -> TypeInfo;

    /// Constructs a new instance of the factory's provided type
    fn construct(&self, args: &Arguments) -> Result<Instance, DynError>;
}
// Impl DynFactory for any InstanceFactory
impl<T: Injectable, SpecificFactory: InstanceFactory<Provides = T>> DynFactory for SpecificFactory {
    fn supplies(&self) -> TypeInfo {
        SpecificFactory::supplies()
    }

    fn construct(&self, args: &Arguments) -> Result<Instance, DynError> {
        // Forward the call to the specific implementation
        InstanceFactory::construct(self, args)
            .map(SpecificFactory::into_instance)
            .map_err(|e| e.into())
    }
}
