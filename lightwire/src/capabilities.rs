use std::{fmt, sync::Arc};

use lightwire_di::{Arguments, DiBuilder, InstanceFactory};

use crate::{routing::Request, DynError, Instance};

/// Capability of the application starting point
pub trait RequestHandler: Send + Sync {
    fn process(&self, request: &Request) -> Result<(), DynError>;
}

/// Capability of components run in command mode
pub trait Command: Send + Sync {
    fn execute(&self) -> CommandResult;
}

/// Outcome a command reports about itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    status: bool,
    message: String,
}

impl CommandResult {
    pub fn new(status: bool, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(true, message)
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(false, message)
    }

    pub fn status(&self) -> bool {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CommandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = if self.status { "succeeded" } else { "failed" };
        write!(f, "Command {outcome} with message {}", self.message)
    }
}

/// Exposes the product of the wrapped factory as a [RequestHandler]
pub struct AsRequestHandler<F>(pub F);

impl<F> InstanceFactory for AsRequestHandler<F>
where
    F: InstanceFactory,
    F::Provides: RequestHandler,
{
    type Provides = F::Provides;

    fn construct(&self, args: &Arguments) -> Result<Self::Provides, impl Into<DynError>> {
        InstanceFactory::construct(&self.0, args)
    }

    fn into_instance(product: Self::Provides) -> Instance {
        let product = Arc::new(product);
        Instance::from_arc(product.clone()).with_view::<dyn RequestHandler>(product)
    }
}

/// Exposes the product of the wrapped factory as a [Command]
pub struct AsCommand<F>(pub F);

impl<F> InstanceFactory for AsCommand<F>
where
    F: InstanceFactory,
    F::Provides: Command,
{
    type Provides = F::Provides;

    fn construct(&self, args: &Arguments) -> Result<Self::Provides, impl Into<DynError>> {
        InstanceFactory::construct(&self.0, args)
    }

    fn into_instance(product: Self::Provides) -> Instance {
        let product = Arc::new(product);
        Instance::from_arc(product.clone()).with_view::<dyn Command>(product)
    }
}

/// Registration helpers for capability exposing factories
pub trait CapabilityFactories {
    /// Registers a factory whose product handles requests
    fn add_handler<F>(self, type_id: impl Into<String>, factory: F) -> Self
    where
        F: InstanceFactory + 'static,
        F::Provides: RequestHandler;

    /// Registers a factory whose product is a command
    fn add_command<F>(self, type_id: impl Into<String>, factory: F) -> Self
    where
        F: InstanceFactory + 'static,
        F::Provides: Command;
}

impl CapabilityFactories for DiBuilder {
    fn add_handler<F>(self, type_id: impl Into<String>, factory: F) -> Self
    where
        F: InstanceFactory + 'static,
        F::Provides: RequestHandler,
    {
        self.add_factory(type_id, AsRequestHandler(factory))
    }

    fn add_command<F>(self, type_id: impl Into<String>, factory: F) -> Self
    where
        F: InstanceFactory + 'static,
        F::Provides: Command,
    {
        self.add_factory(type_id, AsCommand(factory))
    }
}
