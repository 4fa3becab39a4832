use std::{path::PathBuf, sync::Arc};

use lightwire_config::{ConfigProvider, Configuration};
use lightwire_di::{
    placeholders::check_required_placeholders, ComponentGraph, DiBuilder, DiContainer,
    GraphError, InitError, Substitutor,
};

use crate::{
    capabilities::{Command, CommandResult, RequestHandler},
    errors::BootError,
    routing::{Request, Router},
};

/// Wires an application from its configuration and runs it
///
/// A project runs in one of two modes:
/// - application mode routes a request and hands it to the starting point
/// - command mode constructs a single named command and executes it
///
/// Both modes work on a freshly substituted graph, nothing is shared between runs.
pub struct Project {
    configuration: Configuration,
    builder: DiBuilder,
}

impl Project {
    pub fn new(configuration: Configuration, builder: DiBuilder) -> Self {
        Self {
            configuration,
            builder,
        }
    }

    /// Loads the configuration files from `dir`
    pub fn load(dir: impl Into<PathBuf>, builder: DiBuilder) -> Result<Self, BootError> {
        let configuration = ConfigProvider::new(dir).load()?;
        Ok(Self::new(configuration, builder))
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn builder(&self) -> &DiBuilder {
        &self.builder
    }

    /// Runs in application mode
    ///
    /// Routing happens before anything is constructed.
    /// The starting point has to handle requests, otherwise nothing is dispatched.
    pub fn run(&self, router: &impl Router) -> Result<(), BootError> {
        let request = router.build_request().map_err(BootError::Routing)?;
        tracing::info!(
            controller = request.controller(),
            action = request.action(),
            "Routed request"
        );

        let starting_point = self.configuration.application_starting_point();
        let container = self.container(Some(&request), starting_point)?;

        let handler = container
            .view::<dyn RequestHandler>(starting_point)?
            .ok_or_else(|| BootError::Capability {
                component: starting_point.to_string(),
                capability: "request handling",
            })?;

        handler.process(&request).map_err(BootError::Handler)
    }

    /// Runs in command mode and returns the status line of the command
    pub fn run_command(&self, name: &str) -> Result<String, BootError> {
        Ok(self.execute_command(name)?.to_string())
    }

    /// Runs in command mode and returns what the command reported
    pub fn execute_command(&self, name: &str) -> Result<CommandResult, BootError> {
        let command = self.command(name)?;

        let result = command.execute();
        tracing::info!(
            command = name,
            status = result.status(),
            message = result.message(),
            "Command finished"
        );
        Ok(result)
    }

    /// Constructs the named command without executing it
    pub fn command(&self, name: &str) -> Result<Arc<dyn Command>, BootError> {
        let graph = self.graph(None)?;

        let spec = graph
            .get(name)
            .ok_or_else(|| GraphError::MissingRoot(name.to_string()))?;
        if !self.builder.has_factory(&spec.type_id) {
            return Err(BootError::Construction(InitError::UnknownType {
                component: name.to_string(),
                type_id: spec.type_id.clone(),
            }));
        }

        let container = self.builder.build(&graph, name)?;
        container
            .view::<dyn Command>(name)?
            .ok_or_else(|| BootError::Capability {
                component: name.to_string(),
                capability: "command execution",
            })
    }

    /// Substitutes the description for the given route
    ///
    /// Without a route the routing placeholders stay as they are.
    pub fn graph(&self, route: Option<&Request>) -> Result<ComponentGraph, BootError> {
        let description = self.configuration.dependencies();
        check_required_placeholders(description, self.configuration.application_starting_point())?;

        let raw = ComponentGraph::from_json(description)?;

        let substitutor = match route {
            Some(request) => Substitutor::new().with_route(request.controller(), request.action()),
            None => Substitutor::new(),
        };
        let concrete = substitutor
            .with_parameters(self.configuration.parameters().iter())
            .apply(&raw);

        tracing::debug!("Substituted {} components", concrete.len());
        Ok(concrete)
    }

    fn container(&self, route: Option<&Request>, root: &str) -> Result<DiContainer, BootError> {
        let graph = self.graph(route)?;
        Ok(self.builder.build(&graph, root)?)
    }
}
