use std::{collections::HashMap, sync::Arc};

use crate::{
    builder::DiBuilder,
    container::DiContainer,
    dependency_graph::ConstructionPlan,
    errors::InitError,
    graph::{Argument, ComponentGraph, ComponentSpec},
    resolver::{Arguments, ResolvedArgument},
    types::Instance,
};

/// Constructs the components of a plan
pub(crate) struct DiInitiator<'a> {
    builder: &'a DiBuilder,
    graph: &'a ComponentGraph,

    /// All produced instances by component name
    instances: HashMap<String, Instance>,
}
impl<'a> DiInitiator<'a> {
    pub(crate) fn new(builder: &'a DiBuilder, graph: &'a ComponentGraph) -> Self {
        DiInitiator {
            builder,
            graph,
            instances: HashMap::new(),
        }
    }

    /// Walks the plan backwards, so every dependency is built before its dependents
    pub(crate) fn initiate(mut self, plan: &ConstructionPlan) -> Result<DiContainer, InitError> {
        tracing::debug!("Initializing {} components", plan.len());

        for name in plan.construction_order() {
            // Reached through several paths, already built
            if self.instances.contains_key(name) {
                continue;
            }

            let spec = self
                .graph
                .get(name)
                .ok_or_else(|| InitError::InconsistentPlan {
                    component: name.to_string(),
                })?;
            let instance = self.construct(spec)?;

            tracing::debug!("Constructed '{}' as {}", name, instance.info.type_name);
            self.instances.insert(name.to_string(), instance);
        }

        tracing::debug!("All {} components constructed", self.instances.len());
        Ok(DiContainer::new(self.instances))
    }

    fn construct(&self, spec: &ComponentSpec) -> Result<Instance, InitError> {
        let factory = self
            .builder
            .registered_factories
            .get(&spec.type_id)
            .ok_or_else(|| InitError::UnknownType {
                component: spec.name.clone(),
                type_id: spec.type_id.clone(),
            })?;

        let arguments = spec
            .arguments
            .iter()
            .map(|argument| self.resolve(spec, argument))
            .collect::<Result<Vec<_>, _>>()?;

        factory
            .construct(&Arguments::new(arguments))
            .map_err(|error| {
                tracing::error!("Factory for '{}' failed: {}", spec.name, error);
                InitError::FactoryFailed {
                    component: spec.name.clone(),
                    type_id: spec.type_id.clone(),
                    error: Arc::new(error),
                }
            })
    }

    fn resolve(
        &self,
        spec: &ComponentSpec,
        argument: &Argument,
    ) -> Result<ResolvedArgument, InitError> {
        match argument {
            Argument::Literal(value) => Ok(ResolvedArgument::Literal(value.clone())),
            Argument::Reference(target) => self
                .instances
                .get(target)
                .cloned()
                .map(ResolvedArgument::Instance)
                .ok_or_else(|| InitError::ConstructionOrder {
                    component: spec.name.clone(),
                    dependency: target.clone(),
                }),
        }
    }
}
