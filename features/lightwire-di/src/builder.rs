use std::collections::HashMap;

use crate::{
    container::DiContainer,
    dependency_graph::ConstructionPlan,
    errors::InitError,
    factories::{DynFactory, InstanceFactory},
    graph::ComponentGraph,
    initiator::DiInitiator,
};

//////////////////////////////////////////////////////////////////////
///
/// Building a container happens in three steps.
/// 1. Factories are registered for every type identifier the description may use
/// 2. The graph is ordered for a root component
/// 3. The initiator constructs the components in that order
///
/// The builder can be used for several graphs, it is not consumed.
pub struct DiBuilder {
    /// Registered factories by type identifier
    pub(crate) registered_factories: HashMap<String, Box<dyn DynFactory>>,
    /// Type identifiers registered more than once
    duplicates: Vec<String>,
}
impl Default for DiBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DiBuilder {
    pub fn new() -> Self {
        DiBuilder {
            registered_factories: HashMap::new(),
            duplicates: Vec::new(),
        }
    }
}
impl DiBuilder {
    pub fn add_factory<Factory: InstanceFactory + 'static>(
        mut self,
        type_id: impl Into<String>,
        factory: Factory,
    ) -> Self {
        let type_id = type_id.into();
        if self.registered_factories.contains_key(&type_id) {
            self.duplicates.push(type_id);
            return self;
        }

        self.registered_factories.insert(type_id, Box::new(factory));
        self
    }

    pub fn has_factory(&self, type_id: &str) -> bool {
        self.registered_factories.contains_key(type_id)
    }

    /// Orders the graph for `root` and constructs everything reachable from it
    pub fn build(&self, graph: &ComponentGraph, root: &str) -> Result<DiContainer, InitError> {
        self.check()?;
        let plan = ConstructionPlan::compute(graph, root)?;
        self.build_plan(graph, &plan)
    }

    /// Constructs the components of an already computed plan
    pub fn build_plan(
        &self,
        graph: &ComponentGraph,
        plan: &ConstructionPlan,
    ) -> Result<DiContainer, InitError> {
        self.check()?;
        DiInitiator::new(self, graph).initiate(plan)
    }

    fn check(&self) -> Result<(), InitError> {
        match self.duplicates.first() {
            Some(type_id) => Err(InitError::DuplicateFactory(type_id.clone())),
            None => Ok(()),
        }
    }
}
