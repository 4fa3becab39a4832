use std::collections::HashMap;

use crate::{
    errors::PlaceholderError,
    graph::{Argument, ComponentGraph, ComponentSpec, REFERENCE_MARKER},
    types::Scalar,
};

/// Replaced by a reference to the controller selected by routing
pub const ROUTED_CONTROLLER_PLACEHOLDER: &str = "%routedController%";
/// Replaced by the action selected by routing
pub const ROUTED_ACTION_PLACEHOLDER: &str = "%routedAction%";

/// Token a parameter is referred to by in the dependency description
pub fn placeholder_token(parameter: &str) -> String {
    format!("%{parameter}%")
}

/// Checks the raw dependency description can be wired at all
///
/// It has to mention both routing placeholders and the application starting point.
pub fn check_required_placeholders(
    description: &str,
    starting_point: &str,
) -> Result<(), PlaceholderError> {
    for placeholder in [ROUTED_CONTROLLER_PLACEHOLDER, ROUTED_ACTION_PLACEHOLDER] {
        if !description.contains(placeholder) {
            return Err(PlaceholderError::MissingRoutePlaceholder(placeholder));
        }
    }

    if starting_point.is_empty() || !description.contains(starting_point) {
        return Err(PlaceholderError::MissingStartingPoint(
            starting_point.to_string(),
        ));
    }

    Ok(())
}

/// Rewrites placeholder arguments into concrete values
///
/// Only arguments whose whole text equals a known token are replaced,
/// anything else is kept as is.
#[derive(Debug, Clone, Default)]
pub struct Substitutor {
    replacements: HashMap<String, Argument>,
}

impl Substitutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the values selected by routing
    ///
    /// The controller becomes a reference, so it is built like any other component.
    pub fn with_route(mut self, controller: &str, action: &str) -> Self {
        self.replacements.insert(
            ROUTED_CONTROLLER_PLACEHOLDER.to_string(),
            Argument::Reference(controller.trim_matches(REFERENCE_MARKER).to_string()),
        );
        self.replacements.insert(
            ROUTED_ACTION_PLACEHOLDER.to_string(),
            Argument::classify(Scalar::String(action.to_string())),
        );
        self
    }

    /// Registers parameters as `%name%` tokens.
    ///
    /// A parameter named like a routing placeholder overrides the routed value.
    pub fn with_parameters<'a>(
        mut self,
        parameters: impl IntoIterator<Item = (&'a str, &'a Scalar)>,
    ) -> Self {
        for (name, value) in parameters {
            self.replacements
                .insert(placeholder_token(name), Argument::classify(value.clone()));
        }
        self
    }

    /// Produces the concrete graph, leaving `graph` untouched
    pub fn apply(&self, graph: &ComponentGraph) -> ComponentGraph {
        let mut replaced = 0_usize;
        let concrete: ComponentGraph = graph
            .components()
            .map(|spec| ComponentSpec {
                name: spec.name.clone(),
                type_id: spec.type_id.clone(),
                arguments: spec
                    .arguments
                    .iter()
                    .map(|argument| match self.replacement_for(argument) {
                        Some(replacement) => {
                            replaced += 1;
                            replacement.clone()
                        }
                        None => argument.clone(),
                    })
                    .collect(),
            })
            .collect();

        tracing::debug!("Replaced {replaced} placeholder arguments");
        concrete
    }

    fn replacement_for(&self, argument: &Argument) -> Option<&Argument> {
        match argument {
            Argument::Literal(Scalar::String(token)) => self.replacements.get(token),
            _ => None,
        }
    }
}
