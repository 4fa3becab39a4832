use std::sync::Arc;

use thiserror::Error;

use crate::types::DynError;

/// Errors while reading the dependency description
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Dependency description is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Argument {index} of '{component}' has to be a string, number or bool")]
    NonScalarArgument { component: String, index: usize },
}

/// Placeholders the dependency description is required to contain
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlaceholderError {
    #[error(
        "Could not find {0} placeholder in the dependency description, \
         set it as a dependency of the component responsible for handling it"
    )]
    MissingRoutePlaceholder(&'static str),
    #[error(
        "Could not find the application starting point '{0}' in the dependency description, \
         specify it as one of the dependencies"
    )]
    MissingStartingPoint(String),
}

/// Problems found while ordering the graph
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Unrecognized dependency '{0}'")]
    MissingRoot(String),
    #[error("'{required_by}' needs '{dependency}' but it is missing")]
    MissingDependency {
        dependency: String,
        required_by: String,
    },
    #[error(
        "Too many dependencies or danger of infinite recurrence, reached {limit} visits{}",
        describe_chain(.cycle, .chain)
    )]
    VisitLimitExceeded {
        limit: usize,
        /// Names on the visit stack when the limit was hit, root first
        chain: Vec<String>,
        /// The repeating part of the chain, if one was found
        cycle: Option<Vec<String>>,
    },
}

fn describe_chain(cycle: &Option<Vec<String>>, chain: &[String]) -> String {
    match cycle {
        Some(cycle) => format!(" - circular reference {}", cycle.join(" -> ")),
        None => match chain.last() {
            Some(last) => format!(" while visiting '{last}'"),
            None => String::new(),
        },
    }
}

/// Errors when extracting a typed constructor argument
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArgumentError {
    #[error("Argument {0} is missing")]
    Missing(usize),
    #[error("Argument {index} has to be a component reference")]
    ExpectedInstance { index: usize },
    #[error("Argument {index} has to be a {expected} literal, got {actual}")]
    ExpectedLiteral {
        index: usize,
        expected: &'static str,
        actual: &'static str,
    },
    #[error("Failed to downcast argument {index}, required: '{required_type}' actual: '{actual_type}'")]
    DowncastFailed {
        index: usize,
        required_type: &'static str,
        actual_type: &'static str,
    },
}

/// Errors when requiring a component from the container
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RequireError {
    /// The component was not constructed
    #[error("The component '{0}' is not known.")]
    ComponentMissing(String),

    #[error("Failed to downcast '{component}', required: '{required_type}' actual: '{actual_type}'")]
    DowncastFailed {
        component: String,
        required_type: &'static str,
        actual_type: &'static str,
    },
}

/// Errors while constructing the components
#[derive(Error, Debug, Clone)]
pub enum InitError {
    /// There are issues with the dependency graph
    #[error(transparent)]
    DependencyGraphError(#[from] GraphError),

    /// Two factories claim the same type identifier
    #[error("A factory for type '{0}' has been registered twice")]
    DuplicateFactory(String),

    /// No factory knows the component's type identifier
    #[error("No factory registered for type '{type_id}' of component '{component}'")]
    UnknownType { component: String, type_id: String },

    /// A referenced component was not built before its dependent
    #[error("'{component}' was constructed before its dependency '{dependency}'")]
    ConstructionOrder {
        component: String,
        dependency: String,
    },

    /// The plan names a component the graph does not describe
    #[error("'{component}' is part of the construction plan but missing from the graph")]
    InconsistentPlan { component: String },

    /// A Factory failed to build
    #[error("Factory for '{component}' ({type_id}) failed - error: {error}")]
    FactoryFailed {
        component: String,
        type_id: String,
        error: Arc<DynError>,
    },
}
