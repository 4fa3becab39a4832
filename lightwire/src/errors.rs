use lightwire_config::ConfigError;
use lightwire_di::{DynError, GraphError, InitError, ParseError, PlaceholderError, RequireError};
use thiserror::Error;

/// Everything that can abort a run
#[derive(Error, Debug)]
pub enum BootError {
    #[error(transparent)]
    Configuration(#[from] ConfigError),

    #[error(transparent)]
    Placeholder(#[from] PlaceholderError),

    #[error(transparent)]
    Description(#[from] ParseError),

    #[error(transparent)]
    Graph(GraphError),

    #[error(transparent)]
    Construction(InitError),

    /// The root component lacks the capability the mode needs
    #[error("Component '{component}' has to implement {capability}")]
    Capability {
        component: String,
        capability: &'static str,
    },

    #[error("Could not route the request: {0}")]
    Routing(DynError),

    #[error("Request handling failed: {0}")]
    Handler(DynError),

    #[error(transparent)]
    Require(#[from] RequireError),

    #[error("Could not initialize logging: {0}")]
    Logging(DynError),
}

impl From<InitError> for BootError {
    fn from(error: InitError) -> Self {
        match error {
            InitError::DependencyGraphError(error) => BootError::Graph(error),
            error => BootError::Construction(error),
        }
    }
}

impl From<GraphError> for BootError {
    fn from(error: GraphError) -> Self {
        BootError::Graph(error)
    }
}

impl BootError {
    /// Category of the error, used when reporting it
    pub fn kind(&self) -> &'static str {
        match self {
            BootError::Configuration(_) | BootError::Placeholder(_) | BootError::Description(_) => {
                "configuration"
            }
            BootError::Graph(_) => "graph",
            BootError::Capability { .. } => "capability",
            BootError::Construction(_) | BootError::Require(_) => "construction",
            BootError::Routing(_) => "routing",
            BootError::Handler(_) => "handler",
            BootError::Logging(_) => "logging",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case::inconsistent_plan(
        InitError::InconsistentPlan { component: "store".to_string() },
        "construction"
    )]
    #[case::construction_order(
        InitError::ConstructionOrder { component: "users".to_string(), dependency: "store".to_string() },
        "construction"
    )]
    #[case::graph(
        InitError::DependencyGraphError(GraphError::MissingRoot("app".to_string())),
        "graph"
    )]
    fn init_errors_keep_their_category(#[case] error: InitError, #[case] expected: &str) {
        // Act
        let boot: BootError = error.into();

        // Assert
        assert_eq!(boot.kind(), expected);
    }
}
