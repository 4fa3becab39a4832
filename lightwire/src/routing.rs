use crate::DynError;

/// The request selected by routing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    controller: String,
    action: String,
}

impl Request {
    pub fn new(controller: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            controller: controller.into(),
            action: action.into(),
        }
    }

    /// Name of the controller component
    pub fn controller(&self) -> &str {
        &self.controller
    }

    pub fn action(&self) -> &str {
        &self.action
    }
}

/// Decides which controller and action handle the current request
///
/// Implemented for closures returning a request.
pub trait Router {
    fn build_request(&self) -> Result<Request, DynError>;
}

impl<F> Router for F
where
    F: Fn() -> Result<Request, DynError>,
{
    fn build_request(&self) -> Result<Request, DynError> {
        self()
    }
}

/// Always routes to the same controller and action
#[derive(Debug, Clone)]
pub struct StaticRouter(pub Request);

impl Router for StaticRouter {
    fn build_request(&self) -> Result<Request, DynError> {
        Ok(self.0.clone())
    }
}
