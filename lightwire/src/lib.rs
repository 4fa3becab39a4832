//! Lightwire bootstraps an application out of its configuration directory.
//!
//! The configuration names the application starting point and describes every
//! component. At startup the description is substituted with the routed
//! controller and action and the configured parameters, the components
//! reachable from the root are constructed and the root is run.
//!
//! ```rust,no_run
//! use lightwire::{
//!     Arguments, CapabilityFactories, DiBuilder, DynError, Request, RequestHandler,
//! };
//!
//! struct App;
//!
//! impl RequestHandler for App {
//!     fn process(&self, request: &Request) -> Result<(), DynError> {
//!         println!("{} -> {}", request.controller(), request.action());
//!         Ok(())
//!     }
//! }
//!
//! fn main() -> std::process::ExitCode {
//!     let builder = DiBuilder::new()
//!         .add_handler("App", |_: &Arguments| Ok::<_, DynError>(App));
//!     lightwire::cli::run(builder)
//! }
//! ```

pub mod capabilities;
pub mod cli;
pub mod errors;
pub mod logging;
pub mod project;
pub mod routing;

pub use capabilities::{
    AsCommand, AsRequestHandler, CapabilityFactories, Command, CommandResult, RequestHandler,
};
pub use errors::BootError;
pub use project::Project;
pub use routing::{Request, Router, StaticRouter};

pub use lightwire_config::{ConfigProvider, Configuration, Parameters};
pub use lightwire_di::{
    Arguments, ComponentGraph, ComponentSpec, DiBuilder, DiContainer, DynError, Instance,
    InstanceFactory, Scalar,
};
