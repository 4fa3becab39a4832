//! Lightwire Config loads the configuration files an application is wired from.
//!
//! Lightwire Config is split into two parts:
//! 1. ConfigProvider: reads `parameters.json`, `settings.json` and `dependencies.json` from a directory
//! 2. Configuration: the validated result, exposing parameters and the raw dependency description
//!
//! # Examples
//!
//! ```rust
//! use lightwire_config::{Configuration, Parameters};
//!
//! let parameters = Parameters::from_json(
//!     r#"{ "environment": "dev", "defaultContentType": "text/plain" }"#,
//!     Some(r#"{ "applicationStartingPoint": "app", "greeting": "hello from %environment%" }"#),
//! )
//! .unwrap();
//!
//! let configuration = Configuration::new(parameters, r#"{ "app": { "class": "App" } }"#).unwrap();
//! assert_eq!(configuration.application_starting_point(), "app");
//! assert_eq!(
//!     configuration.parameters().get("greeting").and_then(|value| value.as_str()),
//!     Some("hello from dev")
//! );
//! ```

pub mod config;
pub mod errors;
pub mod provider;

pub use config::{
    Configuration, Parameters, PARAMETER_APPLICATION_STARTING_POINT,
    PARAMETER_DEFAULT_CONTENT_TYPE, PARAMETER_ENVIRONMENT,
};
pub use errors::ConfigError;
pub use provider::ConfigProvider;
