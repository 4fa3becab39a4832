//! Structured logging with tracing
//!
//! Development environments log human readable output at debug level,
//! every other environment logs JSON at info level.
//! `LIGHTWIRE_LOG` overrides the level with any `EnvFilter` directive.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::errors::BootError;

/// Environment variable holding the log filter directive
pub const LOG_ENV: &str = "LIGHTWIRE_LOG";

const DEVELOPMENT_ENVIRONMENTS: [&str; 3] = ["dev", "development", "test"];

pub fn is_development(environment: &str) -> bool {
    DEVELOPMENT_ENVIRONMENTS
        .iter()
        .any(|candidate| candidate.eq_ignore_ascii_case(environment))
}

/// Level used when `LIGHTWIRE_LOG` is not set
pub fn default_level(environment: &str) -> &'static str {
    if is_development(environment) {
        "debug"
    } else {
        "info"
    }
}

/// Installs the global subscriber for the given application environment
pub fn init_logging(environment: &str) -> Result<(), BootError> {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level(environment)));
    let registry = Registry::default().with(filter);

    let installed = if is_development(environment) {
        registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };
    installed.map_err(|err| BootError::Logging(err.into()))?;

    tracing::debug!(environment, "Logging initialized");
    Ok(())
}
