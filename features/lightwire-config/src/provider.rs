use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    config::{Configuration, Parameters},
    errors::ConfigError,
};

pub const PARAMETERS_FILE: &str = "parameters.json";
pub const SETTINGS_FILE: &str = "settings.json";
pub const DEPENDENCIES_FILE: &str = "dependencies.json";

/// Loads the configuration of an application from a directory.
///
/// The directory holds
/// - `parameters.json`: flat scalar parameters (required)
/// - `settings.json`: further values, may use `%parameter%` placeholders (optional)
/// - `dependencies.json`: the component description (required)
pub struct ConfigProvider {
    dir: PathBuf,
}

impl ConfigProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Reads and validates all configuration files
    pub fn load(&self) -> Result<Configuration, ConfigError> {
        let parameters = self.load_parameters()?;
        let dependencies = self.read(DEPENDENCIES_FILE)?;

        tracing::debug!(
            "Loaded {} parameters from {}",
            parameters.len(),
            self.dir.display()
        );
        Configuration::new(parameters, dependencies)
    }

    pub fn load_parameters(&self) -> Result<Parameters, ConfigError> {
        let parameters = self.read(PARAMETERS_FILE)?;
        let settings = match self.read(SETTINGS_FILE) {
            Ok(settings) => Some(settings),
            Err(ConfigError::MissingFile(path)) => {
                tracing::debug!("No settings at {}", path.display());
                None
            }
            Err(err) => return Err(err),
        };

        Parameters::from_json(&parameters, settings.as_deref())
    }

    fn read(&self, file: &str) -> Result<String, ConfigError> {
        let path = self.dir.join(file);
        if !path.is_file() {
            return Err(ConfigError::MissingFile(path));
        }

        fs::read_to_string(&path).map_err(|source| ConfigError::Io { path, source })
    }
}
