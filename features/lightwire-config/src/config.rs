use std::collections::BTreeMap;

use lightwire_di::Scalar;

use crate::errors::ConfigError;

/// Name of the running environment, e.g. `dev` or `prod`
pub const PARAMETER_ENVIRONMENT: &str = "environment";
/// Content type used when reporting errors
pub const PARAMETER_DEFAULT_CONTENT_TYPE: &str = "defaultContentType";
/// Component handed control in application mode
pub const PARAMETER_APPLICATION_STARTING_POINT: &str = "applicationStartingPoint";

const REQUIRED_PARAMETERS: [&str; 3] = [
    PARAMETER_ENVIRONMENT,
    PARAMETER_DEFAULT_CONTENT_TYPE,
    PARAMETER_APPLICATION_STARTING_POINT,
];

/// Flat scalar parameters, available as `%name%` placeholders
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parameters {
    values: BTreeMap<String, Scalar>,
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `parameters.json` and the optional `settings.json`
    ///
    /// Every `%name%` in the settings text is replaced by the parameter value before parsing.
    /// Settings never override parameters.
    pub fn from_json(parameters: &str, settings: Option<&str>) -> Result<Self, ConfigError> {
        let mut loaded = Self::new();
        for (key, value) in parse_object("parameters.json", parameters)? {
            loaded.insert_json(key, &value)?;
        }

        if let Some(settings) = settings {
            let mut interpolated = settings.to_string();
            for (key, value) in &loaded.values {
                interpolated = interpolated.replace(&format!("%{key}%"), &value.to_string());
            }

            for (key, value) in parse_object("settings.json", &interpolated)? {
                if loaded.values.contains_key(&key) {
                    tracing::debug!("Setting '{key}' is shadowed by a parameter");
                    continue;
                }
                loaded.insert_json(key, &value)?;
            }
        }

        Ok(loaded)
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Scalar>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Scalar> {
        self.values.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Scalar)> {
        self.values.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn insert_json(&mut self, key: String, value: &serde_json::Value) -> Result<(), ConfigError> {
        match Scalar::from_json(value) {
            Some(scalar) => {
                self.values.insert(key, scalar);
                Ok(())
            }
            None => Err(ConfigError::NonScalarParameter {
                key,
                value: value.to_string(),
            }),
        }
    }
}

fn parse_object(
    file: &str,
    text: &str,
) -> Result<serde_json::Map<String, serde_json::Value>, ConfigError> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|source| ConfigError::InvalidJson {
            file: file.to_string(),
            source,
        })?;

    match value {
        serde_json::Value::Object(map) => Ok(map),
        _ => Err(ConfigError::NotAnObject(file.to_string())),
    }
}

/// Everything needed to wire an application
#[derive(Debug, Clone)]
pub struct Configuration {
    parameters: Parameters,
    dependencies: String,
    environment: String,
    default_content_type: String,
    starting_point: String,
}

impl Configuration {
    /// Validates that the required parameters are present
    pub fn new(parameters: Parameters, dependencies: impl Into<String>) -> Result<Self, ConfigError> {
        let missing: Vec<&'static str> = REQUIRED_PARAMETERS
            .into_iter()
            .filter(|key| parameters.get(key).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::MissingRequiredParameters(missing));
        }

        let text = |key: &str| {
            parameters
                .get(key)
                .map(Scalar::to_string)
                .unwrap_or_default()
        };

        Ok(Self {
            environment: text(PARAMETER_ENVIRONMENT),
            default_content_type: text(PARAMETER_DEFAULT_CONTENT_TYPE),
            starting_point: text(PARAMETER_APPLICATION_STARTING_POINT),
            dependencies: dependencies.into(),
            parameters,
        })
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// The raw dependency description, placeholders not yet replaced
    pub fn dependencies(&self) -> &str {
        &self.dependencies
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn default_content_type(&self) -> &str {
        &self.default_content_type
    }

    pub fn application_starting_point(&self) -> &str {
        &self.starting_point
    }
}
