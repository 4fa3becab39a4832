use std::path::PathBuf;

/// Errors when loading the configuration
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// A required configuration file does not exist
    #[error("Could not find {0}")]
    MissingFile(PathBuf),

    #[error("Could not read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{file} is not valid JSON: {source}")]
    InvalidJson {
        file: String,
        source: serde_json::Error,
    },

    #[error("{0} has to contain a JSON object")]
    NotAnObject(String),

    #[error("Parameter has to be string, int, float or bool got {value} for key '{key}'")]
    NonScalarParameter { key: String, value: String },

    #[error(
        "Could not find {} in parameters.json or settings.json, make sure you set these values",
        .0.join(", ")
    )]
    MissingRequiredParameters(Vec<&'static str>),
}
