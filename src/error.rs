use miette::{Diagnostic, Result};
use thiserror::Error;

/// Main error type for the normalizer
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Environment error: {0}")]
    #[diagnostic(code(mpi_normalizer::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(mpi_normalizer::config))]
    Config(String),

    #[error("Fetch error: {0}")]
    #[diagnostic(code(mpi_normalizer::fetch))]
    Fetch(String),

    #[error("Workbook error: {0}")]
    #[diagnostic(code(mpi_normalizer::workbook))]
    Workbook(String),

    #[error("Sheet error: {0}")]
    #[diagnostic(code(mpi_normalizer::sheet))]
    Sheet(String),

    #[error("Error loading {context}: {source}")]
    #[diagnostic(code(mpi_normalizer::load))]
    Load {
        context: String,
        #[source]
        source: Box<Error>,
    },

    #[error("Component error: {0}")]
    #[diagnostic(code(mpi_normalizer::component))]
    Component(String),

    #[error(transparent)]
    #[diagnostic(code(mpi_normalizer::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(mpi_normalizer::serialization))]
    Serialization(String),

    #[error("Other error: {0}")]
    #[diagnostic(code(mpi_normalizer::other))]
    Other(String),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Fetch(err.to_string())
    }
}

impl From<calamine::Error> for Error {
    fn from(err: calamine::Error) -> Self {
        Error::Workbook(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type NormalizerResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(var: &str) -> Error {
    Error::Environment(format!("Invalid environment variable: {}", var))
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create fetch errors
pub fn fetch_error(message: &str) -> Error {
    Error::Fetch(message.to_string())
}

/// Helper to create workbook errors
pub fn workbook_error(message: &str) -> Error {
    Error::Workbook(message.to_string())
}

/// Helper to create sheet errors
pub fn sheet_error(message: &str) -> Error {
    Error::Sheet(message.to_string())
}

/// Wrap a failure with the load it aborted
pub fn load_error(context: &str, source: Error) -> Error {
    Error::Load {
        context: context.to_string(),
        source: Box::new(source),
    }
}

/// Helper to create component errors
pub fn component_error(message: &str) -> Error {
    Error::Component(message.to_string())
}
