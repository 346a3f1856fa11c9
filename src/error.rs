//! Domain error types for release-performer.

use thiserror::Error;

/// Errors raised by the performer itself, as opposed to those bubbling up
/// from octocrab, toml or tera.
#[derive(Error, Debug)]
pub enum PerformerError {
    // Cli args errors
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid API url: {0}")]
    InvalidApiUrl(#[from] url::ParseError),

    // Macro expansion errors
    #[error("Unknown macro: {0}")]
    UnknownMacro(String),

    #[error("Malformed macro expression: {0}")]
    MalformedMacro(String),

    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("Template rendering failed: {0}")]
    TemplateError(#[from] tera::Error),
}

impl PerformerError {
    /// Create an invalid arguments error
    pub fn invalid_args(msg: impl Into<String>) -> Self {
        Self::InvalidArgs(msg.into())
    }

    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
