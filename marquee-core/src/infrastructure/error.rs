// marquee-core/src/infrastructure/error.rs

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::error::DomainError;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- LINE SOURCE ---
    #[error("Could not open file {}: {source}", .path.display())]
    #[diagnostic(
        code(marquee::infra::source_unreadable),
        help("Check that the path exists and is readable.")
    )]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File {} is empty", .0.display())]
    #[diagnostic(
        code(marquee::infra::empty_source),
        help("The first line must be a header, followed by one movie per line.")
    )]
    EmptySource(PathBuf),

    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(marquee::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(marquee::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("Configuration Error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    #[diagnostic(transparent)]
    InvalidConfig(#[from] DomainError),

    #[error("Configuration not found at '{0}'")]
    #[diagnostic(code(marquee::infra::config_missing))]
    ConfigNotFound(String),

    // --- EXPORT ---
    #[error("JSON Serialization Error: {0}")]
    #[diagnostic(code(marquee::infra::json))]
    JsonError(#[from] serde_json::Error),
}

// `.context(...)` on config reads yields anyhow errors; keep the chain readable.
impl From<anyhow::Error> for InfrastructureError {
    fn from(err: anyhow::Error) -> Self {
        InfrastructureError::ConfigError(format!("{:#}", err))
    }
}
