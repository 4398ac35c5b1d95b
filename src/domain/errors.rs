//! Domain errors. Used by ports and adapters.
//!
//! Relationship operations are total; only infrastructure can fail.
//! Adapters map their errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Report error: {0}")]
    Report(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<std::io::Error> for DomainError {
    fn from(e: std::io::Error) -> Self {
        DomainError::Report(e.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        DomainError::Report(e.to_string())
    }
}

impl From<config::ConfigError> for DomainError {
    fn from(e: config::ConfigError) -> Self {
        DomainError::Config(e.to_string())
    }
}
