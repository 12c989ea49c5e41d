//! CLI error types.

use agenda_providers::{AgendaError, ProviderError};
use thiserror::Error;

/// Result type for CLI operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur in the CLI.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Missing or invalid configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// A command-line value could not be interpreted.
    #[error("invalid argument: {0}")]
    Argument(String),

    /// The gateway could not be set up.
    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),

    /// A calendar query failed.
    #[error(transparent)]
    Agenda(#[from] AgendaError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Results could not be encoded.
    #[error("output error: {0}")]
    Output(#[from] serde_json::Error),
}

impl ClientError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
