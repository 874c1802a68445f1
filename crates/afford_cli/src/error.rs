//! CLI error types.

use thiserror::Error;

/// Errors surfaced by the `afford` binary.
///
/// An empty search result is not an error here: it is reported as a normal
/// message and the process exits successfully.
#[derive(Error, Debug)]
pub enum CliError {
    /// An argument value the parser accepts but the tool cannot use.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialisation failure while reporting.
    #[error("serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),
}

/// CLI result alias.
pub type Result<T> = std::result::Result<T, CliError>;
