//! CLI error types and conversions

use crate::client::ClientError;

/// CLI errors
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Client error
    #[error("client error: {0}")]
    ClientError(#[from] ClientError),

    /// Invalid argument
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Output serialization error
    #[error("output error: {0}")]
    OutputError(String),
}
