//! Error types for the terminal client.

use kinrow_server::domain::IdentityError;
use thiserror::Error;

/// Client-specific errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server turned the participant away (game full, duplicate id)
    #[error("Rejected by server: {0}")]
    Rejected(String),

    /// The client id would be refused by the server
    #[error("Invalid client id: {0}")]
    InvalidClientId(#[from] IdentityError),

    /// Connection error
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Failed to encode frame: {0}")]
    Encode(#[from] serde_json::Error),
}
