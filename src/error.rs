//! Error types for the Orcho MCP server.
//!
//! Only the fatal startup and serve paths surface errors; the risk client
//! degrades upstream failures to a default result instead of propagating.

use thiserror::Error;

/// Errors that terminate the server process.
#[derive(Debug, Error)]
pub enum OrchoError {
    /// Required configuration is missing or malformed.
    #[error("configuration error: {0}")]
    Config(String),

    /// The MCP serve loop failed in a way it could not recover from.
    #[error("server error: {0}")]
    Server(String),
}
