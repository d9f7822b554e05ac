//! Error types for the Chef's Hat bridge crates

use thiserror::Error;

/// Result type used across the bridge crates
pub type Result<T> = std::result::Result<T, ChefsHatError>;

/// Errors raised by the bridge layers.
///
/// These stay inside the transport plumbing: the [`Agent`](crate::Agent)
/// operations themselves are infallible and substitute defaults instead of
/// surfacing any of these to the engine.
#[derive(Debug, Error)]
pub enum ChefsHatError {
    /// Socket-level failure: refused connection, reset, broken pipe
    #[error("Transport error: {0}")]
    Transport(String),

    /// Payload could not be serialized or deserialized
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Frame or call violated the wire contract
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// Observation vector of the wrong shape
    #[error("Invalid observation: {0}")]
    InvalidObservation(String),
}

impl From<serde_json::Error> for ChefsHatError {
    fn from(err: serde_json::Error) -> Self {
        ChefsHatError::Serialization(err.to_string())
    }
}
