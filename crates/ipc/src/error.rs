//! Error types for IPC operations.

/// Errors that can occur while encoding or decoding boundary messages.
#[derive(Debug, thiserror::Error)]
pub enum IpcError {
    #[error("Failed to serialize message: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid message format: {0}")]
    InvalidFormat(String),

    #[error("Invalid base64 image payload: {0}")]
    Decode(#[from] base64::DecodeError),
}
