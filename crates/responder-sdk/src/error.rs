//! Error types for responder transports

use thiserror::Error;

/// Errors raised while moving events and responses across a transport.
///
/// A handler itself never produces one of these; they come from framing,
/// I/O and encoding around it.
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("IPC error: {0}")]
    Ipc(String),

    #[error("Frame of {len} bytes exceeds the {max} byte limit")]
    FrameTooLarge { len: usize, max: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl HandlerError {
    /// Whether the error came from a malformed or oversized frame rather
    /// than from the underlying stream.
    pub fn is_protocol_error(&self) -> bool {
        matches!(self, HandlerError::Ipc(_) | HandlerError::FrameTooLarge { .. })
    }
}
