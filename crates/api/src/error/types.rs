//! Error type definitions for cipher and codec operations

use thiserror::Error as ThisError;

/// Primary error type for blockcrypt operations
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        /// What was measured
        context: &'static str,
        /// Required length in bytes
        expected: usize,
        /// Length that was supplied
        actual: usize,
    },

    /// Invalid parameter error
    #[error("{context}: {message}")]
    InvalidParameter {
        /// Name of the parameter
        context: &'static str,
        /// Why the parameter is invalid
        message: String,
    },

    /// A chaining mode name that is not supported
    #[error("Unsupported cipher mode: {name}")]
    UnsupportedMode {
        /// The name as supplied by the caller
        name: String,
    },

    /// Padding of the final decrypted block did not verify
    #[error("Invalid padding: {context}")]
    InvalidPadding {
        /// Where the padding check failed
        context: &'static str,
    },

    /// Malformed hex/base64 input
    #[error("Invalid encoding: {context}: {message}")]
    InvalidEncoding {
        /// Codec that rejected the input
        context: &'static str,
        /// Decoder diagnostic
        message: String,
    },

    /// Operation not permitted in the current stream state
    #[error("Invalid stream state: {operation}: {details}")]
    StreamState {
        /// Operation that was attempted
        operation: &'static str,
        /// Why it was refused
        details: &'static str,
    },
}

/// Result type for blockcrypt operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its details
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::UnsupportedMode { name } => Self::UnsupportedMode { name },
            Self::InvalidPadding { .. } => Self::InvalidPadding { context },
            Self::InvalidEncoding { message, .. } => Self::InvalidEncoding { context, message },
            Self::StreamState { details, .. } => Self::StreamState {
                operation: context,
                details,
            },
        }
    }

    /// Shorthand for a stream-state error
    pub fn stream_state(operation: &'static str, details: &'static str) -> Self {
        Self::StreamState { operation, details }
    }

    /// True for errors caused by caller configuration (key, IV, mode)
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidLength { .. }
                | Self::InvalidParameter { .. }
                | Self::UnsupportedMode { .. }
        )
    }
}
