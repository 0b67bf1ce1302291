//! Error handling for the block cipher primitives

use core::fmt;

use blockcrypt_api::Error as CoreError;

/// The error type for block cipher primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },
}

/// Result type for block cipher primitives
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Length { context, expected, actual } => {
                write!(f, "Invalid length for {}: expected {}, got {}", context, expected, actual)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Length { context, expected, actual } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
        }
    }
}

// Include the validation submodule
pub mod validate;
