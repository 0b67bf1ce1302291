//! Error handling for the streaming cipher
//!
//! Re-exports the API error system and adds the state checks shared by
//! the encoder and decoder.

pub use blockcrypt_api::error::{validate, Error, Result, ResultExt};

/// Validate that a stream operation is allowed in the current state
#[inline]
pub fn validate_stream_state(
    condition: bool,
    operation: &'static str,
    details: &'static str,
) -> Result<()> {
    validate::stream_state(condition, operation, details)
}
