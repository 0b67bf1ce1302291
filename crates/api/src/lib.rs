//! Public API traits and types for the blockcrypt library
//!
//! This crate provides the public API surface shared by the cipher engine
//! and the codecs: the error type, validation helpers and the streaming
//! [`Transform`] contract.

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use traits::{Progress, Transform};
