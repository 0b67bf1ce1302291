//! Common implementations and shared functionality for the blockcrypt library
//!
//! This crate provides the secret-handling containers used by the cipher
//! engine and the streaming layer.

#![forbid(unsafe_code)]

pub mod security;

// Re-export core security types
pub use security::{SecretBuffer, ZeroizeGuard};

// Re-export memory barrier utilities
pub use security::memory::barrier;
