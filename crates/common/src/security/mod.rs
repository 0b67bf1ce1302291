//! Security primitives and memory safety utilities
//!
//! Key schedules, chaining registers and partial blocks all pass through
//! the types here so that they are wiped on every drop path.

pub mod memory;
pub mod secret;

// Re-export core security types
pub use secret::{SecretBuffer, ZeroizeGuard};

// Re-export memory barrier utilities
pub use memory::barrier;
