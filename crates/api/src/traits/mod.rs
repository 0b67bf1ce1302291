//! Trait definitions shared across blockcrypt crates

pub mod transform;

pub use transform::{Progress, Transform};
