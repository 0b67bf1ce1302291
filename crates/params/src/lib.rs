//! Constant values for blockcrypt cryptographic operations
//!
//! This crate carries the size and round-count constants shared by the
//! key schedule, the block core, the chaining modes and the streaming layer.

#![no_std]

pub mod utils;
