//! AES block cipher and chaining modes
//!
//! This crate provides the Rijndael/AES block transform for 128, 192 and
//! 256-bit keys and the ECB, CBC, PCBC, CFB, OFB and CTR modes of
//! operation. It works on whole blocks only; buffering, padding and the
//! streaming interface live in `blockcrypt-symmetric`.
//!
//! # Security Features
//!
//! - Key schedules and chaining registers are zeroized on drop
//! - The raw key is never retained after expansion
//! - Block transforms operate on fixed-size stack buffers only

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Block cipher implementations
pub mod block;
pub use block::{Aes, BlockCipher, Direction, KeySchedule, KeySize, Mode, ModeEngine, WordBlock};
