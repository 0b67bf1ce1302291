//! Streaming symmetric encryption for the blockcrypt library
//!
//! This crate turns the whole-block AES engine from `blockcrypt-algorithms`
//! into incremental encoders and decoders that accept input in arbitrary
//! pieces, write into caller-sized output buffers and handle final-block
//! padding.
//!
//! ```
//! use blockcrypt_api::Transform;
//! use blockcrypt_symmetric::{AesDecoder, AesEncoder, CipherConfig, Mode};
//!
//! let key = [0x42u8; 32];
//! let config = CipherConfig::new(Mode::Cbc).with_iv(&[7u8; 16]).unwrap();
//!
//! let mut encoder = AesEncoder::with_config(&key, &config).unwrap();
//! let mut ciphertext = [0u8; 32];
//! let progress = encoder.transform(b"attack at dawn", &mut ciphertext).unwrap();
//! let tail = encoder.finish(&mut ciphertext[progress.written..]).unwrap();
//! assert_eq!(progress.written + tail, 16);
//!
//! let mut decoder = AesDecoder::with_config(&key, &config).unwrap();
//! let mut plaintext = [0u8; 32];
//! let progress = decoder.transform(&ciphertext[..16], &mut plaintext).unwrap();
//! let tail = decoder.finish(&mut plaintext[progress.written..]).unwrap();
//! assert_eq!(&plaintext[..progress.written + tail], b"attack at dawn");
//! ```

#![forbid(unsafe_code)]

pub mod cipher;
pub mod config;
pub mod error;
pub mod padding;

// Re-export main types for convenience
pub use blockcrypt_algorithms::block::{Direction, Mode};
pub use cipher::{AesDecoder, AesEncoder, CipherCore};
pub use config::CipherConfig;
pub use padding::Padding;

// Re-export the API error system instead of custom error types
pub use blockcrypt_api::error::{validate, Error, Result, ResultExt};
