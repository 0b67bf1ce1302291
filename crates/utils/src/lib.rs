//! Utilities and helpers for the blockcrypt library
//!
//! Text codecs that share the streaming [`Transform`] contract with the
//! cipher, plus drivers that run any transform to completion.
//!
//! [`Transform`]: blockcrypt_api::Transform

#![forbid(unsafe_code)]

pub mod codec;

pub use codec::{
    transform_all, transform_chunked, Base64Decoder, Base64Encoder, HexDecoder, HexEncoder,
};
