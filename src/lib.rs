//! # blockcrypt
//!
//! A pure Rust AES/Rijndael engine with ECB, CBC, PCBC, CFB, OFB and CTR
//! chaining modes behind an incremental, buffer-bounded streaming
//! interface.
//!
//! ## Features
//!
//! - `symmetric` (default): streaming encoder/decoder with padding
//! - `codec` (default): hex and base64 streaming codecs
//! - `algorithms`: the block cipher and modes on their own
//! - `serde`: serialization of `CipherConfig`, `Mode` and `Padding`
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - `blockcrypt-algorithms`: AES block core, key schedule and chaining modes
//! - `blockcrypt-symmetric`: streaming encryption and decryption
//! - `blockcrypt-utils`: hex and base64 codecs
//!
//! ## Example
//!
//! ```
//! # #[cfg(all(feature = "symmetric", feature = "codec"))]
//! # fn main() -> blockcrypt::api::Result<()> {
//! use blockcrypt::prelude::*;
//!
//! let key = [0u8; 16];
//! let config = CipherConfig::new(Mode::Ctr).with_iv(&[1u8; 16])?;
//!
//! let mut encoder = AesEncoder::with_config(&key, &config)?;
//! let ciphertext = transform_all(&mut encoder, b"hello world")?;
//!
//! let mut decoder = AesDecoder::with_config(&key, &config)?;
//! assert_eq!(transform_all(&mut decoder, &ciphertext)?, b"hello world");
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "symmetric", feature = "codec")))]
//! # fn main() {}
//! ```

// Core re-exports (always available)
pub use blockcrypt_api as api;
pub use blockcrypt_common as common;
pub use blockcrypt_internal as internal;
pub use blockcrypt_params as params;
pub use zeroize;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use blockcrypt_algorithms as algorithms;

#[cfg(feature = "symmetric")]
pub use blockcrypt_symmetric as symmetric;

#[cfg(feature = "codec")]
pub use blockcrypt_utils as utils;

/// Common imports for blockcrypt users
pub mod prelude {
    // Re-export error types and the streaming contract
    pub use crate::api::{Error, Progress, Result, Transform};

    // Re-export security types
    pub use crate::common::{SecretBuffer, ZeroizeGuard};

    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::block::{Aes, BlockCipher, Direction, KeySize, Mode, ModeEngine};

    #[cfg(feature = "symmetric")]
    pub use crate::symmetric::{AesDecoder, AesEncoder, CipherConfig, Padding};

    #[cfg(feature = "codec")]
    pub use crate::utils::{
        transform_all, transform_chunked, Base64Decoder, Base64Encoder, HexDecoder, HexEncoder,
    };
}
