//! Cipher configuration
//!
//! Bundles the settings the streaming cipher needs beside the key, so a
//! caller can set up an encoder or decoder in one call.

use blockcrypt_algorithms::block::Mode;
use blockcrypt_params::utils::symmetric::AES_BLOCK_SIZE;

use crate::error::{validate, Result};
use crate::padding::Padding;

/// Mode, padding and IV for a cipher stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CipherConfig {
    /// Chaining mode
    pub mode: Mode,
    /// Final-block padding
    pub padding: Padding,
    /// Initialization vector; all zero when absent
    pub iv: Option<[u8; AES_BLOCK_SIZE]>,
}

impl CipherConfig {
    /// Configuration for `mode` with PKCS#7 padding and a zero IV
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Set the padding scheme
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Set the IV from a slice, which must be exactly one block long
    pub fn with_iv(mut self, iv: &[u8]) -> Result<Self> {
        validate::length("initialization vector", iv.len(), AES_BLOCK_SIZE)?;
        let mut block = [0u8; AES_BLOCK_SIZE];
        block.copy_from_slice(iv);
        self.iv = Some(block);
        Ok(self)
    }
}
