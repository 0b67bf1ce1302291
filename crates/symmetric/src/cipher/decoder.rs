//! Streaming decryption

use blockcrypt_algorithms::block::{Direction, Mode, WordBlock};
use blockcrypt_api::{Progress, Transform};
use blockcrypt_params::utils::symmetric::AES_BLOCK_SIZE;
use tracing::{trace, warn};

use super::CipherCore;
use crate::config::CipherConfig;
use crate::error::{Error, Result};
use crate::padding::{pkcs7_unpadded_len, Padding};

/// AES decryption as a [`Transform`]
///
/// With PKCS#7 padding the most recent plaintext block is held back until
/// [`finish`](Transform::finish), since only then is it known to be the
/// padded one. Output therefore lags input by one block.
#[derive(Debug)]
pub struct AesDecoder {
    core: CipherCore,
}

impl AesDecoder {
    /// Create a decoder with no key installed
    pub fn new() -> Self {
        Self {
            core: CipherCore::new(Direction::Decrypt),
        }
    }

    /// Create a keyed decoder from a configuration
    pub fn with_config(key: &[u8], config: &CipherConfig) -> Result<Self> {
        let mut decoder = Self::new();
        decoder.core.configure(key, config)?;
        Ok(decoder)
    }

    /// Install a 16, 24 or 32-byte key and choose the mode
    pub fn set_key(&mut self, key: &[u8], mode: Mode) -> Result<()> {
        self.core.set_key(key, mode)
    }

    /// Set the IV (exactly 16 bytes)
    pub fn set_iv(&mut self, iv: &[u8]) -> Result<()> {
        self.core.set_iv(iv)
    }

    /// Set the IV as a word-block
    pub fn set_iv_words(&mut self, iv: WordBlock) -> Result<()> {
        self.core.set_iv_words(iv)
    }

    /// Choose the padding removed by [`finish`](Transform::finish)
    pub fn set_padding(&mut self, padding: Padding) -> Result<()> {
        self.core.set_padding(padding)
    }

    /// Start a new message with the same key and IV
    pub fn reset(&mut self) {
        self.core.reset();
    }

    /// Shared cipher state
    pub fn core(&self) -> &CipherCore {
        &self.core
    }
}

impl Default for AesDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform for AesDecoder {
    fn transform(&mut self, input: &[u8], output: &mut [u8]) -> Result<Progress> {
        self.core.absorb(input, output)
    }

    fn finish(&mut self, output: &mut [u8]) -> Result<usize> {
        self.core.begin_finish(output)?;

        let trailing = self.core.pending.len();
        if trailing != 0 {
            warn!(trailing, "ciphertext ends with a partial block");
            self.core.pending.clear();
            self.core.held.clear();
            return Err(Error::InvalidLength {
                context: "ciphertext final block",
                expected: AES_BLOCK_SIZE,
                actual: trailing,
            });
        }

        if self.core.padding == Padding::Zero {
            trace!(written = 0, "decoder finished");
            return Ok(0);
        }

        if !self.core.held.is_full() {
            warn!("ciphertext is empty");
            return Err(Error::InvalidLength {
                context: "ciphertext",
                expected: AES_BLOCK_SIZE,
                actual: 0,
            });
        }

        let result = pkcs7_unpadded_len(self.core.held.as_array());
        match &result {
            Ok(len) => output[..*len].copy_from_slice(&self.core.held.as_array()[..*len]),
            Err(_) => warn!("padding check failed on final block"),
        }
        self.core.held.clear();

        let written = result?;
        trace!(written, "decoder finished");
        Ok(written)
    }

    fn min_finish_capacity(&self) -> usize {
        AES_BLOCK_SIZE
    }
}
