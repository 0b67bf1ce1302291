//! Streaming encryption

use blockcrypt_algorithms::block::{Direction, Mode, WordBlock};
use blockcrypt_api::{Progress, Transform};
use blockcrypt_params::utils::symmetric::AES_BLOCK_SIZE;
use tracing::trace;

use super::CipherCore;
use crate::config::CipherConfig;
use crate::error::Result;
use crate::padding::Padding;

/// AES encryption as a [`Transform`]
#[derive(Debug)]
pub struct AesEncoder {
    core: CipherCore,
}

impl AesEncoder {
    /// Create an encoder with no key installed
    pub fn new() -> Self {
        Self {
            core: CipherCore::new(Direction::Encrypt),
        }
    }

    /// Create a keyed encoder from a configuration
    pub fn with_config(key: &[u8], config: &CipherConfig) -> Result<Self> {
        let mut encoder = Self::new();
        encoder.core.configure(key, config)?;
        Ok(encoder)
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

    /// Choose the padding applied by [`finish`](Transform::finish)
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

impl Default for AesEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform for AesEncoder {
    fn transform(&mut self, input: &[u8], output: &mut [u8]) -> Result<Progress> {
        self.core.absorb(input, output)
    }

    fn finish(&mut self, output: &mut [u8]) -> Result<usize> {
        self.core.begin_finish(output)?;
        let pending = self.core.pending.len();
        let padding = self.core.padding;

        if padding == Padding::Zero && pending == 0 {
            trace!(written = 0, "encoder finished");
            return Ok(0);
        }

        padding.pad(self.core.pending.as_mut_array(), pending);
        self.core.process_pending()?;
        output[..AES_BLOCK_SIZE].copy_from_slice(self.core.pending.as_array());
        self.core.pending.clear();

        trace!(written = AES_BLOCK_SIZE, padding = %padding, "encoder finished");
        Ok(AES_BLOCK_SIZE)
    }

    fn min_finish_capacity(&self) -> usize {
        AES_BLOCK_SIZE
    }
}
