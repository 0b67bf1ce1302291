//! Block cipher modes of operation
//!
//! [`ModeEngine`] chains a [`BlockCipher`] over a sequence of blocks using
//! one of six modes. The engine owns a single feedback register, seeded
//! from the IV, which each mode's step function reads and updates.
//!
//! Padding is not handled here: every call processes whole blocks.

use core::fmt;
use core::str::FromStr;

use blockcrypt_internal::endian::{words_from_le_bytes, words_to_le_bytes};
use blockcrypt_params::utils::symmetric::AES_BLOCK_SIZE;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{BlockCipher, WordBlock};
use crate::error::{validate, Result};

pub use super::Direction;

pub mod cbc;
pub mod cfb;
pub mod ctr;
pub mod ecb;
pub mod ofb;
pub mod pcbc;

/// Chaining mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mode {
    /// Electronic codebook
    Ecb,
    /// Cipher block chaining
    #[default]
    Cbc,
    /// Propagating cipher block chaining
    Pcbc,
    /// Cipher feedback, full block
    Cfb,
    /// Output feedback
    Ofb,
    /// Counter
    Ctr,
}

impl Mode {
    /// Every supported mode
    pub const ALL: [Mode; 6] = [Mode::Ecb, Mode::Cbc, Mode::Pcbc, Mode::Cfb, Mode::Ofb, Mode::Ctr];

    /// Upper-case mode name
    pub const fn name(&self) -> &'static str {
        match self {
            Mode::Ecb => "ECB",
            Mode::Cbc => "CBC",
            Mode::Pcbc => "PCBC",
            Mode::Cfb => "CFB",
            Mode::Ofb => "OFB",
            Mode::Ctr => "CTR",
        }
    }

    /// Whether the mode reads the IV register at all
    pub const fn requires_iv(&self) -> bool {
        !matches!(self, Mode::Ecb)
    }

    /// Whether the mode XORs data with a keystream and so never runs the
    /// inverse cipher
    pub const fn is_keystream(&self) -> bool {
        matches!(self, Mode::Cfb | Mode::Ofb | Mode::Ctr)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = blockcrypt_api::Error;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        Mode::ALL
            .iter()
            .copied()
            .find(|mode| mode.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| blockcrypt_api::Error::UnsupportedMode {
                name: s.to_string(),
            })
    }
}

/// A block cipher bound to a chaining mode and direction
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ModeEngine<B: BlockCipher + Zeroize> {
    cipher: B,
    #[zeroize(skip)]
    mode: Mode,
    #[zeroize(skip)]
    direction: Direction,
    iv: WordBlock,
    register: WordBlock,
}

impl<B: BlockCipher + Zeroize> ModeEngine<B> {
    /// Create an engine with an all-zero IV
    pub fn new(cipher: B, mode: Mode, direction: Direction) -> Self {
        Self {
            cipher,
            mode,
            direction,
            iv: [0u32; 4],
            register: [0u32; 4],
        }
    }

    /// Create an engine seeded with a 16-byte IV
    pub fn with_iv(cipher: B, mode: Mode, direction: Direction, iv: &[u8]) -> Result<Self> {
        let mut engine = Self::new(cipher, mode, direction);
        engine.set_iv(iv)?;
        Ok(engine)
    }

    /// Replace the IV and re-seed the register
    pub fn set_iv(&mut self, iv: &[u8]) -> Result<()> {
        validate::length("initialization vector", iv.len(), AES_BLOCK_SIZE)?;
        let mut bytes = [0u8; AES_BLOCK_SIZE];
        bytes.copy_from_slice(iv);
        self.set_iv_words(words_from_le_bytes(&bytes));
        bytes.zeroize();
        Ok(())
    }

    /// Replace the IV with a word-block and re-seed the register
    pub fn set_iv_words(&mut self, iv: WordBlock) {
        self.iv = iv;
        self.register = iv;
    }

    /// Re-seed the register from the IV
    pub fn reset(&mut self) {
        self.register = self.iv;
    }

    /// The chaining mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The direction data flows
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The underlying block cipher
    pub fn cipher(&self) -> &B {
        &self.cipher
    }

    /// Current register contents as bytes
    pub fn chaining_value(&self) -> [u8; AES_BLOCK_SIZE] {
        words_to_le_bytes(&self.register)
    }

    /// Transform one word-block in place and advance the register
    pub fn process_words(&mut self, block: &mut WordBlock) {
        let cipher = &self.cipher;
        let register = &mut self.register;
        match (self.mode, self.direction) {
            (Mode::Ecb, Direction::Encrypt) => ecb::encrypt_step(cipher, register, block),
            (Mode::Ecb, Direction::Decrypt) => ecb::decrypt_step(cipher, register, block),
            (Mode::Cbc, Direction::Encrypt) => cbc::encrypt_step(cipher, register, block),
            (Mode::Cbc, Direction::Decrypt) => cbc::decrypt_step(cipher, register, block),
            (Mode::Pcbc, Direction::Encrypt) => pcbc::encrypt_step(cipher, register, block),
            (Mode::Pcbc, Direction::Decrypt) => pcbc::decrypt_step(cipher, register, block),
            (Mode::Cfb, Direction::Encrypt) => cfb::encrypt_step(cipher, register, block),
            (Mode::Cfb, Direction::Decrypt) => cfb::decrypt_step(cipher, register, block),
            (Mode::Ofb, Direction::Encrypt) => ofb::encrypt_step(cipher, register, block),
            (Mode::Ofb, Direction::Decrypt) => ofb::decrypt_step(cipher, register, block),
            (Mode::Ctr, Direction::Encrypt) => ctr::encrypt_step(cipher, register, block),
            (Mode::Ctr, Direction::Decrypt) => ctr::decrypt_step(cipher, register, block),
        }
    }

    /// Transform one 16-byte block in place and advance the register
    pub fn process_block(&mut self, block: &mut [u8; AES_BLOCK_SIZE]) {
        let mut words = words_from_le_bytes(block);
        self.process_words(&mut words);
        *block = words_to_le_bytes(&words);
        words.zeroize();
    }

    /// Transform a block-aligned buffer in place
    pub fn process_blocks(&mut self, data: &mut [u8]) -> Result<()> {
        validate::block_multiple("mode engine input", data.len(), AES_BLOCK_SIZE)?;

        let mut block = [0u8; AES_BLOCK_SIZE];
        for chunk in data.chunks_exact_mut(AES_BLOCK_SIZE) {
            block.copy_from_slice(chunk);
            self.process_block(&mut block);
            chunk.copy_from_slice(&block);
        }
        block.zeroize();
        Ok(())
    }
}

impl<B: BlockCipher + Zeroize> fmt::Debug for ModeEngine<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModeEngine")
            .field("cipher", &self.cipher.name())
            .field("mode", &self.mode)
            .field("direction", &self.direction)
            .finish_non_exhaustive()
    }
}
