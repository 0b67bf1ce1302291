//! Block cipher primitives
//!
//! The [`BlockCipher`] trait is the seam between the AES block core and the
//! chaining modes. Blocks travel either as 16-byte slices or as a
//! [`WordBlock`], four little-endian column words, which is the form the
//! round transform works on.

use core::fmt;
use core::str::FromStr;

use blockcrypt_internal::endian::{words_from_le_bytes, words_to_le_bytes};
use blockcrypt_params::utils::symmetric::AES_BLOCK_SIZE;
use zeroize::Zeroize;

use crate::error::{validate, Result};

pub mod aes;
pub mod modes;

// Re-exports
pub use aes::{Aes, KeySchedule, KeySize};
pub use modes::{Mode, ModeEngine};

/// One cipher block as four little-endian packed column words
pub type WordBlock = [u32; 4];

/// Which way data flows through a cipher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Plaintext in, ciphertext out
    Encrypt,
    /// Ciphertext in, plaintext out
    Decrypt,
}

impl Direction {
    /// Lower-case name of the direction
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Encrypt => "encrypt",
            Direction::Decrypt => "decrypt",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = blockcrypt_api::Error;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "encrypt" | "enc" | "e" => Ok(Direction::Encrypt),
            "decrypt" | "dec" | "d" => Ok(Direction::Decrypt),
            _ => Err(blockcrypt_api::Error::InvalidParameter {
                context: "direction",
                message: format!("unknown direction '{}'", s),
            }),
        }
    }
}

/// A 128-bit block cipher
pub trait BlockCipher {
    /// Algorithm name, e.g. `AES-256`
    fn name(&self) -> &'static str;

    /// Block size in bytes
    fn block_size() -> usize
    where
        Self: Sized,
    {
        AES_BLOCK_SIZE
    }

    /// Forward transform of one word-block in place
    fn encrypt_words(&self, block: &mut WordBlock);

    /// Inverse transform of one word-block in place
    fn decrypt_words(&self, block: &mut WordBlock);

    /// Forward transform of one 16-byte block in place
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        with_word_block(block, |words| self.encrypt_words(words))
    }

    /// Inverse transform of one 16-byte block in place
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        with_word_block(block, |words| self.decrypt_words(words))
    }
}

/// Run `f` over the word view of a byte block and write the result back
fn with_word_block<F>(block: &mut [u8], f: F) -> Result<()>
where
    F: FnOnce(&mut WordBlock),
{
    validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;

    let mut bytes = [0u8; AES_BLOCK_SIZE];
    bytes.copy_from_slice(block);
    let mut words = words_from_le_bytes(&bytes);
    f(&mut words);
    bytes = words_to_le_bytes(&words);
    block.copy_from_slice(&bytes);

    words.zeroize();
    bytes.zeroize();
    Ok(())
}

/// XOR `other` into `block`
#[inline(always)]
pub fn xor_words(block: &mut WordBlock, other: &WordBlock) {
    for (b, o) in block.iter_mut().zip(other.iter()) {
        *b ^= *o;
    }
}
