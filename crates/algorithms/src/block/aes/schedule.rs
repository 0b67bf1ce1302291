//! AES key expansion
//!
//! Produces the round keys for both directions. The decryption schedule
//! lists the round keys in reverse order and runs every middle key
//! through InvMixColumns, which lets the inverse rounds apply
//! InvMixColumns before AddRoundKey (the equivalent inverse cipher of
//! FIPS 197, section 5.3.5).

use core::fmt;

use blockcrypt_common::security::ZeroizeGuard;
use blockcrypt_internal::endian::{u32_from_le_bytes, u32_to_le_bytes};
use blockcrypt_params::utils::symmetric::{
    AES128_KEY_SIZE, AES128_ROUNDS, AES192_KEY_SIZE, AES192_ROUNDS, AES256_KEY_SIZE,
    AES256_ROUNDS, AES_BLOCK_SIZE, AES_BLOCK_WORDS, AES_MAX_SCHEDULE_WORDS,
};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::round::{inv_mix_column, rot_word, sub_word};
use crate::block::Direction;
use crate::error::{Error, Result};

/// Round constants, first byte of each word (little-endian packing)
const RCON: [u32; 11] = [0x00, 0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

/// The three AES key sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeySize {
    /// 128-bit key, 10 rounds
    Aes128,
    /// 192-bit key, 12 rounds
    Aes192,
    /// 256-bit key, 14 rounds
    Aes256,
}

impl KeySize {
    /// Resolve a raw key length in bytes
    pub fn from_key_len(len: usize) -> Result<Self> {
        match len {
            AES128_KEY_SIZE => Ok(KeySize::Aes128),
            AES192_KEY_SIZE => Ok(KeySize::Aes192),
            AES256_KEY_SIZE => Ok(KeySize::Aes256),
            _ => Err(Error::Length {
                context: "AES key",
                expected: nearest_key_len(len),
                actual: len,
            }),
        }
    }

    /// Key length in bytes
    pub const fn key_len(&self) -> usize {
        match self {
            KeySize::Aes128 => AES128_KEY_SIZE,
            KeySize::Aes192 => AES192_KEY_SIZE,
            KeySize::Aes256 => AES256_KEY_SIZE,
        }
    }

    /// Key length in 32-bit words (Nk)
    pub const fn key_words(&self) -> usize {
        self.key_len() / 4
    }

    /// Number of rounds (Nr)
    pub const fn rounds(&self) -> usize {
        match self {
            KeySize::Aes128 => AES128_ROUNDS,
            KeySize::Aes192 => AES192_ROUNDS,
            KeySize::Aes256 => AES256_ROUNDS,
        }
    }

    /// Number of words in the expanded schedule
    pub const fn schedule_words(&self) -> usize {
        AES_BLOCK_WORDS * (self.rounds() + 1)
    }

    /// Algorithm name
    pub const fn name(&self) -> &'static str {
        match self {
            KeySize::Aes128 => "AES-128",
            KeySize::Aes192 => "AES-192",
            KeySize::Aes256 => "AES-256",
        }
    }
}

impl fmt::Display for KeySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Smallest valid key length at or above `len`, for error reporting
fn nearest_key_len(len: usize) -> usize {
    if len < AES128_KEY_SIZE {
        AES128_KEY_SIZE
    } else if len < AES192_KEY_SIZE {
        AES192_KEY_SIZE
    } else {
        AES256_KEY_SIZE
    }
}

/// Expanded AES key schedule for one direction
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeySchedule {
    words: [u32; AES_MAX_SCHEDULE_WORDS],
    #[zeroize(skip)]
    size: KeySize,
    #[zeroize(skip)]
    direction: Direction,
}

impl KeySchedule {
    /// Expand `key` into a schedule for `direction`.
    ///
    /// The key must be 16, 24 or 32 bytes long.
    pub fn expand(key: &[u8], direction: Direction) -> Result<Self> {
        let size = KeySize::from_key_len(key.len())?;

        let mut schedule = Self {
            words: [0u32; AES_MAX_SCHEDULE_WORDS],
            size,
            direction,
        };

        match direction {
            Direction::Encrypt => expand_words(key, size, &mut schedule.words),
            Direction::Decrypt => {
                let mut forward = [0u32; AES_MAX_SCHEDULE_WORDS];
                let mut forward = ZeroizeGuard::new(&mut forward);
                expand_words(key, size, &mut forward);
                invert_words(&forward, size.rounds(), &mut schedule.words);
            }
        }

        Ok(schedule)
    }

    /// Build the decryption schedule matching an encryption schedule
    pub(crate) fn to_decryption(&self) -> Self {
        debug_assert_eq!(self.direction, Direction::Encrypt);
        let mut schedule = Self {
            words: [0u32; AES_MAX_SCHEDULE_WORDS],
            size: self.size,
            direction: Direction::Decrypt,
        };
        invert_words(&self.words, self.size.rounds(), &mut schedule.words);
        schedule
    }

    /// Number of rounds this schedule drives
    pub fn rounds(&self) -> usize {
        self.size.rounds()
    }

    /// Key size the schedule was derived from
    pub fn key_size(&self) -> KeySize {
        self.size
    }

    /// Direction the round keys are ordered for
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The four words of round key `round` (0 ..= rounds)
    #[inline(always)]
    pub fn round_key(&self, round: usize) -> &[u32] {
        &self.words[round * AES_BLOCK_WORDS..(round + 1) * AES_BLOCK_WORDS]
    }

    /// Round key `round` as bytes, in block order
    pub fn round_key_bytes(&self, round: usize) -> [u8; AES_BLOCK_SIZE] {
        let mut out = [0u8; AES_BLOCK_SIZE];
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.round_key(round)) {
            chunk.copy_from_slice(&u32_to_le_bytes(*word));
        }
        out
    }
}

impl fmt::Debug for KeySchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeySchedule")
            .field("size", &self.size)
            .field("direction", &self.direction)
            .field("words", &"[REDACTED]")
            .finish()
    }
}

/// Rijndael key expansion into little-endian words
fn expand_words(key: &[u8], size: KeySize, w: &mut [u32; AES_MAX_SCHEDULE_WORDS]) {
    let nk = size.key_words();
    let total = size.schedule_words();

    // Initial key schedule
    for (i, chunk) in key.chunks_exact(4).enumerate() {
        w[i] = u32_from_le_bytes(chunk);
    }

    for i in nk..total {
        let mut temp = w[i - 1];
        if i % nk == 0 {
            temp = sub_word(rot_word(temp)) ^ RCON[i / nk];
        } else if nk > 6 && i % nk == 4 {
            temp = sub_word(temp);
        }
        w[i] = w[i - nk] ^ temp;
    }
}

/// Reverse the round order and pre-mix the middle round keys
fn invert_words(
    forward: &[u32; AES_MAX_SCHEDULE_WORDS],
    rounds: usize,
    out: &mut [u32; AES_MAX_SCHEDULE_WORDS],
) {
    for round in 0..=rounds {
        let src = (rounds - round) * AES_BLOCK_WORDS;
        let dst = round * AES_BLOCK_WORDS;
        for c in 0..AES_BLOCK_WORDS {
            let word = forward[src + c];
            out[dst + c] = if round == 0 || round == rounds {
                word
            } else {
                inv_mix_column(word)
            };
        }
    }
}
