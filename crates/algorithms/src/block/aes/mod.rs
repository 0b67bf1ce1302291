//! AES block cipher implementation
//!
//! This module implements the Advanced Encryption Standard (AES) block cipher
//! as specified in FIPS 197, for 128, 192 and 256-bit keys.
//!
//! The state is held as four little-endian column words (see
//! [`WordBlock`]). The S-boxes are computed at compile time from GF(2⁸)
//! inversion and the affine map, so the round function reduces to table
//! lookups plus word-wide XOR, shift and rotate operations.
//!
//! Note: table lookups are not constant-time with respect to cache timing.

use core::fmt;

use blockcrypt_common::security::barrier;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{BlockCipher, Direction, WordBlock};
use crate::error::Result;

mod round;
mod sbox;
pub mod schedule;

pub use schedule::{KeySchedule, KeySize};

use round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};

/// Encrypt one word-block under an encryption-order schedule
pub(crate) fn encrypt_words_with(schedule: &KeySchedule, block: &mut WordBlock) {
    debug_assert_eq!(schedule.direction(), Direction::Encrypt);
    let rounds = schedule.rounds();

    let mut state = *block;

    // Initial round - AddRoundKey
    add_round_key(&mut state, schedule.round_key(0));

    // Main rounds
    for round in 1..rounds {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, schedule.round_key(round));
    }

    // Final round
    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, schedule.round_key(rounds));

    *block = state;
    state.zeroize();
    barrier::compiler_fence_seq_cst();
}

/// Decrypt one word-block under a decryption-order schedule
pub(crate) fn decrypt_words_with(schedule: &KeySchedule, block: &mut WordBlock) {
    debug_assert_eq!(schedule.direction(), Direction::Decrypt);
    let rounds = schedule.rounds();

    let mut state = *block;

    // Initial round - AddRoundKey (final encryption round key)
    add_round_key(&mut state, schedule.round_key(0));

    // Main rounds; the middle keys are already InvMixColumns-ed
    for round in 1..rounds {
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        inv_mix_columns(&mut state);
        add_round_key(&mut state, schedule.round_key(round));
    }

    // Final round
    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);
    add_round_key(&mut state, schedule.round_key(rounds));

    *block = state;
    state.zeroize();
    barrier::compiler_fence_seq_cst();
}

/// AES block cipher keyed for both directions
///
/// The raw key is not retained; only the two expanded schedules are kept,
/// and both are zeroized when the cipher is dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes {
    encrypt: KeySchedule,
    decrypt: KeySchedule,
}

impl Aes {
    /// Expand `key` (16, 24 or 32 bytes) into encryption and decryption schedules
    pub fn new(key: &[u8]) -> Result<Self> {
        let encrypt = KeySchedule::expand(key, Direction::Encrypt)?;
        let decrypt = encrypt.to_decryption();
        Ok(Self { encrypt, decrypt })
    }

    /// Key size this cipher was built from
    pub fn key_size(&self) -> KeySize {
        self.encrypt.key_size()
    }

    /// Number of rounds
    pub fn rounds(&self) -> usize {
        self.encrypt.rounds()
    }

    /// The encryption-order schedule
    pub fn encryption_schedule(&self) -> &KeySchedule {
        &self.encrypt
    }

    /// The decryption-order schedule
    pub fn decryption_schedule(&self) -> &KeySchedule {
        &self.decrypt
    }
}

impl BlockCipher for Aes {
    fn name(&self) -> &'static str {
        self.key_size().name()
    }

    #[inline]
    fn encrypt_words(&self, block: &mut WordBlock) {
        encrypt_words_with(&self.encrypt, block);
    }

    #[inline]
    fn decrypt_words(&self, block: &mut WordBlock) {
        decrypt_words_with(&self.decrypt, block);
    }
}

impl fmt::Debug for Aes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Aes({}, [REDACTED])", self.key_size())
    }
}
