//! Counter (CTR) mode
//!
//! Counter mode turns a block cipher into a stream cipher by encrypting
//! successive values of a counter and XORing the result with the data.
//! The whole 16-byte register is the counter, read as a big-endian
//! 128-bit integer and incremented with wraparound after every block
//! (NIST SP 800-38A, appendix B.1 with m = 128).

use blockcrypt_internal::endian::{words_from_le_bytes, words_to_le_bytes};
use byteorder::{BigEndian, ByteOrder};
use zeroize::Zeroize;

use crate::block::{xor_words, BlockCipher, WordBlock};

/// Add one to the counter block, wrapping at 2^128
pub fn increment(register: &mut WordBlock) {
    let mut bytes = words_to_le_bytes(register);
    let counter = BigEndian::read_u128(&bytes).wrapping_add(1);
    BigEndian::write_u128(&mut bytes, counter);
    *register = words_from_le_bytes(&bytes);
    bytes.zeroize();
}

/// C = P ⊕ E(R), then R = R + 1
#[inline]
pub fn encrypt_step<B: BlockCipher>(cipher: &B, register: &mut WordBlock, block: &mut WordBlock) {
    let mut keystream = *register;
    cipher.encrypt_words(&mut keystream);
    xor_words(block, &keystream);
    increment(register);
    keystream.zeroize();
}

/// P = C ⊕ E(R), then R = R + 1
#[inline]
pub fn decrypt_step<B: BlockCipher>(cipher: &B, register: &mut WordBlock, block: &mut WordBlock) {
    encrypt_step(cipher, register, block);
}
