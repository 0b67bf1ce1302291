//! Cipher Feedback (CFB) mode, full-block (CFB128) variant
//!
//! The previous ciphertext block is encrypted to form the keystream for
//! the next one. Only the forward cipher is used in both directions.

use zeroize::Zeroize;

use crate::block::{xor_words, BlockCipher, WordBlock};

/// C = P ⊕ E(R), then R = C
#[inline]
pub fn encrypt_step<B: BlockCipher>(cipher: &B, register: &mut WordBlock, block: &mut WordBlock) {
    cipher.encrypt_words(register);
    xor_words(block, register);
    *register = *block;
}

/// P = C ⊕ E(R), then R = C
#[inline]
pub fn decrypt_step<B: BlockCipher>(cipher: &B, register: &mut WordBlock, block: &mut WordBlock) {
    let mut keystream = *register;
    cipher.encrypt_words(&mut keystream);
    *register = *block;
    xor_words(block, &keystream);
    keystream.zeroize();
}
