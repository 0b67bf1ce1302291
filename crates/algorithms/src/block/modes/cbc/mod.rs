//! Cipher Block Chaining (CBC) mode
//!
//! Each plaintext block is XORed with the previous ciphertext block before
//! encryption; the first block is XORed with the IV. Follows NIST
//! SP 800-38A, section 6.2.

use zeroize::Zeroize;

use crate::block::{xor_words, BlockCipher, WordBlock};

/// C = E(P ⊕ R), then R = C
#[inline]
pub fn encrypt_step<B: BlockCipher>(cipher: &B, register: &mut WordBlock, block: &mut WordBlock) {
    xor_words(block, register);
    cipher.encrypt_words(block);
    *register = *block;
}

/// P = D(C) ⊕ R, then R = C
#[inline]
pub fn decrypt_step<B: BlockCipher>(cipher: &B, register: &mut WordBlock, block: &mut WordBlock) {
    let mut ciphertext = *block;
    cipher.decrypt_words(block);
    xor_words(block, register);
    *register = ciphertext;
    ciphertext.zeroize();
}
