//! Output Feedback (OFB) mode
//!
//! The register is repeatedly encrypted to produce a keystream that does
//! not depend on the data. Encryption and decryption are the same
//! operation.

use crate::block::{xor_words, BlockCipher, WordBlock};

/// O = E(R); C = P ⊕ O; R = O
#[inline]
pub fn encrypt_step<B: BlockCipher>(cipher: &B, register: &mut WordBlock, block: &mut WordBlock) {
    cipher.encrypt_words(register);
    xor_words(block, register);
}

/// O = E(R); P = C ⊕ O; R = O
#[inline]
pub fn decrypt_step<B: BlockCipher>(cipher: &B, register: &mut WordBlock, block: &mut WordBlock) {
    encrypt_step(cipher, register, block);
}
