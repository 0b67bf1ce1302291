//! Electronic Codebook (ECB) mode
//!
//! Every block is transformed independently under the same key. Identical
//! plaintext blocks produce identical ciphertext blocks, so ECB should
//! only carry single blocks or data without structure.

use crate::block::{BlockCipher, WordBlock};

/// C = E(P)
#[inline(always)]
pub fn encrypt_step<B: BlockCipher>(cipher: &B, _register: &mut WordBlock, block: &mut WordBlock) {
    cipher.encrypt_words(block);
}

/// P = D(C)
#[inline(always)]
pub fn decrypt_step<B: BlockCipher>(cipher: &B, _register: &mut WordBlock, block: &mut WordBlock) {
    cipher.decrypt_words(block);
}
