//! Propagating Cipher Block Chaining (PCBC) mode
//!
//! Like CBC, but the chaining value is the XOR of the previous plaintext
//! and ciphertext blocks, so a single corrupted ciphertext block garbles
//! every block that follows it.

use zeroize::Zeroize;

use crate::block::{xor_words, BlockCipher, WordBlock};

/// C = E(P ⊕ R), then R = C ⊕ P
#[inline]
pub fn encrypt_step<B: BlockCipher>(cipher: &B, register: &mut WordBlock, block: &mut WordBlock) {
    let mut plaintext = *block;
    xor_words(block, register);
    cipher.encrypt_words(block);
    *register = *block;
    xor_words(register, &plaintext);
    plaintext.zeroize();
}

/// P = D(C) ⊕ R, then R = C ⊕ P
#[inline]
pub fn decrypt_step<B: BlockCipher>(cipher: &B, register: &mut WordBlock, block: &mut WordBlock) {
    let mut ciphertext = *block;
    cipher.decrypt_words(block);
    xor_words(block, register);
    *register = ciphertext;
    xor_words(register, block);
    ciphertext.zeroize();
}
