//! Word-level AES round functions
//!
//! State columns are `u32` words with row `r` in bits `8r..8r + 8`, so
//! ShiftRows becomes a byte-lane mask-and-merge across the four words and
//! MixColumns a lane rotation within one word.

use super::sbox::{INV_SBOX, SBOX};
use crate::block::WordBlock;

/// Multiply every byte lane by 2 in GF(2⁸)
#[inline(always)]
fn xtime(w: u32) -> u32 {
    ((w & 0x7f7f_7f7f) << 1) ^ (((w >> 7) & 0x0101_0101) * 0x1b)
}

/// Substitutes each byte in a word using the forward S-box
#[inline(always)]
pub(crate) fn sub_word(word: u32) -> u32 {
    let b = word.to_le_bytes();
    u32::from_le_bytes([
        SBOX[b[0] as usize],
        SBOX[b[1] as usize],
        SBOX[b[2] as usize],
        SBOX[b[3] as usize],
    ])
}

#[inline(always)]
fn inv_sub_word(word: u32) -> u32 {
    let b = word.to_le_bytes();
    u32::from_le_bytes([
        INV_SBOX[b[0] as usize],
        INV_SBOX[b[1] as usize],
        INV_SBOX[b[2] as usize],
        INV_SBOX[b[3] as usize],
    ])
}

/// RotWord: `[a0, a1, a2, a3]` becomes `[a1, a2, a3, a0]`
#[inline(always)]
pub(crate) fn rot_word(word: u32) -> u32 {
    word.rotate_right(8)
}

/// MixColumns on one column
#[inline(always)]
pub(crate) fn mix_column(w: u32) -> u32 {
    let r1 = w.rotate_right(8);
    xtime(w ^ r1) ^ r1 ^ w.rotate_right(16) ^ w.rotate_right(24)
}

/// InvMixColumns on one column
///
/// Uses InvMixColumns = MixColumns ∘ circ(05, 00, 04, 00).
#[inline(always)]
pub(crate) fn inv_mix_column(w: u32) -> u32 {
    let t = xtime(xtime(w ^ w.rotate_right(16)));
    mix_column(w ^ t)
}

#[inline(always)]
pub(crate) fn add_round_key(state: &mut WordBlock, round_key: &[u32]) {
    state[0] ^= round_key[0];
    state[1] ^= round_key[1];
    state[2] ^= round_key[2];
    state[3] ^= round_key[3];
}

#[inline(always)]
pub(crate) fn sub_bytes(state: &mut WordBlock) {
    for w in state.iter_mut() {
        *w = sub_word(*w);
    }
}

#[inline(always)]
pub(crate) fn inv_sub_bytes(state: &mut WordBlock) {
    for w in state.iter_mut() {
        *w = inv_sub_word(*w);
    }
}

const ROW0: u32 = 0x0000_00ff;
const ROW1: u32 = 0x0000_ff00;
const ROW2: u32 = 0x00ff_0000;
const ROW3: u32 = 0xff00_0000;

/// ShiftRows: row `r` moves left by `r` columns
#[inline(always)]
pub(crate) fn shift_rows(state: &mut WordBlock) {
    let s = *state;
    for c in 0..4 {
        state[c] = (s[c] & ROW0)
            | (s[(c + 1) % 4] & ROW1)
            | (s[(c + 2) % 4] & ROW2)
            | (s[(c + 3) % 4] & ROW3);
    }
}

/// InvShiftRows: row `r` moves right by `r` columns
#[inline(always)]
pub(crate) fn inv_shift_rows(state: &mut WordBlock) {
    let s = *state;
    for c in 0..4 {
        state[c] = (s[c] & ROW0)
            | (s[(c + 3) % 4] & ROW1)
            | (s[(c + 2) % 4] & ROW2)
            | (s[(c + 1) % 4] & ROW3);
    }
}

#[inline(always)]
pub(crate) fn mix_columns(state: &mut WordBlock) {
    for w in state.iter_mut() {
        *w = mix_column(*w);
    }
}

#[inline(always)]
pub(crate) fn inv_mix_columns(state: &mut WordBlock) {
    for w in state.iter_mut() {
        *w = inv_mix_column(*w);
    }
}
