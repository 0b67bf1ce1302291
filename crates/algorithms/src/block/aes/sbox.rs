//! AES substitution boxes
//!
//! Both tables are derived at compile time from the field definition:
//! the forward box is the multiplicative inverse in GF(2⁸) followed by
//! the affine map, the inverse box is its permutation inverse.

/// Multiply two bytes in GF(2⁸) with AES's reduction poly x⁸ + x⁴ + x³ + x + 1
const fn gf_mul(a: u8, b: u8) -> u8 {
    let mut p = 0u8;
    let mut a = a;
    let mut b = b;
    let mut i = 0;
    while i < 8 {
        // mask = 0xFF if b&1==1 else 0x00
        let mask = (b & 1).wrapping_neg();
        p ^= a & mask;
        let hi = a & 0x80;
        a <<= 1;
        // if hi was set, reduce by 0x1B
        a ^= ((hi != 0) as u8) * 0x1B;
        b >>= 1;
        i += 1;
    }
    p
}

/// Raise to the 254th power (b⁻¹ in GF(2⁸)); maps 0 to 0
const fn gf_inv(x: u8) -> u8 {
    let x2 = gf_mul(x, x);
    let x4 = gf_mul(x2, x2);
    let x8 = gf_mul(x4, x4);
    let x16 = gf_mul(x8, x8);
    let x32 = gf_mul(x16, x16);
    let x64 = gf_mul(x32, x32);
    let x128 = gf_mul(x64, x64);
    // x^254 = x128·x64·x32·x16·x8·x4·x2
    let mut y = gf_mul(x128, x64);
    y = gf_mul(y, x32);
    y = gf_mul(y, x16);
    y = gf_mul(y, x8);
    y = gf_mul(y, x4);
    gf_mul(y, x2)
}

/// inv(x) ⊕ ROTL(inv(x),1–4) ⊕ 0x63
const fn affine_sbox(x: u8) -> u8 {
    let i = gf_inv(x);
    i ^ i.rotate_left(1) ^ i.rotate_left(2) ^ i.rotate_left(3) ^ i.rotate_left(4) ^ 0x63
}

const fn build_sbox() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = affine_sbox(i as u8);
        i += 1;
    }
    table
}

const fn build_inv_sbox(forward: &[u8; 256]) -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[forward[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Forward S-box
pub(crate) const SBOX: [u8; 256] = build_sbox();

/// Inverse S-box
pub(crate) const INV_SBOX: [u8; 256] = build_inv_sbox(&SBOX);
