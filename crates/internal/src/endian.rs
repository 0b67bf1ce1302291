//! Endianness utility functions
//!
//! The block core keeps its state as four column words packed
//! little-endian: byte `4c + r` of a block lives in bits `8r..8r + 8`
//! of word `c`.

/// Convert a u32 from little-endian byte order to native byte order
#[inline(always)]
pub fn u32_from_le_bytes(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Convert a u32 from native byte order to little-endian bytes
#[inline(always)]
pub fn u32_to_le_bytes(value: u32) -> [u8; 4] {
    value.to_le_bytes()
}

/// Pack a 16-byte block into four little-endian column words
#[inline(always)]
pub fn words_from_le_bytes(bytes: &[u8; 16]) -> [u32; 4] {
    [
        u32_from_le_bytes(&bytes[0..4]),
        u32_from_le_bytes(&bytes[4..8]),
        u32_from_le_bytes(&bytes[8..12]),
        u32_from_le_bytes(&bytes[12..16]),
    ]
}

/// Unpack four little-endian column words into a 16-byte block
#[inline(always)]
pub fn words_to_le_bytes(words: &[u32; 4]) -> [u8; 16] {
    let mut out = [0u8; 16];
    for (chunk, word) in out.chunks_exact_mut(4).zip(words.iter()) {
        chunk.copy_from_slice(&u32_to_le_bytes(*word));
    }
    out
}
