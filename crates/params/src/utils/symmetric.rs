//! Constants for the AES/Rijndael block cipher

/// AES-128 key size in bytes
pub const AES128_KEY_SIZE: usize = 16;

/// AES-192 key size in bytes
pub const AES192_KEY_SIZE: usize = 24;

/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// Number of 32-bit words in one AES block
pub const AES_BLOCK_WORDS: usize = AES_BLOCK_SIZE / 4;

/// Number of rounds for AES-128
pub const AES128_ROUNDS: usize = 10;

/// Number of rounds for AES-192
pub const AES192_ROUNDS: usize = 12;

/// Number of rounds for AES-256
pub const AES256_ROUNDS: usize = 14;

/// Capacity of an expanded key schedule in 32-bit words.
///
/// Sized for AES-256: `4 * (14 + 1)`.
pub const AES_MAX_SCHEDULE_WORDS: usize = AES_BLOCK_WORDS * (AES256_ROUNDS + 1);
