//! Block padding schemes
//!
//! The streaming cipher pads the final plaintext block on encryption and
//! strips the padding on decryption. The PKCS#7 check runs in constant
//! time over the whole final block.

use core::fmt;
use core::str::FromStr;

use blockcrypt_internal::constant_time::{ct_eq_u8, ct_gt_u8};
use blockcrypt_params::utils::symmetric::AES_BLOCK_SIZE;
use subtle::Choice;

use crate::error::{Error, Result};

/// Padding applied to the final block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Padding {
    /// PKCS#7: `n` bytes of value `n`, always at least one byte
    #[default]
    Pkcs7,
    /// Zero bytes up to the block boundary, nothing when already aligned.
    /// Not removed on decryption.
    Zero,
}

impl Padding {
    /// Lower-case name of the scheme
    pub const fn name(&self) -> &'static str {
        match self {
            Padding::Pkcs7 => "pkcs7",
            Padding::Zero => "zero",
        }
    }

    /// Fill `block[pending..]` with padding bytes.
    ///
    /// `pending` is the number of message bytes already at the front of
    /// the block.
    pub fn pad(&self, block: &mut [u8; AES_BLOCK_SIZE], pending: usize) {
        debug_assert!(pending < AES_BLOCK_SIZE);
        let value = match self {
            Padding::Pkcs7 => (AES_BLOCK_SIZE - pending) as u8,
            Padding::Zero => 0,
        };
        block[pending..].fill(value);
    }
}

impl fmt::Display for Padding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Padding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pkcs7" | "pkcs#7" | "pkcs5" => Ok(Padding::Pkcs7),
            "zero" | "zeros" | "none" => Ok(Padding::Zero),
            _ => Err(Error::InvalidParameter {
                context: "padding",
                message: format!("unknown padding scheme '{}'", s),
            }),
        }
    }
}

/// Number of message bytes in a PKCS#7-padded final block.
///
/// Every byte of the block is inspected regardless of where the padding
/// starts, and the verdict is only collapsed to a `bool` at the end.
pub fn pkcs7_unpadded_len(block: &[u8; AES_BLOCK_SIZE]) -> Result<usize> {
    let pad = block[AES_BLOCK_SIZE - 1];

    let mut valid: Choice = !ct_eq_u8(pad, 0) & !ct_gt_u8(pad, AES_BLOCK_SIZE as u8);
    for (i, &byte) in block.iter().enumerate() {
        let distance_from_end = (AES_BLOCK_SIZE - i) as u8;
        let in_padding = !ct_gt_u8(distance_from_end, pad);
        valid &= !in_padding | ct_eq_u8(byte, pad);
    }

    if bool::from(valid) {
        Ok(AES_BLOCK_SIZE - pad as usize)
    } else {
        Err(Error::InvalidPadding {
            context: "PKCS#7 final block",
        })
    }
}
