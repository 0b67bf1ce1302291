//! Constant-time operations to prevent timing attacks

use subtle::{Choice, ConstantTimeEq, ConstantTimeGreater};

/// `a > b` for bytes, as a `Choice`
#[inline]
pub fn ct_gt_u8(a: u8, b: u8) -> Choice {
    a.ct_gt(&b)
}

/// `a == b` for bytes, as a `Choice`
#[inline]
pub fn ct_eq_u8(a: u8, b: u8) -> Choice {
    a.ct_eq(&b)
}
