//! Validation utilities for block cipher primitives

use super::{Error, Result};

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that a length is a whole number of blocks
#[inline(always)]
pub fn block_multiple(context: &'static str, actual: usize, block_size: usize) -> Result<()> {
    if actual % block_size != 0 {
        return Err(Error::Length {
            context,
            expected: actual.div_ceil(block_size) * block_size,
            actual,
        });
    }
    Ok(())
}
