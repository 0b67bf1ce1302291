//! Secret data types with guaranteed zeroization
//!
//! This module provides wrappers for sensitive data that ensure it is
//! wiped when no longer needed.

use core::fmt;
use core::ops::{Deref, DerefMut};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Fixed-size secret buffer with a fill counter
///
/// Used for partial blocks awaiting more input and for plaintext held back
/// until the padding can be checked. The whole array, including bytes past
/// `len`, is zeroized on drop and on [`clear`](SecretBuffer::clear).
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretBuffer<const N: usize> {
    data: [u8; N],
    len: usize,
}

impl<const N: usize> SecretBuffer<N> {
    /// Create a full secret buffer with the given data
    pub fn new(data: [u8; N]) -> Self {
        Self { data, len: N }
    }

    /// Create an empty, zeroed secret buffer
    pub fn zeroed() -> Self {
        Self {
            data: [0u8; N],
            len: 0,
        }
    }

    /// Capacity of the buffer
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Number of filled bytes
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if no bytes are filled
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True if every byte is filled
    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// Free space left
    pub fn remaining(&self) -> usize {
        N - self.len
    }

    /// Append as much of `input` as fits; returns the number of bytes taken
    pub fn fill_from(&mut self, input: &[u8]) -> usize {
        let take = self.remaining().min(input.len());
        self.data[self.len..self.len + take].copy_from_slice(&input[..take]);
        self.len += take;
        take
    }

    /// The filled part of the buffer
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// The whole backing array, filled or not
    pub fn as_array(&self) -> &[u8; N] {
        &self.data
    }

    /// Mutable access to the whole backing array
    pub fn as_mut_array(&mut self) -> &mut [u8; N] {
        &mut self.data
    }

    /// Mark the buffer as full after writing through [`as_mut_array`](Self::as_mut_array)
    pub fn set_full(&mut self) {
        self.len = N;
    }

    /// Zeroize the contents and reset the fill counter
    pub fn clear(&mut self) {
        self.data.zeroize();
        self.len = 0;
    }
}

impl<const N: usize> Default for SecretBuffer<N> {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl<const N: usize> AsRef<[u8]> for SecretBuffer<N> {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl<const N: usize> fmt::Debug for SecretBuffer<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBuffer<{}>(len={}, [REDACTED])", N, self.len)
    }
}

/// Guard type that ensures a value is zeroized when dropped
///
/// This is useful for ensuring cleanup happens even in the presence
/// of early returns or panics.
pub struct ZeroizeGuard<'a, T: Zeroize> {
    value: &'a mut T,
}

impl<'a, T: Zeroize> ZeroizeGuard<'a, T> {
    /// Create a new zeroize guard for the given value
    pub fn new(value: &'a mut T) -> Self {
        Self { value }
    }
}

impl<T: Zeroize> Drop for ZeroizeGuard<'_, T> {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

impl<T: Zeroize> Deref for ZeroizeGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.value
    }
}

impl<T: Zeroize> DerefMut for ZeroizeGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.value
    }
}
