//! The incremental, buffer-bounded transform contract
//!
//! Every streaming component (the AES encoder/decoder as well as the hex
//! and base64 codecs) implements [`Transform`]. Callers push input in
//! arbitrary chunks and supply output buffers of arbitrary size; a
//! component that runs out of output space reports partial progress
//! instead of failing, and the caller resumes with a fresh buffer.

use crate::Result;

/// How far a single [`Transform::transform`] call got
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    /// Number of input bytes taken from the front of the input slice
    pub consumed: usize,
    /// Number of bytes written to the front of the output slice
    pub written: usize,
}

impl Progress {
    /// Create a progress report
    pub const fn new(consumed: usize, written: usize) -> Self {
        Self { consumed, written }
    }
}

/// Streaming transform with caller-provided output buffers
pub trait Transform {
    /// Consume as much of `input` as the remaining capacity of `output`
    /// allows.
    ///
    /// A too-small `output` is not an error: the returned [`Progress`]
    /// tells the caller how much input was taken and how much output was
    /// produced so it can call again with the rest of the input.
    fn transform(&mut self, input: &[u8], output: &mut [u8]) -> Result<Progress>;

    /// Flush any buffered data. Called exactly once, after all input has
    /// been supplied. `output` must hold at least
    /// [`min_finish_capacity`](Transform::min_finish_capacity) bytes.
    fn finish(&mut self, output: &mut [u8]) -> Result<usize>;

    /// Smallest output buffer `finish` accepts
    fn min_finish_capacity(&self) -> usize;
}
