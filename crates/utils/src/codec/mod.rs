//! Streaming text codecs and transform drivers
//!
//! The codecs follow the same backpressure rules as the cipher: a call
//! consumes only whole input units whose output fits, buffers a trailing
//! partial unit, and reports what it did through [`Progress`].

use blockcrypt_api::error::validate;
use blockcrypt_api::{Error, Progress, Result, Transform};
use tracing::trace;

mod base64;
mod hex;

pub use self::base64::{Base64Decoder, Base64Encoder};
pub use self::hex::{HexDecoder, HexEncoder};

/// Input slice size used by [`transform_all`]
const DEFAULT_CHUNK: usize = 4096;

/// Output buffer size used by [`transform_all`]
const DEFAULT_OUT_CHUNK: usize = 8192;

/// Run `transform` over all of `input` and finish it
pub fn transform_all<T: Transform>(transform: &mut T, input: &[u8]) -> Result<Vec<u8>> {
    transform_chunked(transform, input, DEFAULT_CHUNK, DEFAULT_OUT_CHUNK)
}

/// Run `transform` over `input` fed `chunk` bytes at a time into output
/// buffers of `out_chunk` bytes, then finish it.
///
/// Fails if `out_chunk` is too small for the transform to make progress.
pub fn transform_chunked<T: Transform>(
    transform: &mut T,
    input: &[u8],
    chunk: usize,
    out_chunk: usize,
) -> Result<Vec<u8>> {
    validate::parameter(
        chunk != 0 && out_chunk != 0,
        "transform_chunked",
        "chunk sizes must be non-zero",
    )?;

    let mut collected = Vec::with_capacity(input.len() + out_chunk);
    let mut buffer = vec![0u8; out_chunk.max(transform.min_finish_capacity())];
    let mut calls = 0usize;

    for piece in input.chunks(chunk) {
        let mut offset = 0;
        while offset < piece.len() {
            let Progress { consumed, written } =
                transform.transform(&piece[offset..], &mut buffer[..out_chunk])?;
            calls += 1;
            if consumed == 0 && written == 0 {
                return Err(Error::InvalidParameter {
                    context: "transform_chunked",
                    message: format!("output chunk of {} bytes is too small", out_chunk),
                });
            }
            collected.extend_from_slice(&buffer[..written]);
            offset += consumed;
        }
    }

    let written = transform.finish(&mut buffer)?;
    collected.extend_from_slice(&buffer[..written]);
    trace!(input = input.len(), output = collected.len(), calls, "transform drained");
    Ok(collected)
}
