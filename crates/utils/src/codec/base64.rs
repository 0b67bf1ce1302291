//! Streaming base64 codec, standard alphabet with `=` padding

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use blockcrypt_api::{Error, Progress, Result, Transform};

const QUAD: usize = 4;
const TRIPLE: usize = 3;

fn encoding_error(message: String) -> Error {
    Error::InvalidEncoding {
        context: "base64",
        message,
    }
}

/// Bytes to base64 text
#[derive(Debug, Default, Clone)]
pub struct Base64Encoder {
    pending: [u8; TRIPLE],
    pending_len: usize,
    finished: bool,
}

impl Base64Encoder {
    /// Create an encoder
    pub fn new() -> Self {
        Self::default()
    }

    fn encode_into(input: &[u8], output: &mut [u8]) -> Result<usize> {
        STANDARD
            .encode_slice(input, output)
            .map_err(|err| encoding_error(err.to_string()))
    }
}

impl Transform for Base64Encoder {
    fn transform(&mut self, input: &[u8], output: &mut [u8]) -> Result<Progress> {
        if self.finished {
            return Err(Error::stream_state("transform", "stream already finished"));
        }
        let mut progress = Progress::default();

        // Top up a carried partial group first
        if self.pending_len > 0 {
            let need = TRIPLE - self.pending_len;
            if input.len() < need {
                self.pending[self.pending_len..self.pending_len + input.len()]
                    .copy_from_slice(input);
                self.pending_len += input.len();
                return Ok(Progress::new(input.len(), 0));
            }
            if output.len() < QUAD {
                return Ok(progress);
            }
            self.pending[self.pending_len..].copy_from_slice(&input[..need]);
            progress.written += Self::encode_into(&self.pending, &mut output[..QUAD])?;
            progress.consumed += need;
            self.pending_len = 0;
        }

        let rest = &input[progress.consumed..];
        let groups = (rest.len() / TRIPLE).min((output.len() - progress.written) / QUAD);
        if groups > 0 {
            progress.written += Self::encode_into(
                &rest[..groups * TRIPLE],
                &mut output[progress.written..progress.written + groups * QUAD],
            )?;
            progress.consumed += groups * TRIPLE;
        }

        let tail = input.len() - progress.consumed;
        if tail < TRIPLE {
            self.pending[..tail].copy_from_slice(&input[progress.consumed..]);
            self.pending_len = tail;
            progress.consumed += tail;
        }

        Ok(progress)
    }

    fn finish(&mut self, output: &mut [u8]) -> Result<usize> {
        if self.finished {
            return Err(Error::stream_state("finish", "stream already finished"));
        }
        if output.len() < QUAD {
            return Err(Error::InvalidLength {
                context: "base64 finish output buffer",
                expected: QUAD,
                actual: output.len(),
            });
        }
        self.finished = true;
        if self.pending_len == 0 {
            return Ok(0);
        }
        let written = Self::encode_into(&self.pending[..self.pending_len], &mut output[..QUAD])?;
        self.pending_len = 0;
        Ok(written)
    }

    fn min_finish_capacity(&self) -> usize {
        QUAD
    }
}

/// Base64 text to bytes
///
/// Input is decoded four characters at a time; a quad split across calls
/// is carried over. Nothing may follow a padded quad.
#[derive(Debug, Default, Clone)]
pub struct Base64Decoder {
    pending: [u8; QUAD],
    pending_len: usize,
    padded: bool,
    finished: bool,
}

impl Base64Decoder {
    /// Create a decoder
    pub fn new() -> Self {
        Self::default()
    }

    fn decode_quad(&self, quad: &[u8]) -> Result<([u8; TRIPLE], usize)> {
        if self.padded {
            return Err(encoding_error("data after padding".to_string()));
        }
        let mut scratch = [0u8; TRIPLE];
        let n = STANDARD
            .decode_slice(quad, &mut scratch)
            .map_err(|err| encoding_error(err.to_string()))?;
        Ok((scratch, n))
    }
}

impl Transform for Base64Decoder {
    fn transform(&mut self, input: &[u8], output: &mut [u8]) -> Result<Progress> {
        if self.finished {
            return Err(Error::stream_state("transform", "stream already finished"));
        }
        let mut progress = Progress::default();

        while progress.consumed < input.len() {
            let need = QUAD - self.pending_len;
            let available = input.len() - progress.consumed;
            if available < need {
                let end = self.pending_len + available;
                self.pending[self.pending_len..end].copy_from_slice(&input[progress.consumed..]);
                self.pending_len = end;
                progress.consumed += available;
                break;
            }

            let mut quad = self.pending;
            quad[self.pending_len..]
                .copy_from_slice(&input[progress.consumed..progress.consumed + need]);
            let (decoded, n) = self.decode_quad(&quad)?;
            if output.len() - progress.written < n {
                break;
            }

            output[progress.written..progress.written + n].copy_from_slice(&decoded[..n]);
            progress.written += n;
            progress.consumed += need;
            self.pending_len = 0;
            self.padded = quad[QUAD - 1] == b'=';
        }

        Ok(progress)
    }

    fn finish(&mut self, _output: &mut [u8]) -> Result<usize> {
        if self.finished {
            return Err(Error::stream_state("finish", "stream already finished"));
        }
        self.finished = true;
        if self.pending_len != 0 {
            return Err(encoding_error(format!(
                "truncated input: {} trailing characters",
                self.pending_len
            )));
        }
        Ok(0)
    }

    fn min_finish_capacity(&self) -> usize {
        0
    }
}
