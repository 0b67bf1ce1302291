//! Streaming hex codec (lower-case output, either case accepted)

use blockcrypt_api::{Error, Progress, Result, Transform};

fn encoding_error(err: hex::FromHexError) -> Error {
    Error::InvalidEncoding {
        context: "hex",
        message: err.to_string(),
    }
}

/// Bytes to hex digits
#[derive(Debug, Default, Clone)]
pub struct HexEncoder {
    finished: bool,
}

impl HexEncoder {
    /// Create an encoder
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transform for HexEncoder {
    fn transform(&mut self, input: &[u8], output: &mut [u8]) -> Result<Progress> {
        if self.finished {
            return Err(Error::stream_state("transform", "stream already finished"));
        }
        let n = input.len().min(output.len() / 2);
        hex::encode_to_slice(&input[..n], &mut output[..2 * n]).map_err(encoding_error)?;
        Ok(Progress::new(n, 2 * n))
    }

    fn finish(&mut self, _output: &mut [u8]) -> Result<usize> {
        if self.finished {
            return Err(Error::stream_state("finish", "stream already finished"));
        }
        self.finished = true;
        Ok(0)
    }

    fn min_finish_capacity(&self) -> usize {
        0
    }
}

/// Hex digits to bytes
///
/// An odd digit at the end of one chunk is kept until the next chunk
/// supplies its partner.
#[derive(Debug, Default, Clone)]
pub struct HexDecoder {
    pending: Option<u8>,
    finished: bool,
}

impl HexDecoder {
    /// Create a decoder
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transform for HexDecoder {
    fn transform(&mut self, input: &[u8], output: &mut [u8]) -> Result<Progress> {
        if self.finished {
            return Err(Error::stream_state("transform", "stream already finished"));
        }
        let mut progress = Progress::default();

        if let Some(high) = self.pending {
            if input.is_empty() || output.is_empty() {
                return Ok(progress);
            }
            hex::decode_to_slice([high, input[0]], &mut output[..1]).map_err(encoding_error)?;
            self.pending = None;
            progress = Progress::new(1, 1);
        }

        let rest = &input[progress.consumed..];
        let pairs = (rest.len() / 2).min(output.len() - progress.written);
        hex::decode_to_slice(
            &rest[..2 * pairs],
            &mut output[progress.written..progress.written + pairs],
        )
        .map_err(encoding_error)?;
        progress.consumed += 2 * pairs;
        progress.written += pairs;

        // A lone trailing digit is buffered
        if input.len() - progress.consumed == 1 {
            self.pending = Some(input[progress.consumed]);
            progress.consumed += 1;
        }

        Ok(progress)
    }

    fn finish(&mut self, _output: &mut [u8]) -> Result<usize> {
        if self.finished {
            return Err(Error::stream_state("finish", "stream already finished"));
        }
        self.finished = true;
        if self.pending.take().is_some() {
            return Err(Error::InvalidEncoding {
                context: "hex",
                message: "odd number of hex digits".to_string(),
            });
        }
        Ok(0)
    }

    fn min_finish_capacity(&self) -> usize {
        0
    }
}
