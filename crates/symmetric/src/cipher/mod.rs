//! Streaming AES encryption and decryption
//!
//! [`AesEncoder`] and [`AesDecoder`] implement the [`Transform`] contract
//! on top of a shared [`CipherCore`]. Input may arrive in pieces of any
//! size; the core buffers a partial block, runs every completed block
//! through the [`ModeEngine`] and writes 16-byte results only while the
//! caller's output buffer has room for them.
//!
//! Setup calls (`set_key`, `set_iv`, `set_padding`) are refused once any
//! data has been accepted, until [`reset`](CipherCore::reset) is called.
//!
//! [`Transform`]: blockcrypt_api::Transform

use blockcrypt_algorithms::block::{Aes, Direction, Mode, ModeEngine, WordBlock};
use blockcrypt_api::Progress;
use blockcrypt_common::SecretBuffer;
use blockcrypt_internal::endian::words_from_le_bytes;
use blockcrypt_params::utils::symmetric::AES_BLOCK_SIZE;
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::config::CipherConfig;
use crate::error::{validate, validate_stream_state, Error, Result};
use crate::padding::Padding;

mod decoder;
mod encoder;

pub use decoder::AesDecoder;
pub use encoder::AesEncoder;

/// State shared by the encoder and decoder
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct CipherCore {
    engine: Option<ModeEngine<Aes>>,
    iv: WordBlock,
    pending: SecretBuffer<AES_BLOCK_SIZE>,
    held: SecretBuffer<AES_BLOCK_SIZE>,
    #[zeroize(skip)]
    direction: Direction,
    #[zeroize(skip)]
    padding: Padding,
    #[zeroize(skip)]
    started: bool,
    #[zeroize(skip)]
    finished: bool,
}

impl CipherCore {
    /// Create an unkeyed core for `direction`
    pub fn new(direction: Direction) -> Self {
        Self {
            engine: None,
            iv: [0u32; 4],
            pending: SecretBuffer::zeroed(),
            held: SecretBuffer::zeroed(),
            direction,
            padding: Padding::default(),
            started: false,
            finished: false,
        }
    }

    /// Expand `key` and bind it to `mode`.
    ///
    /// A previously configured IV is kept.
    pub fn set_key(&mut self, key: &[u8], mode: Mode) -> Result<()> {
        self.ensure_configurable("set_key")?;

        let aes = Aes::new(key).map_err(Error::from)?;
        debug!(
            key_size = %aes.key_size(),
            mode = %mode,
            direction = %self.direction,
            "cipher key installed"
        );

        let mut engine = ModeEngine::new(aes, mode, self.direction);
        engine.set_iv_words(self.iv);
        self.engine = Some(engine);
        Ok(())
    }

    /// Set the IV from exactly 16 bytes
    pub fn set_iv(&mut self, iv: &[u8]) -> Result<()> {
        validate::length("initialization vector", iv.len(), AES_BLOCK_SIZE)?;
        let mut block = [0u8; AES_BLOCK_SIZE];
        block.copy_from_slice(iv);
        let result = self.set_iv_words(words_from_le_bytes(&block));
        block.zeroize();
        result
    }

    /// Set the IV as a word-block
    pub fn set_iv_words(&mut self, iv: WordBlock) -> Result<()> {
        self.ensure_configurable("set_iv")?;
        let engine = self
            .engine
            .as_mut()
            .ok_or_else(|| Error::stream_state("set_iv", "no key installed"))?;
        engine.set_iv_words(iv);
        self.iv = iv;
        Ok(())
    }

    /// Choose the final-block padding
    pub fn set_padding(&mut self, padding: Padding) -> Result<()> {
        self.ensure_configurable("set_padding")?;
        validate_stream_state(self.engine.is_some(), "set_padding", "no key installed")?;
        self.padding = padding;
        Ok(())
    }

    /// Apply key, mode, padding and IV in one step
    pub fn configure(&mut self, key: &[u8], config: &CipherConfig) -> Result<()> {
        self.set_key(key, config.mode)?;
        self.set_padding(config.padding)?;
        match config.iv {
            Some(iv) => self.set_iv(&iv),
            None => self.set_iv_words([0u32; 4]),
        }
    }

    /// Rewind to the start of a new message under the same key and IV
    pub fn reset(&mut self) {
        if let Some(engine) = self.engine.as_mut() {
            engine.reset();
        }
        self.pending.clear();
        self.held.clear();
        self.started = false;
        self.finished = false;
    }

    /// The configured chaining mode, if a key is installed
    pub fn mode(&self) -> Option<Mode> {
        self.engine.as_ref().map(|engine| engine.mode())
    }

    /// The configured padding
    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// The direction this core runs in
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// True once any input byte has been accepted
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// True after a successful or failed `finish`
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Bytes waiting for the rest of their block
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Whether the last output block is held back for padding removal
    fn holds_last_block(&self) -> bool {
        self.direction == Direction::Decrypt && self.padding == Padding::Pkcs7
    }

    fn ensure_configurable(&self, operation: &'static str) -> Result<()> {
        validate_stream_state(
            !self.started,
            operation,
            "data already accepted; call reset first",
        )?;
        validate_stream_state(
            !self.finished,
            operation,
            "stream already finished; call reset first",
        )
    }

    fn ensure_open(&self, operation: &'static str) -> Result<()> {
        validate_stream_state(self.engine.is_some(), operation, "no key installed")?;
        validate_stream_state(!self.finished, operation, "stream already finished")
    }

    /// Buffer input and emit every completed block that fits in `output`
    fn absorb(&mut self, input: &[u8], output: &mut [u8]) -> Result<Progress> {
        self.ensure_open("transform")?;
        let hold = self.holds_last_block();
        let engine = self
            .engine
            .as_mut()
            .ok_or_else(|| Error::stream_state("transform", "no key installed"))?;

        let mut progress = Progress::default();
        while progress.consumed < input.len() {
            let remaining = self.pending.remaining();
            let completes = input.len() - progress.consumed >= remaining;
            if completes {
                let emits = !hold || !self.held.is_empty();
                if emits && output.len() - progress.written < AES_BLOCK_SIZE {
                    // Take everything short of the completing byte
                    let end = progress.consumed + remaining - 1;
                    progress.consumed += self.pending.fill_from(&input[progress.consumed..end]);
                    if progress.consumed > 0 {
                        self.started = true;
                    }
                    break;
                }
            }

            progress.consumed += self.pending.fill_from(&input[progress.consumed..]);
            self.started = true;

            if !self.pending.is_full() {
                continue;
            }

            engine.process_block(self.pending.as_mut_array());
            if hold {
                if self.held.is_full() {
                    output[progress.written..progress.written + AES_BLOCK_SIZE]
                        .copy_from_slice(self.held.as_array());
                    progress.written += AES_BLOCK_SIZE;
                }
                self.held.as_mut_array().copy_from_slice(self.pending.as_array());
                self.held.set_full();
            } else {
                output[progress.written..progress.written + AES_BLOCK_SIZE]
                    .copy_from_slice(self.pending.as_array());
                progress.written += AES_BLOCK_SIZE;
            }
            self.pending.clear();
        }

        Ok(progress)
    }

    /// Common checks at the start of `finish`
    fn begin_finish(&mut self, output: &[u8]) -> Result<()> {
        self.ensure_open("finish")?;
        validate::min_length("finish output buffer", output.len(), AES_BLOCK_SIZE)?;
        self.finished = true;
        Ok(())
    }

    /// Run the (now full) pending buffer through the engine in place
    fn process_pending(&mut self) -> Result<()> {
        let engine = self
            .engine
            .as_mut()
            .ok_or_else(|| Error::stream_state("finish", "no key installed"))?;
        engine.process_block(self.pending.as_mut_array());
        Ok(())
    }
}

impl core::fmt::Debug for CipherCore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CipherCore")
            .field("engine", &self.engine)
            .field("direction", &self.direction)
            .field("padding", &self.padding)
            .field("pending", &self.pending.len())
            .field("started", &self.started)
            .field("finished", &self.finished)
            .finish()
    }
}
