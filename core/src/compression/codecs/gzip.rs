//! gzip (RFC 1952) via flate2 with incremental enc/dec.
//!
//! Both sides write into an in-memory `Vec<u8>` sink that is drained after every
//! chunk, so the only state carried between chunks is the codec window.

use std::io::Write;

use flate2::write::{GzDecoder, GzEncoder};
use flate2::Compression;

use crate::compression::constants::codec_names;
use crate::compression::types::{CompressionError, Compressor, Decompressor};

pub struct GzipCompressor {
    inner: GzEncoder<Vec<u8>>,
    finished: bool,
}

impl GzipCompressor {
    pub fn new(level: u32) -> Box<dyn Compressor + Send> {
        let lvl = match level {
            0..=9 => Compression::new(level),
            _ => Compression::default(),
        };
        Box::new(Self {
            inner: GzEncoder::new(Vec::new(), lvl),
            finished: false,
        })
    }
}

impl Compressor for GzipCompressor {
    fn compress_chunk(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        if self.finished {
            return Err(CompressionError::StateError("gzip encoder already finished"));
        }
        self.inner.write_all(input).map_err(encode_failed)?;
        out.append(self.inner.get_mut());
        Ok(())
    }

    fn finish(&mut self, out: &mut Vec<u8>) -> Result<(), CompressionError> {
        if self.finished {
            return Ok(());
        }
        self.inner.try_finish().map_err(encode_failed)?;
        self.finished = true;
        out.append(self.inner.get_mut());
        Ok(())
    }
}

/// Decodes one or more concatenated gzip members.
pub struct GzipDecompressor {
    inner: GzDecoder<Vec<u8>>,
    members_done: u64,
    finished: bool,
}

impl GzipDecompressor {
    pub fn new() -> Box<dyn Decompressor + Send> {
        Box::new(Self {
            inner: GzDecoder::new(Vec::new()),
            members_done: 0,
            finished: false,
        })
    }

    /// Close the current member (trailer CRC and size are checked) and start a fresh one.
    fn next_member(&mut self, out: &mut Vec<u8>) -> Result<(), CompressionError> {
        self.inner.try_finish().map_err(invalid_data)?;
        out.append(self.inner.get_mut());
        self.inner = GzDecoder::new(Vec::new());
        self.members_done += 1;
        log::debug!("[GZIP] member {} complete, continuing", self.members_done);
        Ok(())
    }
}

impl Decompressor for GzipDecompressor {
    fn decompress_chunk(
        &mut self,
        mut input: &[u8],
        out: &mut Vec<u8>,
        soft_limit: usize,
    ) -> Result<usize, CompressionError> {
        if self.finished {
            return Err(CompressionError::StateError("gzip decoder already finished"));
        }
        let offered = input.len();
        // One `write` inflates at most one internal buffer, so output grows in steps.
        while !input.is_empty() && out.len() < soft_limit {
            let n = self.inner.write(input).map_err(invalid_data)?;
            if n == 0 {
                // Current member ended; remaining bytes start the next one.
                self.next_member(out)?;
                continue;
            }
            input = &input[n..];
            out.append(self.inner.get_mut());
        }
        Ok(offered - input.len())
    }

    fn finish(&mut self, out: &mut Vec<u8>) -> Result<(), CompressionError> {
        if self.finished {
            return Ok(());
        }
        // Fails on empty input, truncated data or a bad trailer.
        self.inner.try_finish().map_err(invalid_data)?;
        self.finished = true;
        out.append(self.inner.get_mut());
        Ok(())
    }
}

fn encode_failed(source: std::io::Error) -> CompressionError {
    CompressionError::CodecProcessFailed { codec: codec_names::GZIP, source }
}

fn invalid_data(source: std::io::Error) -> CompressionError {
    CompressionError::InvalidData { codec: codec_names::GZIP, source }
}
