//! compression/types.rs
//! Codec traits and error type.
use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompressionError {
    /// Input is not valid compressed data (bad header, corrupt deflate block,
    /// checksum mismatch, truncated stream).
    #[error("codec {codec} rejected input: {source}")]
    InvalidData {
        codec: &'static str,
        #[source]
        source: io::Error,
    },

    /// The encoder itself failed.
    #[error("codec {codec} process failed: {source}")]
    CodecProcessFailed {
        codec: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("chunk too large: {have} > {max}")]
    ChunkTooLarge { have: usize, max: usize },

    /// Chunk pushed after `finish`.
    #[error("compression state error: {0}")]
    StateError(&'static str),
}

impl CompressionError {
    /// Malformed input, as opposed to misuse or encoder failure.
    pub fn is_data_error(&self) -> bool {
        matches!(self, CompressionError::InvalidData { .. })
    }
}

// Require Send so trait objects can cross thread boundaries.
pub trait Compressor: Send {
    /// Compress a single chunk, appending any ready output to `out`.
    fn compress_chunk(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError>;
    /// Flush pending state and write the trailer.
    fn finish(&mut self, out: &mut Vec<u8>) -> Result<(), CompressionError>;
}

pub trait Decompressor: Send {
    /// Decompress from `input`, appending ready output to `out`.
    ///
    /// Stops early once `out` holds at least `soft_limit` bytes (it may overshoot
    /// by one inflate window) and returns how many input bytes were consumed.
    /// Every call with non-empty input consumes input or produces output.
    fn decompress_chunk(
        &mut self,
        input: &[u8],
        out: &mut Vec<u8>,
        soft_limit: usize,
    ) -> Result<usize, CompressionError>;
    /// Verify the stream ended cleanly and flush the remaining output.
    fn finish(&mut self, out: &mut Vec<u8>) -> Result<(), CompressionError>;
}
