//! zlib-wrapped deflate (RFC 1950), decode only.
//!
//! Driven through flate2's raw `Decompress` so the stream end is observed
//! directly; a truncated stream is an error rather than a short file.

use std::io;

use flate2::{Decompress, FlushDecompress, Status};

use crate::compression::constants::{codec_names, INFLATE_STEP};
use crate::compression::types::{CompressionError, Decompressor};

pub struct ZlibDecompressor {
    inner: Decompress,
    stream_end: bool,
    finished: bool,
}

impl ZlibDecompressor {
    pub fn new() -> Box<dyn Decompressor + Send> {
        Box::new(Self::default())
    }

    /// One inflate step into at least `INFLATE_STEP` bytes of spare capacity.
    /// Returns input consumed and output produced.
    fn step(&mut self, input: &[u8], out: &mut Vec<u8>, flush: FlushDecompress) -> Result<(usize, usize), CompressionError> {
        out.reserve(INFLATE_STEP);
        let (in_before, out_before) = (self.inner.total_in(), out.len());
        let status = self
            .inner
            .decompress_vec(input, out, flush)
            .map_err(|e| invalid_data(e.into()))?;
        if status == Status::StreamEnd {
            self.stream_end = true;
        }
        Ok(((self.inner.total_in() - in_before) as usize, out.len() - out_before))
    }
}

impl Default for ZlibDecompressor {
    fn default() -> Self {
        Self { inner: Decompress::new(true), stream_end: false, finished: false }
    }
}

impl Decompressor for ZlibDecompressor {
    fn decompress_chunk(
        &mut self,
        mut input: &[u8],
        out: &mut Vec<u8>,
        soft_limit: usize,
    ) -> Result<usize, CompressionError> {
        if self.finished {
            return Err(CompressionError::StateError("zlib decoder already finished"));
        }
        let offered = input.len();
        while !input.is_empty() && out.len() < soft_limit {
            if self.stream_end {
                return Err(invalid_data(io::Error::new(
                    io::ErrorKind::InvalidData,
                    "trailing bytes after zlib stream",
                )));
            }
            let (used, produced) = self.step(input, out, FlushDecompress::None)?;
            if used == 0 && produced == 0 && !self.stream_end {
                return Err(invalid_data(io::Error::new(io::ErrorKind::InvalidData, "zlib decoder stalled")));
            }
            input = &input[used..];
        }
        Ok(offered - input.len())
    }

    fn finish(&mut self, out: &mut Vec<u8>) -> Result<(), CompressionError> {
        if self.finished {
            return Ok(());
        }
        // Drain output still held by the inflater, then require the stream end.
        while !self.stream_end {
            let (_, produced) = self.step(&[], out, FlushDecompress::Finish)?;
            if produced == 0 && !self.stream_end {
                return Err(invalid_data(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "truncated zlib stream",
                )));
            }
        }
        self.finished = true;
        Ok(())
    }
}

fn invalid_data(source: io::Error) -> CompressionError {
    CompressionError::InvalidData { codec: codec_names::ZLIB, source }
}
