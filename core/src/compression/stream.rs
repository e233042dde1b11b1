//! compression/stream.rs
//! Codec stage: one codec bound to a pipeline direction.
use crate::compression::registry::{create_compressor, create_decompressor, CodecInfo};
use crate::compression::types::{CompressionError, Compressor, Decompressor};
use crate::constants::MAX_CHUNK_SIZE;
use crate::telemetry::Stage;
use crate::types::Mode;

enum Direction {
    Encode(Box<dyn Compressor + Send>),
    Decode(Box<dyn Decompressor + Send>),
}

/// Incremental transform used by the pipeline's middle stage.
/// - Chunks larger than MAX_CHUNK_SIZE are rejected.
/// - `finish` must be called once after the last chunk.
pub struct CodecStage {
    codec: &'static str,
    direction: Direction,
}

impl CodecStage {
    pub fn new(mode: Mode, info: &CodecInfo) -> Self {
        let direction = match mode {
            Mode::Compress => Direction::Encode(create_compressor(info)),
            Mode::Decompress => Direction::Decode(create_decompressor(info)),
        };
        Self { codec: info.name, direction }
    }

    pub fn gzip(mode: Mode) -> Self {
        Self::new(mode, &crate::compression::default_codec())
    }

    pub fn codec_name(&self) -> &'static str {
        self.codec
    }

    /// Telemetry stage this transform is timed under.
    pub fn stage(&self) -> Stage {
        match self.direction {
            Direction::Encode(_) => Stage::Compress,
            Direction::Decode(_) => Stage::Decompress,
        }
    }

    /// Transform from `input`, appending ready output to `out`; returns the bytes consumed.
    ///
    /// The encoder always takes the whole chunk. The decoder stops once `out`
    /// reaches about `soft_limit`, and the caller feeds it the rest.
    pub fn process(&mut self, input: &[u8], out: &mut Vec<u8>, soft_limit: usize) -> Result<usize, CompressionError> {
        if input.len() > MAX_CHUNK_SIZE {
            return Err(CompressionError::ChunkTooLarge { have: input.len(), max: MAX_CHUNK_SIZE });
        }
        match &mut self.direction {
            Direction::Encode(c) => c.compress_chunk(input, out).map(|()| input.len()),
            Direction::Decode(d) => d.decompress_chunk(input, out, soft_limit),
        }
    }

    /// Flush pending state (encode) or validate the stream end (decode).
    pub fn finish(&mut self, out: &mut Vec<u8>) -> Result<(), CompressionError> {
        match &mut self.direction {
            Direction::Encode(c) => c.finish(out),
            Direction::Decode(d) => d.finish(out),
        }
    }
}
