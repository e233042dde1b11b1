//! compression/registry.rs
//! Codec registry and factory functions.

use crate::compression::codecs::{auto, gzip};
use crate::compression::constants::{codec_names, DEFAULT_LEVEL_GZIP};
use crate::compression::types::{Compressor, Decompressor};
use crate::constants::GZ_EXTENSION;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodecInfo {
    pub name: &'static str,
    pub extension: &'static str,
    pub default_level: u32,
}

/// The codec every pipeline run uses.
pub fn default_codec() -> CodecInfo {
    CodecInfo {
        name: codec_names::GZIP,
        extension: GZ_EXTENSION,
        default_level: DEFAULT_LEVEL_GZIP,
    }
}

pub fn create_compressor(info: &CodecInfo) -> Box<dyn Compressor + Send> {
    gzip::GzipCompressor::new(info.default_level)
}

/// Accepts gzip or zlib input, chosen by the stream header.
pub fn create_decompressor(_info: &CodecInfo) -> Box<dyn Decompressor + Send> {
    auto::AutoDecompressor::new()
}
