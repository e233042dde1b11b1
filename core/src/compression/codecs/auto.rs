//! Picks gzip or zlib from the first two bytes of the stream.

use std::io;

use crate::compression::codecs::gzip::GzipDecompressor;
use crate::compression::codecs::zlib::ZlibDecompressor;
use crate::compression::constants::codec_names;
use crate::compression::types::{CompressionError, Decompressor};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wrapper {
    Gzip,
    Zlib,
}

/// Classify a stream by its first two bytes.
///
/// zlib needs deflate as the method, a window of at most 32 KiB and a header
/// checksum that is a multiple of 31.
pub fn sniff(head: [u8; 2]) -> Option<Wrapper> {
    if head == GZIP_MAGIC {
        return Some(Wrapper::Gzip);
    }
    let (cmf, flg) = (head[0], head[1]);
    let zlib = cmf & 0x0f == 8 && cmf >> 4 <= 7 && (u16::from(cmf) << 8 | u16::from(flg)) % 31 == 0;
    zlib.then_some(Wrapper::Zlib)
}

/// Buffers the header bytes, then hands the stream to the matching decoder.
#[derive(Default)]
pub struct AutoDecompressor {
    head: Vec<u8>,
    inner: Option<Box<dyn Decompressor + Send>>,
}

impl AutoDecompressor {
    pub fn new() -> Box<dyn Decompressor + Send> {
        Box::new(Self::default())
    }

    fn select(&mut self) -> Result<&mut Box<dyn Decompressor + Send>, CompressionError> {
        let head = [self.head[0], self.head[1]];
        let mut inner = match sniff(head) {
            Some(Wrapper::Gzip) => GzipDecompressor::new(),
            Some(Wrapper::Zlib) => {
                log::debug!("[AUTO] zlib header detected");
                ZlibDecompressor::new()
            }
            None => return Err(unrecognized("not a gzip or zlib stream")),
        };
        // Two header bytes never inflate to any output.
        inner.decompress_chunk(&head, &mut Vec::new(), usize::MAX)?;
        Ok(self.inner.insert(inner))
    }
}

impl Decompressor for AutoDecompressor {
    fn decompress_chunk(
        &mut self,
        input: &[u8],
        out: &mut Vec<u8>,
        soft_limit: usize,
    ) -> Result<usize, CompressionError> {
        if let Some(inner) = self.inner.as_mut() {
            return inner.decompress_chunk(input, out, soft_limit);
        }
        let take = input.len().min(GZIP_MAGIC.len() - self.head.len());
        self.head.extend_from_slice(&input[..take]);
        if self.head.len() < GZIP_MAGIC.len() {
            return Ok(take);
        }
        let used = self.select()?.decompress_chunk(&input[take..], out, soft_limit)?;
        Ok(take + used)
    }

    fn finish(&mut self, out: &mut Vec<u8>) -> Result<(), CompressionError> {
        match self.inner.as_mut() {
            Some(inner) => inner.finish(out),
            None => Err(unrecognized("stream too short for a gzip or zlib header")),
        }
    }
}

fn unrecognized(msg: &'static str) -> CompressionError {
    CompressionError::InvalidData {
        codec: codec_names::GZIP,
        source: io::Error::new(io::ErrorKind::InvalidData, msg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use flate2::write::{GzEncoder, ZlibEncoder};
    use flate2::Compression;

    fn decode_all(data: &[u8], chunk: usize) -> Result<Vec<u8>, CompressionError> {
        let mut dec = AutoDecompressor::new();
        let mut out = Vec::new();
        for piece in data.chunks(chunk) {
            let mut rest = piece;
            while !rest.is_empty() {
                let used = dec.decompress_chunk(rest, &mut out, usize::MAX)?;
                rest = &rest[used..];
            }
        }
        dec.finish(&mut out)?;
        Ok(out)
    }

    #[test]
    fn sniff_known_headers() {
        assert_eq!(sniff([0x1f, 0x8b]), Some(Wrapper::Gzip));
        assert_eq!(sniff([0x78, 0x9c]), Some(Wrapper::Zlib));
        assert_eq!(sniff([0x78, 0x01]), Some(Wrapper::Zlib));
        assert_eq!(sniff([0x78, 0xda]), Some(Wrapper::Zlib));
        assert_eq!(sniff([0x78, 0x9d]), None);
        assert_eq!(sniff(*b"th"), None);
    }

    #[test]
    fn gzip_and_zlib_decode_one_byte_at_a_time() {
        let data = b"either wrapper will do ".repeat(40);

        let mut gz = GzEncoder::new(Vec::new(), Compression::default());
        gz.write_all(&data).unwrap();
        assert_eq!(decode_all(&gz.finish().unwrap(), 1).unwrap(), data);

        let mut zl = ZlibEncoder::new(Vec::new(), Compression::default());
        zl.write_all(&data).unwrap();
        assert_eq!(decode_all(&zl.finish().unwrap(), 1).unwrap(), data);
    }

    #[test]
    fn unknown_or_short_input_is_invalid() {
        assert!(decode_all(b"plain text", 4).unwrap_err().is_data_error());
        assert!(decode_all(b"", 4).unwrap_err().is_data_error());
        assert!(decode_all(&[0x1f], 4).unwrap_err().is_data_error());
    }
}
