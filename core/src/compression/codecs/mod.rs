//! compression/codecs/mod.rs
//! Concrete codec implementations.

pub mod auto;
pub mod gzip;
pub mod zlib;

pub use auto::AutoDecompressor;
pub use gzip::*;
pub use zlib::ZlibDecompressor;
