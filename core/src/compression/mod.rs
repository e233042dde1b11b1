//! compression/mod.rs
//! Incremental gzip compression and decompression.
//!
//! - Codecs consume a chunk at a time and emit whatever output is ready.
//! - `CodecStage` binds a codec to a pipeline direction.

pub mod constants;
pub mod types;
pub mod registry;
pub mod codecs;
pub mod stream;

pub use constants::*;
pub use types::*;
pub use registry::*;
pub use stream::CodecStage;
