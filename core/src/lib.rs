//! gzpipe-core
//!
//! Streaming gzip compression / decompression between files.
//! No CLI, no terminal output.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;

pub mod artifact;
pub mod compression;
pub mod info;
pub mod report;
pub mod telemetry;

// Stream layer
pub mod stream;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::artifact::{resolve_destination, DestinationArtifact, NamingNotice};
    pub use crate::info::{inspect, FileInfo, FileKind};
    pub use crate::report::SizeSummary;
    pub use crate::stream::{compress_file, decompress_file, prepare, PipelineConfig, RunReport};
    pub use crate::types::{Mode, PipelineError};
}
