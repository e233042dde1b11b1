use std::fmt;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::compression::CompressionError;

/// Direction of a pipeline run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Compress,
    Decompress,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Compress   => "compress",
            Mode::Decompress => "decompress",
        };
        f.write_str(name)
    }
}

/// Unified pipeline error covering argument checks, I/O on either end and codec failures.
/// - `InputMissing`, `SourceNotFound` and `Config` are raised before any stream is opened.
/// - `DestinationUnwritable` and `Codec` may leave a partial destination behind.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// No path argument was supplied.
    #[error("no input file provided")]
    InputMissing,

    /// The source path does not exist.
    #[error("file not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    /// Source could not be opened, or a read failed mid-stream.
    #[error("cannot read source: {0}")]
    SourceUnreadable(#[source] io::Error),

    /// Destination could not be created, or a write failed mid-stream.
    #[error("cannot write destination: {0}")]
    DestinationUnwritable(#[source] io::Error),

    /// The byte stream is not valid compressed data.
    #[error("codec error: {0}")]
    Codec(#[from] CompressionError),

    /// Rejected tuning values.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Stage wiring failure (a stage vanished without reporting).
    #[error("pipeline error: {0}")]
    Stage(&'static str),
}

impl PipelineError {
    /// True when the failure came from malformed compressed input rather than I/O.
    pub fn is_corrupt_input(&self) -> bool {
        matches!(self, PipelineError::Codec(e) if e.is_data_error())
    }

    /// True when the destination may hold partial, invalid output.
    pub fn leaves_partial_output(&self) -> bool {
        matches!(self, PipelineError::DestinationUnwritable(_) | PipelineError::Codec(_))
    }
}
