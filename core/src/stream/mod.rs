//! stream: chunked, bounded-memory gzip pipeline between two files.
//!
//! Layers:
//! - `io`: handle opening and chunked reads
//! - `codec_worker`: the transform stage loop
//! - `pipeline`: reader -> codec -> writer wiring
//! - `core`: path-level API used by the CLI

pub mod codec_worker;
pub mod core;
pub mod io;
pub mod pipeline;

pub use self::core::{
    check_source,
    compress_file,
    decompress_file,
    prepare,
    run,
    PreparedRun,
    RunReport,
};

pub use self::pipeline::{run_pipeline, PipelineConfig};
