use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use gzpipe_core::stream::PipelineConfig;

mod commands;
mod logging;
mod ui;

#[derive(Parser, Debug)]
#[command(
    name = "gzpipe",
    version,
    about = "Streaming gzip compression and decompression for files",
    arg_required_else_help = true,
    after_help = "Examples:\n  $ gzpipe compress notes.txt\n  $ gzpipe decompress notes.txt.gz\n  $ gzpipe compress-info notes.txt.gz"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,

    /// Log pipeline stages to stderr (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON (machine-readable).
    #[arg(long, global = true)]
    json: bool,
}

/// Pipeline tuning shared by compress and decompress.
#[derive(Args, Debug)]
struct Tuning {
    /// Bytes read per chunk.
    #[arg(long, env = "GZPIPE_CHUNK_SIZE")]
    chunk_size: Option<usize>,

    /// Chunks buffered between stages.
    #[arg(long, env = "GZPIPE_INFLIGHT")]
    inflight: Option<usize>,
}

impl Tuning {
    fn config(&self) -> PipelineConfig {
        PipelineConfig::new(self.chunk_size, self.inflight)
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compress a file to .gz format.
    Compress {
        /// File to compress.
        file: Option<PathBuf>,
        #[command(flatten)]
        tuning: Tuning,
    },

    /// Decompress a .gz file.
    Decompress {
        /// File to decompress.
        file: Option<PathBuf>,
        #[command(flatten)]
        tuning: Tuning,
    },

    /// Show information about a file.
    #[command(name = "compress-info")]
    CompressInfo {
        /// File to inspect.
        file: Option<PathBuf>,
    },
}

fn dispatch(cli: Cli) -> Result<ExitCode> {
    match cli.cmd {
        Command::Compress { file, tuning } => {
            commands::compress(file.as_deref(), &tuning.config(), cli.json)
        }
        Command::Decompress { file, tuning } => {
            commands::decompress(file.as_deref(), &tuning.config(), cli.json)
        }
        Command::CompressInfo { file } => commands::info(file.as_deref(), cli.json),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match dispatch(cli) {
        Ok(code) => code,
        Err(e) => {
            ui::error(format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
