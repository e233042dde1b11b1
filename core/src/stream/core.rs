// ## Stable public API: path-level compress / decompress

use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::artifact::{resolve_destination, DestinationArtifact};
use crate::compression::CodecStage;
use crate::report::SizeSummary;
use crate::stream::io::{open_destination, open_source};
use crate::stream::pipeline::{run_pipeline, PipelineConfig};
use crate::telemetry::TelemetrySnapshot;
use crate::types::{Mode, PipelineError};

/// Outcome of a succeeded run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub source: PathBuf,
    pub destination: DestinationArtifact,
    pub summary: SizeSummary,
    pub telemetry: TelemetrySnapshot,
}

/// A run whose source has been checked and whose destination is fixed.
/// The destination is never re-resolved once prepared.
#[derive(Debug, Clone)]
pub struct PreparedRun {
    pub source: PathBuf,
    pub destination: DestinationArtifact,
}

impl PreparedRun {
    pub fn mode(&self) -> Mode {
        self.destination.mode
    }

    pub fn execute(self, config: &PipelineConfig) -> Result<RunReport, PipelineError> {
        let (summary, telemetry) = run(&self.source, &self.destination.path, self.mode(), config)?;
        Ok(RunReport {
            source: self.source,
            destination: self.destination,
            summary,
            telemetry,
        })
    }
}

/// Fail fast before any stream is opened: missing argument, missing file, or a directory.
pub fn check_source(source: Option<&Path>) -> Result<&Path, PipelineError> {
    let path = source.ok_or(PipelineError::InputMissing)?;
    match path.metadata() {
        Ok(meta) if meta.is_dir() => Err(PipelineError::SourceUnreadable(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} is a directory", path.display()),
        ))),
        Ok(_) => Ok(path),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(PipelineError::SourceNotFound { path: path.to_path_buf() })
        }
        Err(e) => Err(PipelineError::SourceUnreadable(e)),
    }
}

/// Check the source and resolve the destination, without writing anything.
pub fn prepare(source: Option<&Path>, mode: Mode) -> Result<PreparedRun, PipelineError> {
    let source = check_source(source)?;
    let destination = resolve_destination(source, mode);
    Ok(PreparedRun { source: source.to_path_buf(), destination })
}

/// Run one pipeline pass between two paths and size both artifacts afterwards.
///
/// The destination is created (or truncated) only after the source opened. On
/// failure a partial destination stays on disk.
pub fn run(
    source: &Path,
    destination: &Path,
    mode: Mode,
    config: &PipelineConfig,
) -> Result<(SizeSummary, TelemetrySnapshot), PipelineError> {
    config.validate()?;
    if source == destination {
        return Err(PipelineError::Config(format!(
            "destination {} is the source",
            destination.display()
        )));
    }

    log::info!("[PIPELINE] {mode}: {} -> {}", source.display(), destination.display());

    let src = open_source(source)?;
    let mut dst = open_destination(destination)?;

    let telemetry = run_pipeline(src, &mut dst, CodecStage::gzip(mode), config)?;
    dst.sync_all().map_err(PipelineError::DestinationUnwritable)?;
    drop(dst);

    let summary = SizeSummary::from_paths(source, destination, mode)?;
    log::info!(
        "[PIPELINE] {mode} complete: {} -> {} bytes",
        summary.original_bytes,
        summary.result_bytes
    );
    Ok((summary, telemetry))
}

/// 🗜 Compress `<source>` into `<source>.gz`.
pub fn compress_file(source: Option<&Path>, config: &PipelineConfig) -> Result<RunReport, PipelineError> {
    prepare(source, Mode::Compress)?.execute(config)
}

/// 📂 Decompress `<source>` next to it, never overwriting an existing file.
pub fn decompress_file(source: Option<&Path>, config: &PipelineConfig) -> Result<RunReport, PipelineError> {
    prepare(source, Mode::Decompress)?.execute(config)
}
