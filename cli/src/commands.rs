//! Subcommand handlers. Each returns the process exit code; domain failures are
//! rendered here, only unexpected failures bubble up as `anyhow::Error`.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use serde::Serialize;

use gzpipe_core::artifact::NamingNotice;
use gzpipe_core::info::inspect;
use gzpipe_core::stream::{prepare, PipelineConfig, RunReport};
use gzpipe_core::types::{Mode, PipelineError};

use crate::ui;

pub fn compress(path: Option<&Path>, config: &PipelineConfig, json: bool) -> Result<ExitCode> {
    transcode(path, Mode::Compress, config, json)
}

pub fn decompress(path: Option<&Path>, config: &PipelineConfig, json: bool) -> Result<ExitCode> {
    transcode(path, Mode::Decompress, config, json)
}

fn transcode(path: Option<&Path>, mode: Mode, config: &PipelineConfig, json: bool) -> Result<ExitCode> {
    if let Err(e) = config.validate() {
        report_failure(mode, &e, None);
        return Ok(ExitCode::FAILURE);
    }

    let prepared = match prepare(path, mode) {
        Ok(p) => p,
        Err(e) => {
            report_failure(mode, &e, None);
            return Ok(ExitCode::FAILURE);
        }
    };

    if !json {
        for notice in &prepared.destination.notices {
            print_notice(notice);
        }
        let verb = match mode {
            Mode::Compress => "Compressing",
            Mode::Decompress => "Decompressing",
        };
        ui::info(format!("{verb}: {}", prepared.source.display()));
    }

    let destination = prepared.destination.path.clone();
    let report = match prepared.execute(config) {
        Ok(r) => r,
        Err(e) => {
            report_failure(mode, &e, Some(&destination));
            return Ok(ExitCode::FAILURE);
        }
    };

    let t = &report.telemetry;
    log::debug!(
        "[CLI] {} chunks in {:.1?} ({:.2} MiB/s)",
        t.chunks_read,
        t.elapsed,
        t.throughput_bytes_per_sec / (1024.0 * 1024.0)
    );
    for (stage, dur) in t.stage_times.iter().filter(|(_, d)| !d.is_zero()) {
        log::debug!("[CLI]   {stage}: {dur:.1?}");
    }

    if json {
        print_json(&report)?;
    } else {
        print_report(&report);
    }
    Ok(ExitCode::SUCCESS)
}

pub fn info(path: Option<&Path>, json: bool) -> Result<ExitCode> {
    let info = match inspect(path) {
        Ok(i) => i,
        Err(PipelineError::InputMissing) => {
            ui::error("Please provide a file path.");
            ui::hint("Usage: gzpipe compress-info <filename>");
            return Ok(ExitCode::FAILURE);
        }
        Err(PipelineError::SourceNotFound { path }) => {
            ui::error(format!("File not found: {}", path.display()));
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => {
            ui::error(format!("Failed to get file info: {e}"));
            return Ok(ExitCode::FAILURE);
        }
    };

    if json {
        print_json(&info)?;
        return Ok(ExitCode::SUCCESS);
    }

    ui::header("File Information");
    ui::line(format!("Path:        {}", info.path.display()));
    ui::line(format!("Size:        {}", info.size_display()));
    ui::line(format!("Type:        {}", info.kind));
    ui::line(format!("Modified:    {}", info.modified_display()));
    Ok(ExitCode::SUCCESS)
}

fn print_notice(notice: &NamingNotice) {
    ui::warning(notice.to_string());
    if let Some(more) = notice.follow_up() {
        ui::info(more);
    }
}

fn print_report(report: &RunReport) {
    let summary = &report.summary;
    match summary.mode {
        Mode::Compress => {
            ui::success("Compression complete!");
            ui::line(format!("Original:    {} ({})", summary.original_display(), report.source.display()));
            ui::line(format!(
                "Compressed:  {} ({})",
                summary.result_display(),
                report.destination.path.display()
            ));
            ui::line(format!("Saved:       {}", summary.ratio_display()));
        }
        Mode::Decompress => {
            ui::success("Decompression complete!");
            ui::line(format!("Output file: {}", report.destination.path.display()));
            ui::line(format!("Size:        {}", summary.result_display()));
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn report_failure(mode: Mode, err: &PipelineError, destination: Option<&Path>) {
    log::debug!("[CLI] {mode} failed: {err:?}");

    match err {
        PipelineError::InputMissing => {
            let (what, usage) = match mode {
                Mode::Compress => ("compress", "gzpipe compress <filename>"),
                Mode::Decompress => ("decompress", "gzpipe decompress <filename.gz>"),
            };
            ui::error(format!("Please provide a file to {what}."));
            ui::hint(format!("Usage: {usage}"));
        }
        PipelineError::SourceNotFound { path } => {
            ui::error(format!("File not found: {}", path.display()));
        }
        e if mode == Mode::Decompress && e.is_corrupt_input() => {
            ui::error("Invalid gzip file. The file may be corrupted.");
        }
        e => {
            let label = match mode {
                Mode::Compress => "Compression",
                Mode::Decompress => "Decompression",
            };
            ui::error(format!("{label} failed: {e}"));
        }
    }

    if err.leaves_partial_output() {
        if let Some(dest) = destination {
            ui::warning_stderr(format!(
                "Partial output left at {}; it may need manual cleanup.",
                dest.display()
            ));
        }
    }
}
