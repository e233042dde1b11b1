// ## Pipeline wiring: reader -> codec -> writer over bounded channels

use std::io::{Read, Write};
use std::thread;
use std::time::Instant;

use bytes::Bytes;
use crossbeam::channel::{bounded, Receiver, Sender};

use crate::compression::CodecStage;
use crate::constants::{
    DEFAULT_CHUNK_SIZE, DEFAULT_INFLIGHT_CHUNKS, MAX_CHUNK_SIZE, MAX_INFLIGHT_CHUNKS,
    MIN_CHUNK_SIZE,
};
use crate::stream::codec_worker::run_codec_worker;
use crate::stream::io;
use crate::telemetry::{Stage, StageTimes, TelemetryCounters, TelemetrySnapshot, TelemetryTimer};
use crate::types::PipelineError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Max bytes pulled from the source per read.
    pub chunk_size: usize,
    /// Slots in each inter-stage channel; bounds buffered chunks.
    pub inflight_chunks: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            inflight_chunks: DEFAULT_INFLIGHT_CHUNKS,
        }
    }
}

impl PipelineConfig {
    /// `None` falls back to the default for that field.
    pub fn new(chunk_size: Option<usize>, inflight_chunks: Option<usize>) -> Self {
        Self {
            chunk_size: chunk_size.unwrap_or(DEFAULT_CHUNK_SIZE),
            inflight_chunks: inflight_chunks.unwrap_or(DEFAULT_INFLIGHT_CHUNKS),
        }
    }

    pub fn validate(&self) -> Result<(), PipelineError> {
        if !(MIN_CHUNK_SIZE..=MAX_CHUNK_SIZE).contains(&self.chunk_size) {
            return Err(PipelineError::Config(format!(
                "chunk size {} outside {MIN_CHUNK_SIZE}..={MAX_CHUNK_SIZE}",
                self.chunk_size
            )));
        }
        if !(1..=MAX_INFLIGHT_CHUNKS).contains(&self.inflight_chunks) {
            return Err(PipelineError::Config(format!(
                "in-flight chunks {} outside 1..={MAX_INFLIGHT_CHUNKS}",
                self.inflight_chunks
            )));
        }
        Ok(())
    }
}

/// Counters and timings a single stage hands back when it exits.
#[derive(Debug, Default, Clone)]
pub struct StageReport {
    pub counters: TelemetryCounters,
    pub times: StageTimes,
}

type ChunkTx = Sender<Result<Bytes, PipelineError>>;
type OutRx = Receiver<Result<Vec<u8>, PipelineError>>;

/// Run one source -> codec -> destination pass.
///
/// Errors travel in-band, so the writer sees the first failure of any stage in
/// stream order. A stage that stops early drops its channel ends, which unblocks
/// and stops its neighbours. All stage threads are joined before returning, so
/// `reader` (and the writer borrow) are released on every path.
pub fn run_pipeline<R, W>(
    reader: R,
    writer: W,
    stage: CodecStage,
    config: &PipelineConfig,
) -> Result<TelemetrySnapshot, PipelineError>
where
    R: Read + Send,
    W: Write,
{
    config.validate()?;
    let mut timer = TelemetryTimer::new();
    let chunk_size = config.chunk_size;

    log::debug!(
        "[PIPELINE] start {} (chunk={} inflight={})",
        stage.stage(),
        chunk_size,
        config.inflight_chunks
    );

    // ---- Channels ----
    let (chunk_tx, chunk_rx) = bounded::<Result<Bytes, PipelineError>>(config.inflight_chunks);
    let (out_tx, out_rx) = bounded::<Result<Vec<u8>, PipelineError>>(config.inflight_chunks);

    let (written, reader_joined, codec_joined) = thread::scope(|scope| {
        let reader_handle = scope.spawn(move || run_reader(reader, chunk_size, chunk_tx));
        let codec_handle = scope.spawn(move || run_codec_worker(stage, chunk_rx, out_tx, chunk_size));

        // Writer runs here; returning drops `out_rx` and unblocks the codec.
        let written = run_writer(writer, out_rx);

        (written, reader_handle.join(), codec_handle.join())
    });

    let mut counters = TelemetryCounters::default();
    let written = written?;
    for report in [
        reader_joined.map_err(|_| PipelineError::Stage("reader stage panicked"))?,
        codec_joined.map_err(|_| PipelineError::Stage("codec stage panicked"))?,
        written,
    ] {
        counters.merge(&report.counters);
        timer.stage_times.merge(&report.times);
    }

    timer.finish();
    log::debug!(
        "[PIPELINE] done: {} chunks read, {} bytes written",
        counters.chunks_read,
        counters.bytes_written
    );
    Ok(TelemetrySnapshot::from(&counters, &timer))
}

fn run_reader<R: Read>(mut reader: R, chunk_size: usize, tx: ChunkTx) -> StageReport {
    let mut report = StageReport::default();
    loop {
        let start = Instant::now();
        let res = io::read_exact_or_eof(&mut reader, chunk_size);
        report.times.add(Stage::Read, start.elapsed());

        match res {
            Ok(buf) if buf.is_empty() => {
                log::debug!("[READER] EOF after {} chunks", report.counters.chunks_read);
                break;
            }
            Ok(buf) => {
                report.counters.add_read(buf.len());
                // Blocks while the channel is full.
                if tx.send(Ok(buf)).is_err() {
                    log::debug!("[READER] downstream closed, stopping");
                    break;
                }
            }
            Err(e) => {
                let _ = tx.send(Err(PipelineError::SourceUnreadable(e)));
                break;
            }
        }
    }
    report
}

fn run_writer<W: Write>(mut writer: W, rx: OutRx) -> Result<StageReport, PipelineError> {
    let mut report = StageReport::default();
    for item in rx.iter() {
        let buf = item?;
        let start = Instant::now();
        writer.write_all(&buf).map_err(PipelineError::DestinationUnwritable)?;
        report.times.add(Stage::Write, start.elapsed());
        report.counters.add_write(buf.len());
    }
    writer.flush().map_err(PipelineError::DestinationUnwritable)?;
    Ok(report)
}
