// ## Codec stage loop: chunk in, transformed bytes out

use std::time::Instant;

use bytes::Bytes;
use crossbeam::channel::{Receiver, Sender};

use crate::compression::{CodecStage, CompressionError};
use crate::stream::pipeline::StageReport;
use crate::types::PipelineError;

/// Drive `stage` over every chunk from `rx`, forwarding output to `tx`.
/// - Every forwarded buffer holds at most `max_out` bytes, so the bounded `tx`
///   limits decoded output the same way `rx` limits input.
/// - An upstream error is forwarded unchanged and ends the loop.
/// - A closed `rx` means the source is exhausted: the codec is finished and its
///   tail forwarded.
/// - A closed `tx` means the writer gave up; the loop exits quietly.
pub fn run_codec_worker(
    mut stage: CodecStage,
    rx: Receiver<Result<Bytes, PipelineError>>,
    tx: Sender<Result<Vec<u8>, PipelineError>>,
    max_out: usize,
) -> StageReport {
    let max_out = max_out.max(1);
    let mut report = StageReport::default();
    let timed_as = stage.stage();

    for item in rx.iter() {
        let chunk = match item {
            Ok(chunk) => chunk,
            Err(e) => {
                let _ = tx.send(Err(e));
                return report;
            }
        };

        let mut rest = &chunk[..];
        while !rest.is_empty() {
            let mut out = Vec::new();
            let start = Instant::now();
            let res = stage.process(rest, &mut out, max_out);
            report.times.add(timed_as, start.elapsed());

            let used = match res.and_then(|n| match n {
                0 if out.is_empty() => Err(CompressionError::StateError("codec made no progress")),
                n => Ok(n),
            }) {
                Ok(n) => n,
                Err(e) => {
                    log::debug!("[CODEC] {} {} failed: {e}", stage.codec_name(), timed_as);
                    let _ = tx.send(Err(e.into()));
                    return report;
                }
            };
            rest = &rest[used..];

            if !forward(&tx, out, max_out) {
                log::debug!("[CODEC] writer closed, stopping");
                return report;
            }
        }
        report.counters.add_transform();
    }

    log::debug!("[CODEC] input exhausted, finishing {}", stage.codec_name());
    let mut tail = Vec::new();
    let start = Instant::now();
    let res = stage.finish(&mut tail);
    report.times.add(timed_as, start.elapsed());

    match res {
        Ok(()) => {
            forward(&tx, tail, max_out);
        }
        Err(e) => {
            let _ = tx.send(Err(e.into()));
        }
    }
    report
}

/// Send `out` in pieces of at most `max_out` bytes. False once the receiver is gone.
fn forward(tx: &Sender<Result<Vec<u8>, PipelineError>>, out: Vec<u8>, max_out: usize) -> bool {
    if out.len() <= max_out {
        return out.is_empty() || tx.send(Ok(out)).is_ok();
    }
    out.chunks(max_out).all(|piece| tx.send(Ok(piece.to_vec())).is_ok())
}
