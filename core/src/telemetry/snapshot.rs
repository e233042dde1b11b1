//! telemetry/snapshot.rs
//! Immutable view of one settled pipeline run.
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::telemetry::counters::TelemetryCounters;
use crate::telemetry::timers::{Stage, StageTimes, TelemetryTimer};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub chunks_read: u64,
    pub bytes_read: u64,
    pub chunks_transformed: u64,
    pub chunks_written: u64,
    pub bytes_written: u64,
    pub throughput_bytes_per_sec: f64,
    pub elapsed: Duration,
    pub stage_times: StageTimes,
}

impl TelemetrySnapshot {
    pub fn from(counters: &TelemetryCounters, timer: &TelemetryTimer) -> Self {
        let elapsed = timer.elapsed();

        let throughput = if elapsed.as_secs_f64() > 0.0 {
            counters.bytes_read as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        Self {
            chunks_read: counters.chunks_read,
            bytes_read: counters.bytes_read,
            chunks_transformed: counters.chunks_transformed,
            chunks_written: counters.chunks_written,
            bytes_written: counters.bytes_written,
            throughput_bytes_per_sec: throughput,
            elapsed,
            stage_times: timer.stage_times.clone(),
        }
    }

    pub fn stage_ms(&self, stage: Stage) -> f64 {
        self.stage_times.get_ms(stage)
    }
}
