//! telemetry/counters.rs
//! Mutable counters used during a pipeline run.
//!
//! Each stage owns its own counters; they are merged once the stages are joined.
use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryCounters {
    pub chunks_read: u64,
    pub bytes_read: u64,
    pub chunks_transformed: u64,
    pub chunks_written: u64,
    pub bytes_written: u64,
}

impl TelemetryCounters {
    /// Record one chunk pulled from the source.
    pub fn add_read(&mut self, len: usize) {
        self.chunks_read += 1;
        self.bytes_read += len as u64;
    }

    /// Record one chunk handed to the codec.
    pub fn add_transform(&mut self) {
        self.chunks_transformed += 1;
    }

    /// Record one buffer written to the destination.
    pub fn add_write(&mut self, len: usize) {
        self.chunks_written += 1;
        self.bytes_written += len as u64;
    }

    pub fn merge(&mut self, other: &TelemetryCounters) {
        self.chunks_read += other.chunks_read;
        self.bytes_read += other.bytes_read;
        self.chunks_transformed += other.chunks_transformed;
        self.chunks_written += other.chunks_written;
        self.bytes_written += other.bytes_written;
    }
}

impl AddAssign for TelemetryCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
