//! telemetry/timers.rs
//! Wall-clock accounting for the read / transform / write chain.
//!
//! Each stage thread accumulates into its own `StageTimes`; the pipeline folds
//! them into the run's `TelemetryTimer` after joining.

use std::fmt;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Read,
    Compress,
    Decompress,
    Write,
}

impl Stage {
    pub const ALL: [Stage; 4] = [Stage::Read, Stage::Compress, Stage::Decompress, Stage::Write];
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Read => "read",
            Stage::Compress => "compress",
            Stage::Decompress => "decompress",
            Stage::Write => "write",
        })
    }
}

/// Busy time per stage. A run only ever touches one of compress / decompress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageTimes {
    pub read: Duration,
    pub compress: Duration,
    pub decompress: Duration,
    pub write: Duration,
}

impl StageTimes {
    fn slot(&mut self, stage: Stage) -> &mut Duration {
        match stage {
            Stage::Read => &mut self.read,
            Stage::Compress => &mut self.compress,
            Stage::Decompress => &mut self.decompress,
            Stage::Write => &mut self.write,
        }
    }

    pub fn add(&mut self, stage: Stage, dur: Duration) {
        *self.slot(stage) += dur;
    }

    pub fn get(&self, stage: Stage) -> Duration {
        match stage {
            Stage::Read => self.read,
            Stage::Compress => self.compress,
            Stage::Decompress => self.decompress,
            Stage::Write => self.write,
        }
    }

    pub fn get_ms(&self, stage: Stage) -> f64 {
        self.get(stage).as_secs_f64() * 1_000.0
    }

    /// Sum over stages. Stages overlap in time, so this may exceed wall-clock elapsed.
    pub fn total(&self) -> Duration {
        Stage::ALL.iter().map(|s| self.get(*s)).sum()
    }

    pub fn merge(&mut self, other: &StageTimes) {
        for (stage, dur) in other.iter() {
            self.add(stage, dur);
        }
    }

    /// Stages in pipeline order, zero entries included.
    pub fn iter(&self) -> impl Iterator<Item = (Stage, Duration)> + '_ {
        Stage::ALL.into_iter().map(move |s| (s, self.get(s)))
    }
}

#[derive(Clone, Debug)]
pub struct TelemetryTimer {
    pub start_time: Instant,
    pub end_time: Option<Instant>,
    pub stage_times: StageTimes,
}

impl Default for TelemetryTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl TelemetryTimer {
    pub fn new() -> Self {
        Self { start_time: Instant::now(), end_time: None, stage_times: StageTimes::default() }
    }

    /// Freeze `elapsed`.
    pub fn finish(&mut self) {
        self.end_time = Some(Instant::now());
    }

    pub fn add_stage_time(&mut self, stage: Stage, dur: Duration) {
        self.stage_times.add(stage, dur);
    }

    /// Time `f` and charge it to `stage`.
    pub fn time<T>(&mut self, stage: Stage, f: impl FnOnce() -> T) -> T {
        let t = Instant::now();
        let out = f();
        self.add_stage_time(stage, t.elapsed());
        out
    }

    pub fn elapsed(&self) -> Duration {
        self.end_time.unwrap_or_else(Instant::now).duration_since(self.start_time)
    }
}
