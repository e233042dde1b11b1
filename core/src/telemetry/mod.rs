//! telemetry/mod.rs
//! Per-run counters, stage timers and the immutable snapshot built from them.
//!
//! Counters are diagnostics only. Reported sizes always come from stat-ing the
//! artifacts once the run has settled.

pub mod counters;
pub mod timers;
pub mod snapshot;

pub use counters::*;
pub use timers::*;
pub use snapshot::*;
