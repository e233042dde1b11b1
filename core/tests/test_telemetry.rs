#[cfg(test)]
mod telemetry_snapshot_tests {
    use std::time::Duration;

    use gzpipe_core::telemetry::{Stage, TelemetryCounters, TelemetrySnapshot, TelemetryTimer};

    fn make_counters() -> TelemetryCounters {
        TelemetryCounters {
            chunks_read: 3,
            bytes_read: 200_000,
            chunks_transformed: 3,
            chunks_written: 2,
            bytes_written: 50_000,
        }
    }

    fn make_timer() -> TelemetryTimer {
        let mut timer = TelemetryTimer::new();
        std::thread::sleep(Duration::from_millis(20)); // ensure elapsed > stage times
        timer.add_stage_time(Stage::Read, Duration::from_millis(5));
        timer.add_stage_time(Stage::Compress, Duration::from_millis(8));
        timer.add_stage_time(Stage::Write, Duration::from_millis(2));
        timer.finish();
        timer
    }

    #[test]
    fn snapshot_copies_counters() {
        let snap = TelemetrySnapshot::from(&make_counters(), &make_timer());
        assert_eq!(snap.chunks_read, 3);
        assert_eq!(snap.bytes_read, 200_000);
        assert_eq!(snap.chunks_written, 2);
        assert_eq!(snap.bytes_written, 50_000);
    }

    #[test]
    fn snapshot_throughput_and_elapsed() {
        let snap = TelemetrySnapshot::from(&make_counters(), &make_timer());
        assert!(snap.elapsed >= Duration::from_millis(20));
        assert!(snap.throughput_bytes_per_sec > 0.0);
        assert!(snap.stage_times.total() <= snap.elapsed);
        assert_eq!(snap.stage_ms(Stage::Compress), 8.0);
    }

    #[test]
    fn timer_time_charges_stage() {
        let mut timer = TelemetryTimer::new();
        let v = timer.time(Stage::Decompress, || {
            std::thread::sleep(Duration::from_millis(2));
            42
        });
        assert_eq!(v, 42);
        assert!(timer.stage_times.get(Stage::Decompress) >= Duration::from_millis(2));
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let snap = TelemetrySnapshot::from(&make_counters(), &make_timer());
        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["chunks_read"], 3);
        assert_eq!(json["stage_times"]["compress"]["nanos"], 8_000_000);
        assert_eq!(json["stage_times"]["compress"]["secs"], 0);
    }
}
