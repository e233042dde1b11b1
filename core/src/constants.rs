/// File-name suffix of compressed artifacts.
pub const GZ_EXTENSION: &str = ".gz";

/// Appended to a decompression target that already exists on disk.
pub const DECOMPRESSED_SUFFIX: &str = ".decompressed";

/// Defaults when no tuning is supplied.
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024; // 64 KiB
pub const DEFAULT_INFLIGHT_CHUNKS: usize = 4;

/// Chunk size sanity bounds.
pub const MIN_CHUNK_SIZE: usize = 4 * 1024;
pub const MAX_CHUNK_SIZE: usize = 32 * 1024 * 1024;

/// Upper bound on chunks buffered between two stages.
pub const MAX_INFLIGHT_CHUNKS: usize = 64;

/// Binary size units used by the size reporter.
pub const SIZE_UNIT_BASE: f64 = 1024.0;
pub const SIZE_UNITS: &[&str] = &["Bytes", "KB", "MB", "GB"];
