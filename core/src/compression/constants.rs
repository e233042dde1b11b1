/// Stable codec names used in logs and telemetry.
pub mod codec_names {
    pub const GZIP: &str = "gzip";
    pub const ZLIB: &str = "zlib";
}

/// Fixed compression level (zlib default, balanced).
pub const DEFAULT_LEVEL_GZIP: u32 = 6;

/// Spare output reserved per inflate step.
pub const INFLATE_STEP: usize = 32 * 1024;
