//! report.rs
//! Size summary for a settled run.
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::types::{Mode, PipelineError};
use crate::utils::{format_file_size, percent_saved};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizeSummary {
    pub mode: Mode,
    pub original_bytes: u64,
    pub result_bytes: u64,
    /// Percent saved, compress only. `None` for decompress and for an empty original.
    pub ratio: Option<f64>,
}

impl SizeSummary {
    pub fn new(original_bytes: u64, result_bytes: u64, mode: Mode) -> Self {
        let ratio = match mode {
            Mode::Compress => percent_saved(original_bytes, result_bytes),
            Mode::Decompress => None,
        };
        Self { mode, original_bytes, result_bytes, ratio }
    }

    /// Stat both artifacts. Never uses counters gathered during the run.
    pub fn from_paths(source: &Path, destination: &Path, mode: Mode) -> Result<Self, PipelineError> {
        let original = fs::metadata(source).map_err(PipelineError::SourceUnreadable)?.len();
        let result = fs::metadata(destination).map_err(PipelineError::DestinationUnwritable)?.len();
        Ok(Self::new(original, result, mode))
    }

    pub fn original_display(&self) -> String {
        format_file_size(self.original_bytes)
    }

    pub fn result_display(&self) -> String {
        format_file_size(self.result_bytes)
    }

    /// "12.30%", or "N/A" when the ratio is undefined.
    pub fn ratio_display(&self) -> String {
        match self.ratio {
            Some(r) => format!("{r:.2}%"),
            None => "N/A".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compress_summary_has_ratio() {
        let s = SizeSummary::new(2048, 512, Mode::Compress);
        assert_eq!(s.ratio, Some(75.0));
        assert_eq!(s.ratio_display(), "75.00%");
        assert_eq!(s.original_display(), "2 KB");
        assert_eq!(s.result_display(), "512 Bytes");
    }

    #[test]
    fn decompress_summary_omits_ratio() {
        let s = SizeSummary::new(512, 2048, Mode::Decompress);
        assert_eq!(s.ratio, None);
    }

    #[test]
    fn empty_original_reports_not_applicable() {
        let s = SizeSummary::new(0, 20, Mode::Compress);
        assert_eq!(s.ratio, None);
        assert_eq!(s.ratio_display(), "N/A");
    }
}
