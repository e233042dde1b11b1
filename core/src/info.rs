//! info.rs
//! `compress-info`: stat a file without running a pipeline.
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::constants::GZ_EXTENSION;
use crate::types::PipelineError;
use crate::utils::format_file_size;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Gzip,
    Regular,
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileKind::Gzip => f.write_str("Compressed (gzip)"),
            FileKind::Regular => f.write_str("Regular"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FileInfo {
    pub path: PathBuf,
    pub size: u64,
    pub kind: FileKind,
    pub modified: Option<DateTime<Local>>,
}

impl FileInfo {
    pub fn size_display(&self) -> String {
        format_file_size(self.size)
    }

    pub fn modified_display(&self) -> String {
        match self.modified {
            Some(t) => t.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => "unknown".to_string(),
        }
    }
}

/// Stat `path`; the kind is inferred from the file name only.
pub fn inspect(path: Option<&Path>) -> Result<FileInfo, PipelineError> {
    let path = path.ok_or(PipelineError::InputMissing)?;
    let meta = match fs::metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(PipelineError::SourceNotFound { path: path.to_path_buf() })
        }
        Err(e) => return Err(PipelineError::SourceUnreadable(e)),
    };

    // Plain suffix match: a file named just `.gz` still counts as gzip.
    let kind = if path.as_os_str().to_string_lossy().ends_with(GZ_EXTENSION) {
        FileKind::Gzip
    } else {
        FileKind::Regular
    };
    // Not every platform/filesystem records mtime.
    let modified = meta.modified().ok().map(DateTime::<Local>::from);

    Ok(FileInfo { path: path.to_path_buf(), size: meta.len(), kind, modified })
}
