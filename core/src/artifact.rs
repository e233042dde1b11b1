//! artifact.rs
//! Destination naming for compress / decompress runs.
//!
//! Resolution is pure path logic plus existence checks. It never fails and never
//! touches file contents; running it twice against the same filesystem state
//! yields the same destination.
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::constants::{DECOMPRESSED_SUFFIX, GZ_EXTENSION};
use crate::types::Mode;

/// Caller-facing warnings produced while resolving a destination.
///
/// `Display` renders the warning itself; `follow_up` is the informational line
/// that goes with it, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NamingNotice {
    /// Compress target already exists and will be overwritten.
    Overwrite { path: PathBuf },
    /// Decompress source has no `.gz` suffix; it is decoded anyway.
    MissingExtension { path: PathBuf },
    /// Decompress target already existed, output goes elsewhere.
    Redirected { existing: PathBuf, used: PathBuf },
}

impl NamingNotice {
    pub fn follow_up(&self) -> Option<&'static str> {
        match self {
            NamingNotice::Overwrite { .. } => Some("The existing file will be overwritten."),
            NamingNotice::MissingExtension { .. } => Some("Attempting to decompress anyway..."),
            NamingNotice::Redirected { .. } => None,
        }
    }
}

impl fmt::Display for NamingNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamingNotice::Overwrite { path } => {
                write!(f, "Output file already exists: {}", path.display())
            }
            NamingNotice::MissingExtension { .. } => {
                write!(f, "File does not have a {GZ_EXTENSION} extension.")
            }
            NamingNotice::Redirected { used, .. } => {
                write!(f, "Original file exists. Using: {}", used.display())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DestinationArtifact {
    pub path: PathBuf,
    pub mode: Mode,
    pub notices: Vec<NamingNotice>,
}

/// Derive the destination for `source`.
/// - Compress: `<source>.gz`, overwritten if present.
/// - Decompress: `<source>` minus `.gz` (or `<source>` itself when the suffix is
///   absent); `.decompressed` is appended when that path is taken.
pub fn resolve_destination(source: &Path, mode: Mode) -> DestinationArtifact {
    let mut notices = Vec::new();

    let path = match mode {
        Mode::Compress => {
            let target = append_suffix(source, GZ_EXTENSION);
            if file_exists(&target) {
                notices.push(NamingNotice::Overwrite { path: target.clone() });
            }
            target
        }
        Mode::Decompress => {
            let stripped = match strip_gz_extension(source) {
                Some(p) => p,
                None => {
                    notices.push(NamingNotice::MissingExtension { path: source.to_path_buf() });
                    source.to_path_buf()
                }
            };

            // `stripped == source` also covers a missing source; never write onto the input.
            if stripped == source || file_exists(&stripped) {
                let used = append_suffix(&stripped, DECOMPRESSED_SUFFIX);
                notices.push(NamingNotice::Redirected { existing: stripped, used: used.clone() });
                used
            } else {
                stripped
            }
        }
    };

    for n in &notices {
        log::debug!("[NAMER] {mode} {}: {n}", source.display());
    }

    DestinationArtifact { path, mode, notices }
}

/// Existence check that fails open.
///
/// Errors other than "not found" (permission denied on a parent directory,
/// I/O faults) are reported as "does not exist". For compress this can hide an
/// overwrite warning; for decompress it can route output onto a path whose
/// existence could not be checked.
pub fn file_exists(path: &Path) -> bool {
    match path.try_exists() {
        Ok(exists) => exists,
        Err(e) => {
            log::debug!("[NAMER] existence check failed for {}: {e}", path.display());
            false
        }
    }
}

/// Name minus `.gz`, when the name has something before the suffix.
fn strip_gz_extension(path: &Path) -> Option<PathBuf> {
    let name = path.file_name()?.to_str()?;
    let stem = name.strip_suffix(GZ_EXTENSION)?;
    if stem.is_empty() {
        return None;
    }
    Some(path.with_file_name(stem))
}

fn append_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut raw = path.as_os_str().to_os_string();
    raw.push(suffix);
    PathBuf::from(raw)
}
