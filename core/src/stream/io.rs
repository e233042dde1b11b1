// ## Source / destination handles and chunked reads

use std::fs::{File, OpenOptions};
use std::io::{self, Read};
use std::path::Path;

use bytes::Bytes;

use crate::types::PipelineError;

/// Open the source read-only. Nothing is read yet.
pub fn open_source(path: &Path) -> Result<File, PipelineError> {
    File::open(path).map_err(PipelineError::SourceUnreadable)
}

/// Create or truncate the destination.
pub fn open_destination(path: &Path) -> Result<File, PipelineError> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(PipelineError::DestinationUnwritable)
}

/// Read up to `len` bytes, short only at EOF. An empty result means EOF.
pub fn read_exact_or_eof<R: Read>(r: &mut R, len: usize) -> io::Result<Bytes> {
    let mut buf = vec![0u8; len];
    let mut off = 0;

    while off < len {
        match r.read(&mut buf[off..]) {
            Ok(0) => break,
            Ok(n) => off += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    buf.truncate(off);
    Ok(Bytes::from(buf))
}
