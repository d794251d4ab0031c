// File payload module: the (filename, media type, bytes) triple uploaded
// as one multipart part. File contents are held in memory as a vector of
// bytes; the gallery images this client handles are small enough for that.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// One file destined for a multipart part. `filename` and `media_type`
/// are what the server sees in the part headers, independent of the
/// local path the bytes came from.
#[derive(Debug, Clone)]
pub struct FilePayload {
    pub filename: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl FilePayload {
    pub fn new(filename: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            media_type: media_type.into(),
            bytes,
        }
    }

    /// Read the whole file at `path` into memory in binary mode. The
    /// handle is released on all exit paths. A missing or unreadable file
    /// fails here, with the path in the error, before any request exists.
    pub fn from_path(path: impl AsRef<Path>, filename: &str, media_type: &str) -> Result<Self> {
        let path = path.as_ref();
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Self::new(filename, media_type, bytes))
    }
}
