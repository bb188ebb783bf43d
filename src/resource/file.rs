use std::path::{Path, PathBuf};

use anyhow::Context;
use bytes::Bytes;

use crate::resource::{MimeTable, Resource};

/// A resource backed by a path on disk.
///
/// Nothing is cached: existence is only checked when the file is read.
#[derive(Debug, Clone)]
pub struct FileResource {
    path: PathBuf,
}

impl FileResource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Text after the last `.` of the file name.
    fn extension(&self) -> Option<&str> {
        self.path.extension().and_then(|ext| ext.to_str())
    }
}

impl Resource for FileResource {
    fn get_data(&self, _query: Option<&str>) -> anyhow::Result<Bytes> {
        let data = std::fs::read(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        Ok(Bytes::from(data))
    }

    fn mime(&self, table: &MimeTable) -> Option<String> {
        self.extension()
            .and_then(|ext| table.lookup(ext))
            .map(str::to_string)
    }
}
