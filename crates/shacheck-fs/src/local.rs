use std::borrow::Cow;
use std::fs::File;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::metadata::UNKNOWN_NAME;
use crate::{Error, FileAccessor, FileMetadata, Result, from_io};

/// A file on the local filesystem. Each open reads the current content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFile {
    path: PathBuf,
}

impl LocalFile {
    /// Never fails; a missing file is reported when it is opened.
    pub fn new<'a>(path: impl Into<Cow<'a, Path>>) -> Self {
        Self { path: path.into().into_owned() }
    }

    pub fn path(&self) -> &Path { &self.path }
}

/// [`FileAccessor`] over [`LocalFile`] handles.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalAccessor;

impl FileAccessor for LocalAccessor {
    type File = LocalFile;
    type Stream = File;

    fn open(&self, file: &LocalFile) -> Result<File> {
        let meta = file.path.metadata().map_err(|e| from_io(&file.path, e))?;
        if !meta.is_file() {
            return Err(Error::NotAFile(file.path.clone()));
        }
        debug!(path = %file.path.display(), "opening file");
        File::open(&file.path).map_err(|e| from_io(&file.path, e))
    }

    fn metadata(&self, file: &LocalFile) -> FileMetadata {
        let name = file
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| UNKNOWN_NAME.to_string());

        let size = match file.path.metadata() {
            Ok(meta) if meta.is_file() => meta.len(),
            Ok(_) => 0,
            Err(e) => {
                warn!(path = %file.path.display(), error = %e, "metadata unavailable");
                0
            }
        };

        FileMetadata { name, size }
    }
}
