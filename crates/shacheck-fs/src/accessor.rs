use std::io::Read;

use crate::{FileMetadata, Result};

/// The only way the rest of the workspace touches host files.
///
/// `File` is whatever handle the host hands out (a path, a document URI, an
/// in-memory blob). It is only guaranteed to stay valid for one read pass.
pub trait FileAccessor: Send + Sync + 'static {
    type File: Clone + Send + Sync + 'static;
    type Stream: Read + Send + 'static;

    /// Open a fresh byte stream. The stream is owned by the caller and
    /// closed when dropped.
    fn open(&self, file: &Self::File) -> Result<Self::Stream>;

    /// Name and size of `file`. Never fails: unavailable fields fall back to
    /// [`FileMetadata::default`] values.
    fn metadata(&self, file: &Self::File) -> FileMetadata;
}
