use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    #[error("not a regular file: {0}")]
    NotAFile(PathBuf),

    #[error("failed to read '{path}': {source}")]
    Read { path: PathBuf, source: io::Error },
}

pub type Result<T> = std::result::Result<T, Error>;

pub fn from_io(path: &Path, err: io::Error) -> Error {
    match err.kind() {
        io::ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
        io::ErrorKind::PermissionDenied => Error::PermissionDenied(path.to_path_buf()),
        _ => Error::Read { path: path.to_path_buf(), source: err },
    }
}
