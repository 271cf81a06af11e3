//! Host file access for digest verification.
//!
//! [`FileAccessor`] is the seam between the verifier and the host: it opens
//! byte streams and reports display metadata. [`LocalAccessor`] implements
//! it for plain filesystem paths.

mod accessor;
mod error;
mod local;
mod metadata;

pub use accessor::FileAccessor;
pub use error::{Error, Result, from_io};
pub use local::{LocalAccessor, LocalFile};
pub use metadata::{FileMetadata, UNKNOWN_NAME};
