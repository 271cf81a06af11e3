/// Display name used when the host cannot provide one.
pub const UNKNOWN_NAME: &str = "unknown";

/// Name and size of a selected file, as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileMetadata {
    pub name: String,
    /// Size in bytes.
    pub size: u64,
}

impl FileMetadata {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self { name: name.into(), size }
    }
}

impl Default for FileMetadata {
    fn default() -> Self {
        Self { name: UNKNOWN_NAME.to_string(), size: 0 }
    }
}
