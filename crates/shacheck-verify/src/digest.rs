use std::fmt;

/// A finalized SHA-256 digest, stored as lowercase hex.
///
/// Only produced by finalizing a hasher, so the inner string is always 64
/// lowercase hex characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Digest(String);

impl Digest {
    /// Digest of zero-length input.
    pub const EMPTY_SHA256: &'static str =
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    pub(crate) fn from_bytes(bytes: &[u8]) -> Self { Self(hex::encode(bytes)) }

    /// Compare against free-form user input, ignoring surrounding whitespace and case.
    pub fn matches(&self, input: &str) -> bool { input.trim().eq_ignore_ascii_case(&self.0) }

    pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

impl AsRef<str> for Digest {
    fn as_ref(&self) -> &str { &self.0 }
}
