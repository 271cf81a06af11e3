use std::io::{self, Read};

use crate::{Digest, Hasher};

/// Streaming reader that hashes data as it passes through.
/// Wraps any `Read` source for zero-copy verification.
pub struct VerifiedReader<R, H> {
    reader: R,
    hasher: H,
    bytes_read: u64,
}

impl<R, H> VerifiedReader<R, H> {
    /// Create a new verified reader.
    pub fn new(reader: R, hasher: H) -> Self {
        Self { reader, hasher, bytes_read: 0 }
    }

    /// Total bytes passed through so far.
    pub fn bytes_read(&self) -> u64 { self.bytes_read }
}

impl<R: Read, H: Hasher> Read for VerifiedReader<R, H> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.reader.read(buf)?;
        if n > 0 {
            self.hasher.update(&buf[..n]);
            self.bytes_read += n as u64;
        }
        Ok(n)
    }
}

impl<R: Read, H: Hasher> VerifiedReader<R, H> {
    /// Finalize the accumulator and release the inner reader.
    pub fn into_digest(self) -> Digest { Digest::from_bytes(&self.hasher.finalize()) }
}
