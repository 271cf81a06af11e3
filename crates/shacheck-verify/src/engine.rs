use std::io::{ErrorKind, Read};

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::{Digest, Result, Sha256Hasher, VerificationError, VerifiedReader};

/// Chunk size used when none is configured.
pub const DEFAULT_CHUNK_SIZE: usize = 8 * 1024;

/// Stateless SHA-256 engine that reads its input in bounded chunks.
///
/// Every call builds a fresh accumulator, so one engine can be shared and
/// reused across any number of computations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigestEngine {
    chunk_size: usize,
}

impl Default for DigestEngine {
    fn default() -> Self {
        Self { chunk_size: DEFAULT_CHUNK_SIZE }
    }
}

impl DigestEngine {
    pub fn new() -> Self { Self::default() }

    /// Set the read buffer size. Zero is treated as one byte.
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    pub fn chunk_size(&self) -> usize { self.chunk_size }

    /// Hash `reader` to exhaustion.
    pub fn compute<R: Read>(&self, reader: R) -> Result<Digest> {
        self.compute_with(reader, &CancellationToken::new(), |_| {})
    }

    /// Hash `reader` to exhaustion, checking `cancel` before every chunk and
    /// reporting the running byte count after every chunk.
    ///
    /// A read failure after the first byte aborts the whole computation; no
    /// digest of a partial stream is ever returned.
    pub fn compute_with<R, F>(
        &self,
        reader: R,
        cancel: &CancellationToken,
        mut on_chunk: F,
    ) -> Result<Digest>
    where
        R: Read,
        F: FnMut(u64),
    {
        let mut verified = VerifiedReader::new(reader, Sha256Hasher::new());
        let mut buffer = vec![0u8; self.chunk_size];

        loop {
            if cancel.is_cancelled() {
                debug!(bytes = verified.bytes_read(), "digest computation cancelled");
                return Err(VerificationError::Cancelled);
            }
            match verified.read(&mut buffer) {
                Ok(0) => break,
                Ok(_) => on_chunk(verified.bytes_read()),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    debug!(bytes = verified.bytes_read(), error = %e, "read failed while hashing");
                    return Err(VerificationError::Computation(e));
                }
            }
        }

        let total = verified.bytes_read();
        let digest = verified.into_digest();
        debug!(bytes = total, %digest, "digest computed");
        Ok(digest)
    }
}
