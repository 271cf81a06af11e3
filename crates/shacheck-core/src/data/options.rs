use std::fmt;
use std::sync::Arc;

use shacheck_verify::DEFAULT_CHUNK_SIZE;

use super::progress::Progress;

/// Configuration for a [`Session`](crate::Session).
///
/// # Examples
///
/// ```
/// use shacheck_core::SessionOptions;
///
/// let options = SessionOptions::default()
///     .chunk_size(64 * 1024)
///     .on_progress(|p| println!("{} {}", p.phase, p.bytes_hashed));
/// ```
#[derive(Clone)]
pub struct SessionOptions {
    /// Read buffer size for the digest engine.
    ///
    /// Default: 8 KiB
    pub chunk_size: usize,

    /// Invoked from the worker thread on phase changes and after every chunk.
    ///
    /// Default: None
    pub on_progress: Option<Arc<dyn Fn(&Progress) + Send + Sync>>,
}

impl fmt::Debug for SessionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionOptions")
            .field("chunk_size", &self.chunk_size)
            .field("on_progress", &self.on_progress.as_ref().map(|_| "{ ... }"))
            .finish()
    }
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self { chunk_size: DEFAULT_CHUNK_SIZE, on_progress: None }
    }
}

impl SessionOptions {
    #[must_use]
    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    #[must_use]
    pub fn on_progress<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Progress) + Send + Sync + 'static,
    {
        self.on_progress = Some(Arc::new(callback));
        self
    }

    pub(crate) fn report(&self, progress: Progress) {
        if let Some(ref callback) = self.on_progress {
            callback(&progress);
        }
    }
}
