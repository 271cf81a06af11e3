use shacheck_fs::FileMetadata;
use shacheck_verify::Digest;

use crate::Failure;

/// Identifies one computation request. Completions carrying an outdated
/// ticket are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(pub(crate) u64);

impl Ticket {
    pub fn generation(&self) -> u64 { self.0 }
}

/// Inputs accepted by the [`Machine`](crate::Machine).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A file was picked; carries the metadata the accessor reported.
    SelectFile(FileMetadata),
    /// Start hashing the selected file.
    Compute,
    /// Compare free-form user input against the current digest.
    Verify(String),
    /// A computation finished. `metadata` is the file as re-read after a
    /// successful pass; `None` keeps what was recorded at selection.
    Completed {
        ticket: Ticket,
        result: Result<Digest, Failure>,
        metadata: Option<FileMetadata>,
    },
    /// Abandon the in-flight computation.
    Cancel,
}

/// Work the machine asks its owner to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Spawn a computation; report back with `Event::Completed` and this ticket.
    Compute(Ticket),
}
