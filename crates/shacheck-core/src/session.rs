use std::sync::Arc;

use shacheck_fs::{FileAccessor, FileMetadata};
use shacheck_verify::{CancellationToken, Digest, DigestEngine};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::{
    Command, ComputePhase, Event, Failure, Machine, Progress, SessionOptions, Ticket,
    ValidationState,
};

/// Everything a presentation layer needs to render one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub state: ValidationState,
    pub metadata: Option<FileMetadata>,
    pub digest: Option<Digest>,
}

struct Inner<F> {
    machine: Machine,
    file: Option<F>,
    active: Option<(Ticket, CancellationToken)>,
}

impl<F> Inner<F> {
    fn cancel_active(&mut self) {
        if let Some((ticket, token)) = self.active.take() {
            info!(generation = ticket.generation(), "cancelling computation");
            token.cancel();
        }
    }
}

/// Owns the validation state and serializes every event through one lock.
///
/// Digest computation runs on the blocking pool; the session reports
/// `Calculating` as soon as [`Session::compute`] returns.
pub struct Session<A: FileAccessor> {
    accessor: Arc<A>,
    engine: DigestEngine,
    options: SessionOptions,
    inner: Arc<Mutex<Inner<A::File>>>,
}

impl<A: FileAccessor> Session<A> {
    pub fn new(accessor: A) -> Self { Self::with_options(accessor, SessionOptions::default()) }

    pub fn with_options(accessor: A, options: SessionOptions) -> Self {
        Self {
            accessor: Arc::new(accessor),
            engine: DigestEngine::new().with_chunk_size(options.chunk_size),
            options,
            inner: Arc::new(Mutex::new(Inner { machine: Machine::new(), file: None, active: None })),
        }
    }

    /// Select `file`, discarding any digest of the previous selection and
    /// abandoning a computation still in flight.
    pub async fn select_file(&self, file: A::File) -> ValidationState {
        let meta = self.accessor.metadata(&file);
        info!(name = %meta.name, size = meta.size, "file selected");

        let mut inner = self.inner.lock().await;
        inner.cancel_active();
        inner.file = Some(file);
        inner.machine.handle(Event::SelectFile(meta));
        inner.machine.state().clone()
    }

    /// Start hashing the selected file. The file's metadata is read again
    /// after a successful pass, so `FileSelected` shows its current size.
    ///
    /// Returns `None` when the request is ignored: nothing is selected, or a
    /// computation is already running. The handle resolves to the state
    /// right after the result was applied.
    pub async fn compute(&self) -> Option<JoinHandle<ValidationState>> {
        let mut inner = self.inner.lock().await;
        let file = inner.file.clone()?;
        let Command::Compute(ticket) = inner.machine.handle(Event::Compute)?;

        let token = CancellationToken::new();
        inner.active = Some((ticket, token.clone()));
        let total = inner.machine.metadata().map(|m| m.size);
        drop(inner);

        info!(generation = ticket.generation(), "computation started");

        let accessor = Arc::clone(&self.accessor);
        let engine = self.engine;
        let options = self.options.clone();
        let shared = Arc::clone(&self.inner);

        Some(tokio::spawn(async move {
            let (result, metadata) = tokio::task::spawn_blocking(move || {
                let result = run(accessor.as_ref(), &file, engine, &token, &options, total);
                let metadata = result.is_ok().then(|| accessor.metadata(&file));
                (result, metadata)
            })
            .await
            .unwrap_or_else(|e| (Err(Failure::Computation(format!("worker failed: {e}"))), None));

            if let Err(ref failure) = result {
                warn!(generation = ticket.generation(), %failure, "computation failed");
            }

            let mut inner = shared.lock().await;
            if inner.active.as_ref().is_some_and(|(active, _)| *active == ticket) {
                inner.active = None;
            }
            inner.machine.handle(Event::Completed { ticket, result, metadata });
            inner.machine.state().clone()
        }))
    }

    /// Compare `input` against the current digest.
    pub async fn verify(&self, input: &str) -> ValidationState {
        let mut inner = self.inner.lock().await;
        inner.machine.handle(Event::Verify(input.to_string()));
        inner.machine.state().clone()
    }

    /// Abort the in-flight computation, if any. The state moves to
    /// `Error(Cancelled)` immediately; the worker stops at its next chunk.
    pub async fn cancel(&self) -> ValidationState {
        let mut inner = self.inner.lock().await;
        inner.cancel_active();
        inner.machine.handle(Event::Cancel);
        inner.machine.state().clone()
    }

    pub async fn state(&self) -> ValidationState { self.inner.lock().await.machine.state().clone() }

    pub async fn digest(&self) -> Option<Digest> { self.inner.lock().await.machine.digest().cloned() }

    pub async fn metadata(&self) -> Option<FileMetadata> {
        self.inner.lock().await.machine.metadata().cloned()
    }

    pub async fn snapshot(&self) -> Snapshot {
        let inner = self.inner.lock().await;
        Snapshot {
            state: inner.machine.state().clone(),
            metadata: inner.machine.metadata().cloned(),
            digest: inner.machine.digest().cloned(),
        }
    }
}

/// Worker body: open, stream, finalize. The stream is dropped on every path.
fn run<A: FileAccessor>(
    accessor: &A,
    file: &A::File,
    engine: DigestEngine,
    token: &CancellationToken,
    options: &SessionOptions,
    total_bytes: Option<u64>,
) -> Result<Digest, Failure> {
    options.report(Progress { phase: ComputePhase::Opening, bytes_hashed: 0, total_bytes });

    let stream = accessor.open(file)?;
    let mut hashed = 0;
    let digest = engine.compute_with(stream, token, |bytes_hashed| {
        hashed = bytes_hashed;
        options.report(Progress { phase: ComputePhase::Hashing, bytes_hashed, total_bytes });
    })?;

    options.report(Progress { phase: ComputePhase::Completed, bytes_hashed: hashed, total_bytes });
    Ok(digest)
}
