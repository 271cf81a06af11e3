//! Validation state machine and compute session for file digest checks.
//!
//! # Architecture
//!
//! - [`data`] - states, events, options and progress types
//! - [`Machine`] - pure transitions, no I/O
//! - [`Session`] - serialized state holder that runs computations on a worker
//!
//! # Example
//!
//! ```no_run
//! use shacheck_core::{Session, ValidationState};
//! use shacheck_fs::{LocalAccessor, LocalFile};
//!
//! # async fn demo() {
//! let session = Session::new(LocalAccessor);
//! session.select_file(LocalFile::new(std::path::Path::new("image.iso"))).await;
//! if let Some(handle) = session.compute().await {
//!     handle.await.unwrap();
//! }
//! let state = session.verify("e3b0c442...").await;
//! assert!(state.is_terminal());
//! # }
//! ```

pub mod data;
mod error;
mod machine;
mod session;

pub use data::{Command, ComputePhase, Event, Progress, SessionOptions, Ticket, ValidationState};
pub use error::Failure;
pub use machine::Machine;
pub use session::{Session, Snapshot};
