pub mod event;
pub mod options;
pub mod progress;
pub mod state;

pub use event::{Command, Event, Ticket};
pub use options::SessionOptions;
pub use progress::{ComputePhase, Progress};
pub use state::ValidationState;
