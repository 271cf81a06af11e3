//! Presentation helpers for the shacheck validator.
//!
//! Nothing here changes validation state. These are the pieces a host UI
//! needs around a [`shacheck_core::Session`]: size formatting, status text,
//! the copy-to-clipboard rule and a terminal progress bar.

mod clipboard;
mod size;
mod status;
mod tracker;

pub use clipboard::{COPIED_NOTICE, COPY_THRESHOLD, Clipboard, Notifier, copy_value, is_copyable};
pub use size::format_size;
pub use status::{DIGEST_PLACEHOLDER, digest_text, status_line};
pub use tracker::{ProgressTracker, ProgressTrackerConfig, Tracker, tracker_callback};
