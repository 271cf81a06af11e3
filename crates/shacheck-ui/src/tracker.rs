use std::sync::Arc;

use indicatif::{ProgressBar, ProgressStyle};
use once_cell::sync::Lazy;
use shacheck_core::{ComputePhase, Progress};

pub trait Tracker {
    type Ctx: Clone;
    fn new(ctx: Self::Ctx) -> Self;
    fn step(&self, progress: &Progress) -> &Self;
    fn finish(&self, msg: Option<String>);
}

const PB_STYLE: &str = "{spinner:.blue} {msg:.cyan} [{elapsed_precise}] {wide_bar:.cyan/blue} {bytes}/{total_bytes} ({bytes_per_sec}, {eta})";

const TICK: &str = "⠁⠂⠄⡀⢀⠠⠐⠈ ";

const PB_CHARS: &str = "█▓▒░  ";

static PB_TEMPLATE: Lazy<Option<ProgressStyle>> = Lazy::new(|| {
    let pb_style = match ProgressStyle::with_template(PB_STYLE) {
        Ok(pb_style) => pb_style.tick_chars(TICK).progress_chars(PB_CHARS),
        Err(_) => return None,
    };

    Some(pb_style)
});

/// Terminal progress bar for one digest computation.
pub struct ProgressTracker {
    pub pb: ProgressBar,
}

#[derive(Debug, Clone, Default)]
pub struct ProgressTrackerConfig {
    pub len: Option<u64>,
    pub msg: Option<String>,
    /// Draw nothing; positions are still tracked.
    pub hidden: bool,
}

impl Tracker for ProgressTracker {
    type Ctx = ProgressTrackerConfig;

    fn new(ctx: Self::Ctx) -> Self {
        let pb = if ctx.hidden { ProgressBar::hidden() } else { ProgressBar::no_length() };
        if let Some(len) = ctx.len {
            pb.set_length(len);
        }

        let pb = if let Some(style) = PB_TEMPLATE.as_ref() {
            pb.with_style(style.clone())
        } else {
            pb
        };

        let pb = pb.with_message(ctx.msg.unwrap_or_default());

        ProgressTracker { pb }
    }

    fn step(&self, progress: &Progress) -> &Self {
        if let Some(total) = progress.total_bytes {
            self.pb.set_length(total.max(progress.bytes_hashed));
        }
        self.pb.set_position(progress.bytes_hashed);
        self
    }

    fn finish(&self, msg: Option<String>) {
        if let Some(msg) = msg {
            self.pb.finish_with_message(msg);
        }
        self.pb.finish();
    }
}

/// Adapt a tracker into a progress callback for
/// [`SessionOptions::on_progress`](shacheck_core::SessionOptions::on_progress).
pub fn tracker_callback(tracker: Arc<ProgressTracker>) -> impl Fn(&Progress) + Send + Sync + 'static {
    move |progress: &Progress| {
        tracker.step(progress);
        if progress.phase == ComputePhase::Completed {
            tracker.finish(Some("done".to_string()));
        }
    }
}
