use tracing::debug;

/// Values longer than this are treated as a full digest worth copying.
pub const COPY_THRESHOLD: usize = 30;

pub const COPIED_NOTICE: &str = "Digest copied";

/// Host clipboard capability.
pub trait Clipboard {
    fn set_text(&self, text: &str);
}

/// Host capability for short transient notices (toasts).
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// `true` when `value` is long enough to plausibly be a full digest rather
/// than a placeholder.
pub fn is_copyable(value: &str) -> bool { value.chars().count() > COPY_THRESHOLD }

/// Copy `value` and show a notice, but only when [`is_copyable`].
pub fn copy_value(clipboard: &dyn Clipboard, notifier: &dyn Notifier, value: &str) -> bool {
    if !is_copyable(value) {
        debug!(len = value.len(), "value too short to copy");
        return false;
    }
    clipboard.set_text(value);
    notifier.notify(COPIED_NOTICE);
    true
}
