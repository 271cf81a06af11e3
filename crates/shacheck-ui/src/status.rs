use shacheck_core::ValidationState;
use shacheck_verify::Digest;

use crate::format_size;

pub const DIGEST_PLACEHOLDER: &str = "Computed digest appears here";

/// One-line description of `state` for the main card.
pub fn status_line(state: &ValidationState) -> String {
    match state {
        ValidationState::Idle => "Select a file to verify".to_string(),
        ValidationState::FileSelected { name, size } => {
            format!("{name} ({}), ready to compute", format_size(*size))
        }
        ValidationState::Calculating => "Computing SHA-256...".to_string(),
        ValidationState::Success => "Digests match".to_string(),
        ValidationState::Error(failure) => format!("Verification failed: {failure}"),
        ValidationState::MissingInput => "Paste the expected SHA-256 first".to_string(),
    }
}

/// Text for the output box: the digest, or a placeholder short enough that
/// it is never offered for copying.
pub fn digest_text(digest: Option<&Digest>) -> &str {
    digest.map_or(DIGEST_PLACEHOLDER, Digest::as_str)
}
