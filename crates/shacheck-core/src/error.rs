//! Failure causes recorded in the `Error` validation state.

use shacheck_verify::VerificationError;

/// Why the validator ended up in [`ValidationState::Error`](crate::ValidationState::Error).
///
/// Every failure is recovered into state; none of these ever propagate to the host.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Failure {
    #[error("the digests do not match")]
    Mismatch,

    #[error("no digest has been computed for the selected file")]
    NoDigest,

    #[error("could not open the file: {0}")]
    Io(String),

    #[error("could not read the file while hashing: {0}")]
    Computation(String),

    #[error("the computation was cancelled")]
    Cancelled,
}

impl From<shacheck_fs::Error> for Failure {
    fn from(e: shacheck_fs::Error) -> Self { Failure::Io(e.to_string()) }
}

impl From<VerificationError> for Failure {
    fn from(e: VerificationError) -> Self {
        match e {
            VerificationError::Cancelled => Failure::Cancelled,
            VerificationError::Computation(source) => Failure::Computation(source.to_string()),
        }
    }
}
