use std::io;

#[derive(Debug, thiserror::Error)]
pub enum VerificationError {
    #[error("read failed while hashing: {0}")]
    Computation(#[source] io::Error),

    #[error("computation cancelled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, VerificationError>;
