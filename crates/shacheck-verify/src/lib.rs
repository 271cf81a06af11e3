//! Streaming SHA-256 digests for local file verification.
//!
//! Provides incremental hashing over any [`std::io::Read`] source with a
//! bounded read buffer, so memory use does not grow with input size.
//!
//! # Example
//!
//! ```
//! use shacheck_verify::{Digest, DigestEngine};
//!
//! let digest = DigestEngine::new().compute(&b""[..]).unwrap();
//! assert_eq!(digest.as_str(), Digest::EMPTY_SHA256);
//! assert!(digest.matches(&Digest::EMPTY_SHA256.to_uppercase()));
//! ```

pub use self::digest::Digest;
pub use self::engine::{DEFAULT_CHUNK_SIZE, DigestEngine};
pub use self::error::{Result, VerificationError};
pub use self::hasher::{Hasher, Sha256Hasher};
pub use self::reader::VerifiedReader;

pub use tokio_util::sync::CancellationToken;

mod digest;
mod engine;
mod error;
mod hasher;
mod reader;
