use std::fmt;

use crate::Failure;

/// The validator's current state. Exactly one is active at a time.
///
/// States only change through [`Machine::handle`](crate::Machine::handle);
/// nothing outside the machine can set them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ValidationState {
    /// Nothing selected yet.
    #[default]
    Idle,

    /// A file is selected and ready to hash. A digest may be attached.
    FileSelected { name: String, size: u64 },

    /// A digest computation is in flight.
    Calculating,

    /// The user-supplied digest matched.
    Success,

    /// Verification failed, or the computation could not finish.
    Error(Failure),

    /// Verification was requested with a blank digest.
    MissingInput,
}

impl ValidationState {
    /// `true` for outcomes only a verification request can produce.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Success | Self::Error(_) | Self::MissingInput)
    }

    #[must_use]
    pub fn is_calculating(&self) -> bool { matches!(self, Self::Calculating) }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Self::Error(failure) => Some(failure),
            _ => None,
        }
    }
}

impl fmt::Display for ValidationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::FileSelected { .. } => write!(f, "FileSelected"),
            Self::Calculating => write!(f, "Calculating"),
            Self::Success => write!(f, "Success"),
            Self::Error(_) => write!(f, "Error"),
            Self::MissingInput => write!(f, "MissingInput"),
        }
    }
}
