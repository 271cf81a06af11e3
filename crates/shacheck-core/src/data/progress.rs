use std::fmt;

/// Phases of one digest computation, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComputePhase {
    /// Opening the byte stream.
    #[default]
    Opening,

    /// Streaming chunks into the accumulator.
    Hashing,

    /// Stream exhausted, digest produced.
    Completed,
}

impl fmt::Display for ComputePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComputePhase::Opening => write!(f, "Opening"),
            ComputePhase::Hashing => write!(f, "Hashing"),
            ComputePhase::Completed => write!(f, "Completed"),
        }
    }
}

/// Snapshot passed to progress callbacks.
#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    pub phase: ComputePhase,

    /// Bytes fed into the accumulator so far.
    pub bytes_hashed: u64,

    /// Size reported by the accessor, if it reported one.
    pub total_bytes: Option<u64>,
}

impl Progress {
    /// Returns `None` if `total_bytes` is unknown.
    #[must_use]
    pub fn percentage(&self) -> Option<f64> {
        self.total_bytes.map(|total| {
            if total == 0 {
                if self.is_completed() { 100.0 } else { 0.0 }
            } else {
                (self.bytes_hashed as f64 / total as f64 * 100.0).min(100.0)
            }
        })
    }

    #[must_use]
    pub fn is_completed(&self) -> bool { self.phase == ComputePhase::Completed }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage() {
        let progress = Progress {
            phase: ComputePhase::Hashing,
            bytes_hashed: 512,
            total_bytes: Some(2048),
        };
        assert_eq!(progress.percentage(), Some(25.0));
    }

    #[test]
    fn test_percentage_unknown_total() {
        let progress = Progress { phase: ComputePhase::Hashing, bytes_hashed: 1, total_bytes: None };
        assert_eq!(progress.percentage(), None);
    }

    #[test]
    fn test_percentage_empty_file() {
        let mut progress = Progress { phase: ComputePhase::Opening, bytes_hashed: 0, total_bytes: Some(0) };
        assert_eq!(progress.percentage(), Some(0.0));
        progress.phase = ComputePhase::Completed;
        assert_eq!(progress.percentage(), Some(100.0));
    }

    #[test]
    fn test_percentage_clamped_when_file_grew() {
        let progress = Progress { phase: ComputePhase::Hashing, bytes_hashed: 300, total_bytes: Some(100) };
        assert_eq!(progress.percentage(), Some(100.0));
    }
}
