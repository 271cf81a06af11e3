//! Pure validation state machine.
//!
//! The machine performs no I/O. It reacts to [`Event`]s one at a time and,
//! when a computation should start, hands back a [`Command`] for its owner to
//! execute. The owner reports the result with [`Event::Completed`].

use shacheck_fs::FileMetadata;
use shacheck_verify::Digest;
use tracing::debug;

use crate::{Command, Event, Failure, Ticket, ValidationState};

#[derive(Debug, Default)]
pub struct Machine {
    state: ValidationState,
    selected: Option<FileMetadata>,
    /// Only ever holds the result of the latest computation for `selected`.
    digest: Option<Digest>,
    generation: u64,
    in_flight: Option<Ticket>,
}

impl Machine {
    pub fn new() -> Self { Self::default() }

    pub fn state(&self) -> &ValidationState { &self.state }

    pub fn digest(&self) -> Option<&Digest> { self.digest.as_ref() }

    pub fn metadata(&self) -> Option<&FileMetadata> { self.selected.as_ref() }

    pub fn in_flight(&self) -> Option<Ticket> { self.in_flight }

    /// Apply one event. Events that are not legal in the current state are
    /// ignored and leave the machine untouched.
    pub fn handle(&mut self, event: Event) -> Option<Command> {
        let before = self.state.to_string();
        let command = match event {
            Event::SelectFile(meta) => {
                self.select(meta);
                None
            }
            Event::Compute => self.start_compute(),
            Event::Verify(input) => {
                self.verify(&input);
                None
            }
            Event::Completed { ticket, result, metadata } => {
                self.complete(ticket, result, metadata);
                None
            }
            Event::Cancel => {
                self.cancel();
                None
            }
        };
        if before != self.state.to_string() {
            debug!(from = %before, to = %self.state, "state transition");
        }
        command
    }

    fn select(&mut self, meta: FileMetadata) {
        self.invalidate();
        self.state = ValidationState::FileSelected { name: meta.name.clone(), size: meta.size };
        self.selected = Some(meta);
        self.digest = None;
    }

    fn start_compute(&mut self) -> Option<Command> {
        if self.selected.is_none() || self.state.is_calculating() {
            debug!(state = %self.state, "compute request ignored");
            return None;
        }
        self.generation += 1;
        let ticket = Ticket(self.generation);
        self.in_flight = Some(ticket);
        self.digest = None;
        self.state = ValidationState::Calculating;
        Some(Command::Compute(ticket))
    }

    fn complete(
        &mut self,
        ticket: Ticket,
        result: Result<Digest, Failure>,
        metadata: Option<FileMetadata>,
    ) {
        if self.in_flight != Some(ticket) {
            debug!(generation = ticket.generation(), "discarding stale computation result");
            return;
        }
        self.in_flight = None;
        match result {
            Ok(digest) => {
                if metadata.is_some() {
                    self.selected = metadata;
                }
                self.digest = Some(digest);
                self.state = match &self.selected {
                    Some(meta) => ValidationState::FileSelected {
                        name: meta.name.clone(),
                        size: meta.size,
                    },
                    None => ValidationState::Idle,
                };
            }
            Err(failure) => {
                self.digest = None;
                self.state = ValidationState::Error(failure);
            }
        }
    }

    fn verify(&mut self, input: &str) {
        if matches!(self.state, ValidationState::Idle | ValidationState::Calculating) {
            debug!(state = %self.state, "verify request ignored");
            return;
        }
        self.state = if input.trim().is_empty() {
            ValidationState::MissingInput
        } else {
            match &self.digest {
                Some(digest) if digest.matches(input) => ValidationState::Success,
                Some(_) => ValidationState::Error(Failure::Mismatch),
                None => ValidationState::Error(Failure::NoDigest),
            }
        };
    }

    fn cancel(&mut self) {
        if !self.state.is_calculating() {
            return;
        }
        self.invalidate();
        self.digest = None;
        self.state = ValidationState::Error(Failure::Cancelled);
    }

    /// Forget the in-flight ticket so its completion is discarded.
    fn invalidate(&mut self) {
        if let Some(ticket) = self.in_flight.take() {
            debug!(generation = ticket.generation(), "in-flight computation invalidated");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shacheck_verify::DigestEngine;

    fn empty_digest() -> Digest { DigestEngine::new().compute(std::io::empty()).unwrap() }

    fn selected(name: &str, size: u64) -> Machine {
        let mut machine = Machine::new();
        machine.handle(Event::SelectFile(FileMetadata::new(name, size)));
        machine
    }

    fn computed(name: &str, size: u64) -> Machine {
        let mut machine = selected(name, size);
        let Some(Command::Compute(ticket)) = machine.handle(Event::Compute) else {
            panic!("compute should start");
        };
        machine.handle(Event::Completed { ticket, result: Ok(empty_digest()), metadata: None });
        machine
    }

    #[test]
    fn test_initial_state() {
        let machine = Machine::new();
        assert_eq!(machine.state(), &ValidationState::Idle);
        assert!(machine.digest().is_none());
    }

    #[test]
    fn test_select_file() {
        let machine = selected("a.iso", 10);
        assert_eq!(
            machine.state(),
            &ValidationState::FileSelected { name: "a.iso".into(), size: 10 }
        );
    }

    #[test]
    fn test_compute_in_idle_is_ignored() {
        let mut machine = Machine::new();
        assert!(machine.handle(Event::Compute).is_none());
        assert_eq!(machine.state(), &ValidationState::Idle);
    }

    #[test]
    fn test_compute_then_complete_attaches_digest() {
        let machine = computed("a.iso", 0);
        assert_eq!(machine.state(), &ValidationState::FileSelected { name: "a.iso".into(), size: 0 });
        assert_eq!(machine.digest().unwrap().as_str(), Digest::EMPTY_SHA256);
    }

    #[test]
    fn test_completion_refreshes_metadata() {
        let mut machine = computed("download.iso", 4);
        let Some(Command::Compute(ticket)) = machine.handle(Event::Compute) else {
            panic!("recompute should start");
        };
        machine.handle(Event::Completed {
            ticket,
            result: Ok(empty_digest()),
            metadata: Some(FileMetadata::new("download.iso", 4096)),
        });
        assert_eq!(
            machine.state(),
            &ValidationState::FileSelected { name: "download.iso".into(), size: 4096 }
        );
        assert_eq!(machine.metadata(), Some(&FileMetadata::new("download.iso", 4096)));
    }

    #[test]
    fn test_stale_completion_does_not_touch_metadata() {
        let mut machine = selected("a.iso", 1);
        let Some(Command::Compute(ticket)) = machine.handle(Event::Compute) else {
            panic!("compute should start");
        };
        machine.handle(Event::SelectFile(FileMetadata::new("b.iso", 2)));
        machine.handle(Event::Completed {
            ticket,
            result: Ok(empty_digest()),
            metadata: Some(FileMetadata::new("a.iso", 99)),
        });
        assert_eq!(machine.metadata(), Some(&FileMetadata::new("b.iso", 2)));
    }

    #[test]
    fn test_compute_while_calculating_is_ignored() {
        let mut machine = selected("a.iso", 0);
        let first = machine.handle(Event::Compute);
        assert!(first.is_some());
        assert!(machine.handle(Event::Compute).is_none());
        assert_eq!(machine.state(), &ValidationState::Calculating);

        let Some(Command::Compute(ticket)) = first else { unreachable!() };
        machine.handle(Event::Completed { ticket, result: Ok(empty_digest()), metadata: None });
        assert_eq!(machine.digest().unwrap().as_str(), Digest::EMPTY_SHA256);
    }

    #[test]
    fn test_failed_computation() {
        let mut machine = computed("a.iso", 0);
        let Some(Command::Compute(ticket)) = machine.handle(Event::Compute) else {
            panic!("recompute should start");
        };
        machine.handle(Event::Completed {
            ticket,
            result: Err(Failure::Computation("device removed".into())),
            metadata: None,
        });
        assert_eq!(
            machine.state(),
            &ValidationState::Error(Failure::Computation("device removed".into()))
        );
        assert!(machine.digest().is_none());
    }

    #[test]
    fn test_verify_blank_input() {
        for input in ["", "   ", "\n\t"] {
            let mut machine = computed("a.iso", 0);
            machine.handle(Event::Verify(input.into()));
            assert_eq!(machine.state(), &ValidationState::MissingInput);
        }

        let mut machine = selected("a.iso", 0);
        machine.handle(Event::Verify(" ".into()));
        assert_eq!(machine.state(), &ValidationState::MissingInput);
    }

    #[test]
    fn test_verify_match_ignores_case_and_whitespace() {
        let mut machine = computed("a.iso", 0);
        let input = format!("  {}\n", Digest::EMPTY_SHA256.to_uppercase());
        machine.handle(Event::Verify(input));
        assert_eq!(machine.state(), &ValidationState::Success);
    }

    #[test]
    fn test_verify_mismatch() {
        let mut machine = computed("a.iso", 0);
        let mut wrong = Digest::EMPTY_SHA256.to_string();
        wrong.replace_range(0..1, "f");
        machine.handle(Event::Verify(wrong));
        assert_eq!(machine.state(), &ValidationState::Error(Failure::Mismatch));
    }

    #[test]
    fn test_verify_without_digest() {
        let mut machine = selected("a.iso", 0);
        machine.handle(Event::Verify(Digest::EMPTY_SHA256.into()));
        assert_eq!(machine.state(), &ValidationState::Error(Failure::NoDigest));
    }

    #[test]
    fn test_verify_from_terminal_states() {
        let mut machine = computed("a.iso", 0);
        machine.handle(Event::Verify("".into()));
        machine.handle(Event::Verify("nope".into()));
        assert_eq!(machine.state(), &ValidationState::Error(Failure::Mismatch));
        machine.handle(Event::Verify(Digest::EMPTY_SHA256.into()));
        assert_eq!(machine.state(), &ValidationState::Success);
        machine.handle(Event::Verify(" ".into()));
        assert_eq!(machine.state(), &ValidationState::MissingInput);
    }

    #[test]
    fn test_verify_ignored_while_idle_or_calculating() {
        let mut machine = Machine::new();
        machine.handle(Event::Verify("abc".into()));
        assert_eq!(machine.state(), &ValidationState::Idle);

        let mut machine = selected("a.iso", 0);
        machine.handle(Event::Compute);
        machine.handle(Event::Verify("".into()));
        assert_eq!(machine.state(), &ValidationState::Calculating);
    }

    #[test]
    fn test_new_selection_clears_digest() {
        let mut machine = computed("a.iso", 0);
        machine.handle(Event::SelectFile(FileMetadata::new("b.iso", 0)));
        assert!(machine.digest().is_none());

        machine.handle(Event::Verify(Digest::EMPTY_SHA256.into()));
        assert_eq!(machine.state(), &ValidationState::Error(Failure::NoDigest));
    }

    #[test]
    fn test_completion_after_reselect_is_stale() {
        let mut machine = selected("a.iso", 0);
        let Some(Command::Compute(ticket)) = machine.handle(Event::Compute) else {
            panic!("compute should start");
        };
        machine.handle(Event::SelectFile(FileMetadata::new("b.iso", 3)));
        machine.handle(Event::Completed { ticket, result: Ok(empty_digest()), metadata: None });

        assert_eq!(machine.state(), &ValidationState::FileSelected { name: "b.iso".into(), size: 3 });
        assert!(machine.digest().is_none());
    }

    #[test]
    fn test_cancel() {
        let mut machine = selected("a.iso", 0);
        let Some(Command::Compute(ticket)) = machine.handle(Event::Compute) else {
            panic!("compute should start");
        };
        machine.handle(Event::Cancel);
        assert_eq!(machine.state(), &ValidationState::Error(Failure::Cancelled));

        machine.handle(Event::Completed { ticket, result: Ok(empty_digest()), metadata: None });
        assert_eq!(machine.state(), &ValidationState::Error(Failure::Cancelled));
        assert!(machine.digest().is_none());
    }

    #[test]
    fn test_cancel_outside_calculating_is_ignored() {
        let mut machine = computed("a.iso", 0);
        machine.handle(Event::Cancel);
        assert!(matches!(machine.state(), ValidationState::FileSelected { .. }));
        assert!(machine.digest().is_some());
    }

    #[test]
    fn test_tickets_are_unique() {
        let mut machine = selected("a.iso", 0);
        let Some(Command::Compute(first)) = machine.handle(Event::Compute) else { unreachable!() };
        machine.handle(Event::Cancel);
        let Some(Command::Compute(second)) = machine.handle(Event::Compute) else { unreachable!() };
        assert_ne!(first, second);
    }
}
