//! Diagnostics raised while comparing two documents.
//!
//! The comparison pipeline never logs on its own; it reports what it
//! notices to an [`EventSink`] supplied by the caller. The CLI uses
//! [`LogSink`], tests use [`RecordingSink`].

use crate::diff::DiffStats;
use crate::document::FileKind;
use log::{debug, info, warn};
use std::cell::RefCell;
use std::fmt;

/// Something worth reporting during a comparison
#[derive(Debug, Clone, PartialEq)]
pub enum DiffEvent {
    /// The two files were detected as different kinds
    TypeMismatch {
        left: String,
        left_kind: FileKind,
        right: String,
        right_kind: FileKind,
    },

    /// A file was turned into its canonical text
    Canonicalized {
        label: String,
        kind: FileKind,
        chars: usize,
    },

    /// Whitespace normalization was applied to both sides
    WhitespaceNormalized,

    /// The diff was computed
    DiffComputed { stats: DiffStats },
}

impl fmt::Display for DiffEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiffEvent::TypeMismatch {
                left,
                left_kind,
                right,
                right_kind,
            } => write!(
                f,
                "File types differ: {} is {}, {} is {}; comparing each as its own type",
                left, left_kind, right, right_kind
            ),
            DiffEvent::Canonicalized { label, kind, chars } => {
                write!(f, "Canonicalized {} as {} ({} chars)", label, kind, chars)
            }
            DiffEvent::WhitespaceNormalized => write!(f, "Ignoring leading/trailing whitespace"),
            DiffEvent::DiffComputed { stats } => write!(f, "Diff: {}", stats.summary()),
        }
    }
}

/// Receiver for comparison events
pub trait EventSink {
    fn emit(&self, event: DiffEvent);
}

/// Forwards events to the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl EventSink for LogSink {
    fn emit(&self, event: DiffEvent) {
        match &event {
            DiffEvent::TypeMismatch { .. } => warn!("{}", event),
            DiffEvent::DiffComputed { .. } => info!("{}", event),
            _ => debug!("{}", event),
        }
    }
}

/// Keeps every event in memory
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: RefCell<Vec<DiffEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events received so far
    pub fn events(&self) -> Vec<DiffEvent> {
        self.events.borrow().clone()
    }

    /// Number of type mismatch warnings received
    pub fn mismatch_count(&self) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|e| matches!(e, DiffEvent::TypeMismatch { .. }))
            .count()
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: DiffEvent) {
        self.events.borrow_mut().push(event);
    }
}

/// Discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&self, _event: DiffEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_keeps_order() {
        let sink = RecordingSink::new();
        sink.emit(DiffEvent::WhitespaceNormalized);
        sink.emit(DiffEvent::DiffComputed {
            stats: DiffStats::default(),
        });
        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], DiffEvent::WhitespaceNormalized);
        assert_eq!(sink.mismatch_count(), 0);
    }

    #[test]
    fn test_mismatch_message() {
        let event = DiffEvent::TypeMismatch {
            left: "a.yaml".to_string(),
            left_kind: FileKind::Yaml,
            right: "b.json".to_string(),
            right_kind: FileKind::Json,
        };
        assert_eq!(
            event.to_string(),
            "File types differ: a.yaml is yaml, b.json is json; comparing each as its own type"
        );
    }
}
