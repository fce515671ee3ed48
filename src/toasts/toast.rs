use std::time::Duration;

use crate::toasts::{ToastId, ToastKind};

/// A toast currently held by the registry.
///
/// Records are plain snapshots: the registry mutates its own copy in place on
/// deduplication and publishes clones for rendering. Renderers key their
/// lifecycle controllers by [`Toast::id`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    id: ToastId,
    message: String,
    kind: ToastKind,
    duration: Duration,
    reset_key: u64,
}

impl Toast {
    pub(crate) fn new(id: ToastId, message: String, kind: ToastKind, duration: Duration) -> Self {
        Self {
            id,
            message,
            kind,
            duration,
            reset_key: 0,
        }
    }

    /// Returns the toast id.
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// Returns the message text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the kind.
    pub fn kind(&self) -> &ToastKind {
        &self.kind
    }

    /// Returns the resolved display duration.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Returns the reset counter.
    ///
    /// Only meaningful as a change signal: a value different from the last
    /// one a controller saw means "restart the countdown".
    pub fn reset_key(&self) -> u64 {
        self.reset_key
    }

    /// Returns the accessible label for the toast (its message).
    pub fn label(&self) -> &str {
        &self.message
    }

    /// Returns whether this toast deduplicates with `(message, kind)`.
    pub(crate) fn matches(&self, message: &str, kind: &ToastKind) -> bool {
        self.message == message && &self.kind == kind
    }

    /// Applies a deduplication hit: new duration, bumped reset key.
    pub(crate) fn refresh(&mut self, duration: Duration) -> u64 {
        self.duration = duration;
        self.reset_key += 1;
        self.reset_key
    }
}
