//! # Events emitted by the toast runtime.
//!
//! The [`EventKind`] enum classifies events into three groups:
//! - **Registry events**: a toast was added, refreshed or removed
//! - **Lifecycle events**: countdown paused/resumed/restarted, exit started
//! - **Runtime events**: shutdown and subscriber health
//!
//! The [`Event`] struct carries the optional metadata relevant to its kind.
//!
//! ## Ordering guarantees
//! Each event gets a globally unique, monotonically increasing `seq`.
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use toastvisor::{Event, EventKind, ToastId};
//!
//! let id = ToastId::new();
//! let ev = Event::new(EventKind::CountdownPaused)
//!     .with_toast(id)
//!     .with_remaining(Duration::from_millis(400));
//!
//! assert_eq!(ev.kind, EventKind::CountdownPaused);
//! assert_eq!(ev.toast, Some(id));
//! assert_eq!(ev.remaining_ms, Some(400));
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::{Duration, SystemTime};

use crate::toasts::{ToastId, ToastKind};

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of toast events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    // === Registry events ===
    /// A new toast was appended to the list.
    ///
    /// Sets:
    /// - `toast`, `toast_kind`, `reason` (message), `duration_ms`
    ToastAdded,

    /// An equivalent toast was re-requested; its countdown will restart.
    ///
    /// Sets:
    /// - `toast`, `toast_kind`, `duration_ms`, `reset_key`
    ToastRefreshed,

    /// The toast left the list.
    ///
    /// Sets:
    /// - `toast`
    ToastRemoved,

    // === Lifecycle events ===
    /// Pointer entered; countdown frozen.
    ///
    /// Sets:
    /// - `toast`, `remaining_ms`
    CountdownPaused,

    /// Pointer left; countdown running again.
    ///
    /// Sets:
    /// - `toast`, `remaining_ms`
    CountdownResumed,

    /// Countdown restarted at full duration after a refresh.
    ///
    /// Sets:
    /// - `toast`, `duration_ms`, `reset_key`
    CountdownRestarted,

    /// Exit animation started (countdown elapsed or dismissed).
    ///
    /// Sets:
    /// - `toast`
    ToastExiting,

    // === Runtime events ===
    /// `Toaster::shutdown` was called.
    ShutdownRequested,

    /// Subscriber dropped an event (queue full or worker closed).
    ///
    /// Sets:
    /// - `reason`: subscriber name and cause
    SubscriberOverflow,

    /// Subscriber panicked while processing an event.
    ///
    /// Sets:
    /// - `reason`: subscriber name and panic message
    SubscriberPanicked,
}

/// Toast event with optional metadata.
#[derive(Debug, Clone)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Event classification.
    pub kind: EventKind,

    /// Toast the event is about.
    pub toast: Option<ToastId>,
    /// Kind of that toast.
    pub toast_kind: Option<ToastKind>,
    /// Reset key after a refresh/restart.
    pub reset_key: Option<u64>,
    /// Resolved display duration in milliseconds (compact).
    pub duration_ms: Option<u32>,
    /// Countdown time left in milliseconds (compact).
    pub remaining_ms: Option<u32>,
    /// Human-readable detail (message text, overflow or panic info).
    pub reason: Option<Arc<str>>,
}

impl Event {
    /// Creates an event of the given kind with the current time and next sequence number.
    pub fn new(kind: EventKind) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
            toast: None,
            toast_kind: None,
            reset_key: None,
            duration_ms: None,
            remaining_ms: None,
            reason: None,
        }
    }

    /// Attaches the toast id.
    #[inline]
    pub fn with_toast(mut self, id: ToastId) -> Self {
        self.toast = Some(id);
        self
    }

    /// Attaches the toast kind.
    #[inline]
    pub fn with_toast_kind(mut self, kind: ToastKind) -> Self {
        self.toast_kind = Some(kind);
        self
    }

    /// Attaches a reset key.
    #[inline]
    pub fn with_reset_key(mut self, key: u64) -> Self {
        self.reset_key = Some(key);
        self
    }

    /// Attaches the display duration (stored as milliseconds).
    #[inline]
    pub fn with_duration(mut self, d: Duration) -> Self {
        self.duration_ms = Some(compact_ms(d));
        self
    }

    /// Attaches the remaining countdown (stored as milliseconds).
    #[inline]
    pub fn with_remaining(mut self, d: Duration) -> Self {
        self.remaining_ms = Some(compact_ms(d));
        self
    }

    /// Attaches a human-readable reason.
    #[inline]
    pub fn with_reason(mut self, reason: impl Into<Arc<str>>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Creates a subscriber overflow event.
    #[inline]
    pub fn subscriber_overflow(subscriber: &'static str, reason: &'static str) -> Self {
        Event::new(EventKind::SubscriberOverflow)
            .with_reason(format!("subscriber={subscriber} reason={reason}"))
    }

    /// Creates a subscriber panic event.
    #[inline]
    pub fn subscriber_panicked(subscriber: &'static str, info: String) -> Self {
        Event::new(EventKind::SubscriberPanicked)
            .with_reason(format!("subscriber={subscriber} info={info}"))
    }

    /// Returns true for [`EventKind::SubscriberOverflow`] events.
    #[inline]
    pub fn is_subscriber_overflow(&self) -> bool {
        matches!(self.kind, EventKind::SubscriberOverflow)
    }
}

fn compact_ms(d: Duration) -> u32 {
    d.as_millis().min(u128::from(u32::MAX)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_is_monotonic() {
        let a = Event::new(EventKind::ToastAdded);
        let b = Event::new(EventKind::ToastAdded);
        assert!(b.seq > a.seq);
    }

    #[test]
    fn huge_durations_saturate() {
        let ev = Event::new(EventKind::ToastAdded).with_duration(Duration::from_secs(u64::MAX));
        assert_eq!(ev.duration_ms, Some(u32::MAX));
    }
}
