//! # Event bus for broadcasting toast events.
//!
//! [`Bus`] wraps [`tokio::sync::broadcast`] so that the driver loop can
//! publish without ever waiting on observers.
//!
//! ## Architecture
//! ```text
//! Publishers:                        Receivers:
//!   Driver loop ──┐                ┌──► subscriber listener ──► SubscriberSet
//!   Toaster     ──┼──► Bus ────────┤
//!   Sub workers ──┘ (broadcast)    └──► Toaster::events() (tests, hosts)
//! ```
//!
//! ## Rules
//! - **Non-blocking publish**: `publish()` never waits.
//! - **Bounded capacity**: one ring buffer shared by all receivers.
//! - **Lag handling**: slow receivers observe `RecvError::Lagged(n)`.
//! - **No persistence**: events sent while nobody listens are dropped.

use tokio::sync::broadcast;

use super::event::Event;

/// Broadcast channel for toast events.
///
/// Cheap to clone (the sender is `Arc`-backed).
#[derive(Clone, Debug)]
pub struct Bus {
    tx: broadcast::Sender<Event>,
}

impl Bus {
    /// Creates a new bus; capacity is clamped to at least 1.
    pub fn new(capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel::<Event>(capacity.max(1));
        Self { tx }
    }

    /// Publishes an event to every current receiver.
    ///
    /// Returns immediately; without receivers the event is dropped.
    pub fn publish(&self, ev: Event) {
        let _ = self.tx.send(ev);
    }

    /// Creates a receiver for events published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.tx.subscribe()
    }
}
