//! # Non-blocking event fan-out to multiple subscribers.
//!
//! ## Architecture
//! ```text
//! emit(event)
//!     │
//!     ├──► [queue 1] ──► worker 1 ──► subscriber1.on_event()
//!     │    (bounded)         └──────► panic → SubscriberPanicked
//!     └──► [queue N] ──► worker N ──► subscriberN.on_event()
//! ```
//!
//! ## Rules
//! - **Non-blocking**: `emit()` uses `try_send`
//! - **Overflow**: event dropped for that subscriber only, `SubscriberOverflow` published
//! - **Per-subscriber FIFO**, no cross-subscriber ordering
//!
//! **Warning**: `AssertUnwindSafe` is used; a subscriber that panics while
//! holding a lock may leave its own state inconsistent.

use std::sync::Arc;

use futures::FutureExt;
use tokio::{sync::mpsc, task::JoinHandle};

use crate::events::{Bus, Event};
use crate::subscribers::Subscribe;

struct SubscriberChannel {
    name: &'static str,
    sender: mpsc::Sender<Arc<Event>>,
}

/// Fan-out coordinator for event subscribers.
pub struct SubscriberSet {
    channels: Vec<SubscriberChannel>,
    workers: Vec<JoinHandle<()>>,
    bus: Bus,
}

impl SubscriberSet {
    /// Creates the set and spawns one worker per subscriber.
    ///
    /// Panics and overflows are reported on `bus`.
    #[must_use]
    pub fn new(subs: Vec<Arc<dyn Subscribe>>, bus: Bus) -> Self {
        let mut channels = Vec::with_capacity(subs.len());
        let mut workers = Vec::with_capacity(subs.len());

        for sub in subs {
            let name = sub.name();
            let (tx, mut rx) = mpsc::channel::<Arc<Event>>(sub.queue_capacity().max(1));
            let bus_for_worker = bus.clone();

            let handle = tokio::spawn(async move {
                while let Some(ev) = rx.recv().await {
                    let fut = sub.on_event(ev.as_ref());
                    if let Err(panic) = std::panic::AssertUnwindSafe(fut).catch_unwind().await {
                        let info = if let Some(msg) = panic.downcast_ref::<&'static str>() {
                            (*msg).to_string()
                        } else if let Some(msg) = panic.downcast_ref::<String>() {
                            msg.clone()
                        } else {
                            "unknown panic".to_string()
                        };
                        bus_for_worker.publish(Event::subscriber_panicked(sub.name(), info));
                    }
                }
            });
            channels.push(SubscriberChannel { name, sender: tx });
            workers.push(handle);
        }

        Self {
            channels,
            workers,
            bus,
        }
    }

    /// Returns the number of subscribers.
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// Returns true if there are no subscribers.
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Emits an event to all subscribers without waiting.
    ///
    /// Overflow events are not re-reported when they themselves overflow.
    pub fn emit(&self, event: Event) {
        let is_overflow_evt = event.is_subscriber_overflow();
        let event = Arc::new(event);

        for channel in &self.channels {
            let reason = match channel.sender.try_send(Arc::clone(&event)) {
                Ok(()) => continue,
                Err(mpsc::error::TrySendError::Full(_)) => "full",
                Err(mpsc::error::TrySendError::Closed(_)) => "closed",
            };
            if !is_overflow_evt {
                self.bus.publish(Event::subscriber_overflow(channel.name, reason));
            }
        }
    }

    /// Closes every queue and waits for the workers to drain them.
    pub async fn shutdown(self) {
        drop(self.channels);

        for h in self.workers {
            let _ = h.await;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::events::EventKind;

    #[derive(Default)]
    struct Collect(Mutex<Vec<EventKind>>);

    #[async_trait]
    impl Subscribe for Collect {
        async fn on_event(&self, event: &Event) {
            self.0.lock().unwrap().push(event.kind);
        }

        fn name(&self) -> &'static str {
            "collect"
        }
    }

    struct Explode;

    #[async_trait]
    impl Subscribe for Explode {
        async fn on_event(&self, _event: &Event) {
            panic!("boom");
        }

        fn name(&self) -> &'static str {
            "explode"
        }
    }

    #[tokio::test]
    async fn delivers_to_every_subscriber_in_order() {
        let a = Arc::new(Collect::default());
        let b = Arc::new(Collect::default());
        let subs: Vec<Arc<dyn Subscribe>> = vec![a.clone(), b.clone()];
        let set = SubscriberSet::new(subs, Bus::new(8));

        set.emit(Event::new(EventKind::ToastAdded));
        set.emit(Event::new(EventKind::ToastRemoved));
        set.shutdown().await;

        let expected = vec![EventKind::ToastAdded, EventKind::ToastRemoved];
        assert_eq!(*a.0.lock().unwrap(), expected);
        assert_eq!(*b.0.lock().unwrap(), expected);
    }

    #[tokio::test]
    async fn panics_are_reported_on_the_bus() {
        let bus = Bus::new(8);
        let mut rx = bus.subscribe();
        let subs: Vec<Arc<dyn Subscribe>> = vec![Arc::new(Explode)];
        let set = SubscriberSet::new(subs, bus);

        set.emit(Event::new(EventKind::ToastAdded));
        set.shutdown().await;

        let ev = rx.try_recv().expect("panic event");
        assert_eq!(ev.kind, EventKind::SubscriberPanicked);
        assert!(ev.reason.as_deref().is_some_and(|r| r.contains("boom")));
    }
}
