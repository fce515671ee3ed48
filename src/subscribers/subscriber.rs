//! # Event subscriber trait.
//!
//! [`Subscribe`] is the extension point for observing toast events.
//!
//! Each subscriber gets:
//! - **Dedicated worker task** (runs independently)
//! - **Per-subscriber bounded queue** (capacity via [`Subscribe::queue_capacity`])
//! - **Panic isolation** (panics are reported as `EventKind::SubscriberPanicked`)
//!
//! ## Rules
//! - A slow subscriber only affects its own queue.
//! - Queue overflow drops the event **for this subscriber only** and publishes
//!   `EventKind::SubscriberOverflow`.
//! - Events are processed sequentially (FIFO) per subscriber.

use async_trait::async_trait;

use crate::events::Event;

/// Event subscriber for toast observability.
///
/// ### Implementation requirements
/// - Use async I/O; avoid blocking the executor.
/// - Handle errors internally; do not panic.
#[async_trait]
pub trait Subscribe: Send + Sync + 'static {
    /// Processes a single event.
    ///
    /// Called from the subscriber's worker task, never from the driver loop.
    async fn on_event(&self, event: &Event);

    /// Returns the name used in overflow/panic events.
    ///
    /// The default uses `type_name::<Self>()`; override it with something short.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Returns the preferred queue capacity (clamped to at least 1).
    ///
    /// Default: 256.
    fn queue_capacity(&self) -> usize {
        256
    }
}
