//! Toast events: types and broadcast bus.
//!
//! Every state change in the runtime is published as an [`Event`] on the
//! [`Bus`]. The toaster forwards bus traffic to its
//! [`SubscriberSet`](crate::SubscriberSet), which is how logging and any
//! host-side observers see what happens to toasts.
//!
//! ## Contents
//! - [`EventKind`], [`Event`] event classification and payload metadata
//! - [`Bus`] thin wrapper over `tokio::sync::broadcast`
//!
//! ## Quick reference
//! - **Publishers**: the driver loop (registry and lifecycle transitions),
//!   `Toaster::shutdown`, `SubscriberSet` workers (overflow/panic).
//! - **Consumers**: the toaster's subscriber listener, plus any receiver
//!   obtained from `Toaster::events`.

mod bus;
mod event;

pub use bus::Bus;
pub use event::{Event, EventKind};
