//! # Event subscribers for the toast runtime.
//!
//! This module provides the [`Subscribe`] trait, the [`SubscriberSet`]
//! fan-out used by the toaster, and (with the `logging` feature) the
//! built-in [`LogWriter`].
//!
//! ## Architecture
//! ```text
//! Driver ── publish(Event) ──► Bus ──► subscriber listener ──► SubscriberSet
//!                                                                   │
//!                                                  ┌────────────────┼────────────┐
//!                                                  ▼                ▼            ▼
//!                                              LogWriter         Metrics       Custom
//! ```
//!
//! ## Implementing custom subscribers
//! ```no_run
//! use async_trait::async_trait;
//! use toastvisor::{Event, EventKind, Subscribe};
//!
//! struct Audit;
//!
//! #[async_trait]
//! impl Subscribe for Audit {
//!     async fn on_event(&self, event: &Event) {
//!         if event.kind == EventKind::ToastAdded {
//!             // record which notifications users were shown
//!         }
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "audit"
//!     }
//! }
//! ```

#[cfg(feature = "logging")]
mod log;
mod subscriber;
mod subscriber_set;

#[cfg(feature = "logging")]
pub use log::LogWriter;
pub use subscriber::Subscribe;
pub use subscriber_set::SubscriberSet;
