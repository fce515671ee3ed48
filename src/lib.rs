//! # toastvisor
//!
//! **Toastvisor** is the state engine behind toast notifications: short-lived
//! messages that appear, count down, pause while hovered and leave through an
//! exit animation.
//!
//! It does not render anything. A host UI feeds it additions and pointer
//! events and draws whatever list it publishes.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!   host UI ── add / pointer_enter / pointer_leave / dismiss ──┐
//!                                                              ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Toaster (runtime)                                                │
//! │  - Driver loop (single owner of all state)                        │
//! │  - ToastRegistry (ordered list, (message, kind) deduplication)    │
//! │  - ToastLifecycle per toast (countdown / pause / exit FSM)        │
//! │  - TokioScheduler (cancellable timers, keyed)                     │
//! └──────┬──────────────────────────────────────────────┬─────────────┘
//!        │ watch: Arc<[Toast]>                          │ publish(Event)
//!        ▼                                              ▼
//!   host UI re-renders                     ┌─────────────────────────┐
//!                                          │ Bus (broadcast channel) │
//!                                          └────────────┬────────────┘
//!                                                       ▼
//!                                                 SubscriberSet
//!                                          ┌─────────┼─────────┐
//!                                          ▼         ▼         ▼
//!                                       worker1   worker2   workerN
//! ```
//!
//! ### Lifecycle of one toast
//! ```text
//! add(spec) ──► Active{remaining = duration}
//!
//! Active  ── pointer_enter ──► Paused{remaining - elapsed}
//! Paused  ── pointer_leave ──► Active{remaining}
//! Active  ── countdown fired ─┐
//! Active/Paused ── dismiss ───┴► Exiting ── exit_delay ──► Removed (registry.remove)
//!
//! add(same message + kind) ──► reset_key += 1 ──► Active{new duration} (from Active or Paused)
//! ```
//!
//! ## Features
//! | Area              | Description                                              | Key types / traits                        |
//! |-------------------|----------------------------------------------------------|-------------------------------------------|
//! | **Registry**      | Ordered, deduplicating list of visible toasts.            | [`ToastRegistry`], [`Toast`], [`ToastSpec`] |
//! | **Lifecycle**     | Countdown, pause-on-hover and exit state machine.         | [`ToastLifecycle`], [`Phase`]             |
//! | **Scheduling**    | Pluggable timers; virtual clock for tests.                | [`Scheduler`], [`ManualScheduler`]        |
//! | **Runtime**       | Tokio driver with a cloneable handle.                     | [`Toaster`], [`ToasterHandle`]            |
//! | **Subscriber API**| Observe toast events (logging, analytics, a11y).          | [`Subscribe`], [`Event`]                  |
//! | **Errors**        | Typed errors for handle misuse and runtime failures.      | [`ToastError`], [`RuntimeError`]          |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] subscriber backed by `tracing`.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::time::Duration;
//! use toastvisor::{Toaster, ToasterConfig, ToastSpec};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let cfg = ToasterConfig::default();
//!
//!     #[cfg(feature = "logging")]
//!     let subs: Vec<Arc<dyn toastvisor::Subscribe>> = vec![Arc::new(toastvisor::LogWriter)];
//!     #[cfg(not(feature = "logging"))]
//!     let subs: Vec<Arc<dyn toastvisor::Subscribe>> = Vec::new();
//!
//!     let toaster = Toaster::builder(cfg).with_subscribers(subs).build();
//!     let handle = toaster.handle();
//!
//!     handle.add(ToastSpec::success("Saved").with_duration(Duration::from_millis(1500)))?;
//!     handle.add(ToastSpec::success("Saved"))?; // same toast, countdown restarts
//!
//!     let list = handle.snapshot().await?;
//!     assert_eq!(list.len(), 1);
//!     assert_eq!(list[0].reset_key(), 1);
//!
//!     toaster.shutdown().await?;
//!     Ok(())
//! }
//! ```
mod core;
mod error;
mod events;
mod scheduler;
mod subscribers;
mod toasts;

// ---- Public re-exports ----

pub use core::{
    Added, Phase, RemoveFn, ToastLifecycle, ToastRegistry, Toaster, ToasterBuilder,
    ToasterConfig, ToasterHandle, Transition,
};
pub use error::{RuntimeError, ToastError};
pub use events::{Bus, Event, EventKind};
pub use scheduler::{Fired, ManualScheduler, Scheduler, Timer, TimerKey, TokioScheduler};
pub use subscribers::{Subscribe, SubscriberSet};
pub use toasts::{Toast, ToastId, ToastKind, ToastSpec};

// Optional: expose a simple built-in logger subscriber.
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;
