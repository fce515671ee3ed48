//! Runtime core: registry, lifecycle controllers and the driver loop.
//!
//! Public pieces usable on their own (no tokio runtime needed):
//! - [`registry`]: ordered, deduplicating list of visible toasts;
//! - [`lifecycle`]: per-toast countdown/pause/exit state machine over a [`Scheduler`](crate::Scheduler).
//!
//! Tokio runtime pieces:
//! - [`toaster`]: owns the driver and subscriber listener, handles shutdown;
//! - [`driver`]: single loop applying commands and fired timers;
//! - [`handle`]: cloneable command sender and list snapshot;
//! - [`builder`]: wires everything together.

mod builder;
mod config;
mod driver;
mod handle;
mod lifecycle;
mod registry;
mod toaster;

pub use builder::ToasterBuilder;
pub use config::ToasterConfig;
pub use handle::ToasterHandle;
pub use lifecycle::{Phase, RemoveFn, ToastLifecycle, Transition};
pub use registry::{Added, ToastRegistry};
pub use toaster::Toaster;
