//! # Clock and delayed-callback abstraction.
//!
//! Lifecycle controllers never sleep themselves. They ask a [`Scheduler`] to
//! deliver a [`Fired`] record after a delay and cancel it when the state
//! changes. Whoever drives the controller routes fired records back into
//! [`ToastLifecycle::on_timer`](crate::ToastLifecycle::on_timer).
//!
//! ## Implementations
//! - [`ManualScheduler`]: virtual clock moved by explicit `advance` calls
//!   (tests, frame-driven hosts).
//! - [`TokioScheduler`]: one `tokio::time::sleep` per timer, cancelled through
//!   a child [`CancellationToken`](tokio_util::sync::CancellationToken).
//!
//! ## Rules
//! - A cancelled timer is never delivered.
//! - Keys are unique per scheduler; a controller only accepts the key it is
//!   currently waiting for, so a record already in flight when its timer was
//!   cancelled is ignored.

mod manual;
mod runtime;

use std::time::Duration;

use crate::toasts::ToastId;

pub use manual::ManualScheduler;
pub use runtime::TokioScheduler;

/// Which lifecycle deadline a timer stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timer {
    /// Visible countdown; firing starts the exit animation.
    Countdown,
    /// Exit animation; firing removes the toast.
    Exit,
}

/// Handle of a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerKey(pub(crate) u64);

/// A timer that reached its deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired {
    /// Toast the timer was scheduled for.
    pub toast: ToastId,
    /// Deadline kind.
    pub timer: Timer,
    /// Key returned by [`Scheduler::schedule`].
    pub key: TimerKey,
}

/// Clock plus cancellable delayed delivery.
pub trait Scheduler {
    /// Monotonic time elapsed since the scheduler's origin.
    fn now(&self) -> Duration;

    /// Arranges for a [`Fired`] record to be delivered after `after`.
    fn schedule(&self, toast: ToastId, timer: Timer, after: Duration) -> TimerKey;

    /// Cancels a pending timer. Unknown or already fired keys are ignored.
    fn cancel(&self, key: TimerKey);
}
