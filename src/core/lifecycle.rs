//! # ToastLifecycle: per-toast timing state machine.
//!
//! Drives one toast from appearance to removal:
//! - counts down its display duration,
//! - pauses while the pointer is over it,
//! - restarts when the registry refreshes it (new `reset_key`),
//! - plays the exit delay, then calls the removal callback once.
//!
//! ## States
//! ```text
//!                 pointer_enter                      dismiss
//!   Active(rem) ───────────────► Paused(rem) ─────────────────┐
//!     ▲   │   ◄───────────────                                │
//!     │   │     pointer_leave                                 ▼
//!     │   ├── countdown fires ─────────────────────────────► Exiting ── exit delay ──► Removed
//!     │   └── dismiss ─────────────────────────────────────►    │                      (on_remove(id))
//!     │                                                         │
//!     └──── reset_key changed (from Active or Paused) ──        ✗ resets ignored
//! ```
//!
//! ## Rules
//! - At most **one** timer is pending per controller (countdown or exit)
//! - Every state change cancels the pending timer before scheduling another
//! - Fired timers whose key is not the pending one are **ignored** (stale)
//! - The removal callback runs **exactly once**
//! - Dropping the controller cancels its pending timer

use std::time::Duration;

use crate::scheduler::{Fired, Scheduler, Timer, TimerKey};
use crate::toasts::{Toast, ToastId};

/// Callback invoked with the toast id once the exit delay has elapsed.
pub type RemoveFn = Box<dyn FnMut(ToastId) + Send>;

/// Current state of a [`ToastLifecycle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Countdown running; `remaining` was left at scheduler time `since`.
    Active {
        /// Time left when the countdown (re)started.
        remaining: Duration,
        /// Scheduler time at which the countdown (re)started.
        since: Duration,
    },
    /// Countdown suspended with exactly `remaining` left.
    Paused {
        /// Time left when the pointer entered.
        remaining: Duration,
    },
    /// Exit animation running.
    Exiting,
    /// Terminal; the removal callback has run.
    Removed,
}

/// Observable effect of a controller operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// `Active → Paused`.
    Paused {
        /// Countdown time preserved for resumption.
        remaining: Duration,
    },
    /// `Paused → Active`.
    Resumed {
        /// Countdown rescheduled for this long.
        remaining: Duration,
    },
    /// Countdown restarted to the full duration after a reset signal.
    Restarted {
        /// Full duration now counting down.
        duration: Duration,
        /// Reset key that triggered the restart.
        reset_key: u64,
    },
    /// Exit animation started (countdown elapsed or dismissed).
    Exiting,
    /// Exit delay elapsed; removal was requested.
    Removed,
}

/// Timing state machine for a single toast.
///
/// The controller never sleeps: it schedules deadlines on `S` and expects
/// whoever drives it to pass fired timers back through [`Self::on_timer`].
pub struct ToastLifecycle<S: Scheduler> {
    id: ToastId,
    duration: Duration,
    reset_key: u64,
    exit_delay: Duration,
    phase: Phase,
    pending: Option<TimerKey>,
    scheduler: S,
    on_remove: Option<RemoveFn>,
}

impl<S: Scheduler> ToastLifecycle<S> {
    /// Starts a controller for `toast` in `Active(duration)`.
    ///
    /// `on_remove` is called with the toast id after the exit delay.
    pub fn new(
        toast: &Toast,
        exit_delay: Duration,
        scheduler: S,
        on_remove: impl FnMut(ToastId) + Send + 'static,
    ) -> Self {
        let mut lifecycle = Self {
            id: toast.id(),
            duration: toast.duration(),
            reset_key: toast.reset_key(),
            exit_delay,
            phase: Phase::Exiting,
            pending: None,
            scheduler,
            on_remove: Some(Box::new(on_remove)),
        };
        lifecycle.start_countdown(toast.duration());
        lifecycle
    }

    /// Returns the id of the controlled toast.
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the countdown time left (zero once exiting).
    pub fn remaining(&self) -> Duration {
        match self.phase {
            Phase::Active { remaining, since } => {
                let elapsed = self.scheduler.now().saturating_sub(since);
                remaining.saturating_sub(elapsed)
            }
            Phase::Paused { remaining } => remaining,
            Phase::Exiting | Phase::Removed => Duration::ZERO,
        }
    }

    /// Pointer entered the toast: freeze the countdown.
    pub fn pointer_enter(&mut self) -> Option<Transition> {
        let Phase::Active { .. } = self.phase else {
            return None;
        };
        let remaining = self.remaining();
        self.cancel_pending();
        self.phase = Phase::Paused { remaining };
        Some(Transition::Paused { remaining })
    }

    /// Pointer left the toast: resume with the time that was left.
    pub fn pointer_leave(&mut self) -> Option<Transition> {
        let Phase::Paused { remaining } = self.phase else {
            return None;
        };
        self.start_countdown(remaining);
        Some(Transition::Resumed { remaining })
    }

    /// Manual dismissal (close button). No-op once exiting.
    pub fn dismiss(&mut self) -> Option<Transition> {
        match self.phase {
            Phase::Active { .. } | Phase::Paused { .. } => Some(self.start_exit()),
            Phase::Exiting | Phase::Removed => None,
        }
    }

    /// Observes the latest record for this toast.
    ///
    /// A `reset_key` different from the last one seen restarts the countdown
    /// at the record's current duration, unless the exit already began.
    pub fn sync(&mut self, toast: &Toast) -> Option<Transition> {
        if toast.id() != self.id {
            return None;
        }
        self.duration = toast.duration();
        if toast.reset_key() == self.reset_key {
            return None;
        }
        self.reset_key = toast.reset_key();

        match self.phase {
            Phase::Active { .. } | Phase::Paused { .. } => {
                self.start_countdown(self.duration);
                Some(Transition::Restarted {
                    duration: self.duration,
                    reset_key: self.reset_key,
                })
            }
            Phase::Exiting | Phase::Removed => None,
        }
    }

    /// Delivers a fired timer.
    ///
    /// Records for other toasts or for timers that are no longer pending are
    /// ignored.
    pub fn on_timer(&mut self, fired: Fired) -> Option<Transition> {
        if fired.toast != self.id || self.pending != Some(fired.key) {
            return None;
        }
        self.pending = None;

        match (self.phase, fired.timer) {
            (Phase::Active { .. }, Timer::Countdown) => Some(self.start_exit()),
            (Phase::Exiting, Timer::Exit) => {
                self.phase = Phase::Removed;
                if let Some(mut on_remove) = self.on_remove.take() {
                    on_remove(self.id);
                }
                Some(Transition::Removed)
            }
            _ => None,
        }
    }

    fn start_countdown(&mut self, remaining: Duration) {
        self.cancel_pending();
        self.phase = Phase::Active {
            remaining,
            since: self.scheduler.now(),
        };
        self.pending = Some(self.scheduler.schedule(self.id, Timer::Countdown, remaining));
    }

    fn start_exit(&mut self) -> Transition {
        self.cancel_pending();
        self.phase = Phase::Exiting;
        self.pending = Some(self.scheduler.schedule(self.id, Timer::Exit, self.exit_delay));
        Transition::Exiting
    }

    fn cancel_pending(&mut self) {
        if let Some(key) = self.pending.take() {
            self.scheduler.cancel(key);
        }
    }
}

impl<S: Scheduler> Drop for ToastLifecycle<S> {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
