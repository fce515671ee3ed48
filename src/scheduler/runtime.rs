//! # Tokio-backed scheduler.
//!
//! Each scheduled timer is a spawned task racing a `tokio::time::sleep`
//! against its own [`CancellationToken`]. Tokens are children of the runtime
//! token, so shutting the runtime down cancels every pending timer at once.
//!
//! ```text
//! schedule(toast, timer, after)
//!   └─► spawn ─┬─ sleep(after) ──► tx.send(Fired) ──► driver loop
//!              └─ token.cancelled() ──► exit silently
//! ```
//!
//! The clock follows `tokio::time::Instant`, so a paused test runtime gives a
//! fully virtual timeline.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::scheduler::{Fired, Scheduler, Timer, TimerKey};
use crate::toasts::ToastId;

/// Scheduler delivering fired timers through an mpsc channel.
///
/// Must be used from within a tokio runtime (it spawns tasks).
#[derive(Clone)]
pub struct TokioScheduler {
    origin: Instant,
    next_key: Arc<AtomicU64>,
    timers: Arc<Mutex<HashMap<TimerKey, CancellationToken>>>,
    tx: mpsc::UnboundedSender<Fired>,
    runtime_token: CancellationToken,
}

impl TokioScheduler {
    /// Creates a scheduler whose timers are delivered on `tx`.
    ///
    /// Timers stop when `runtime_token` is cancelled.
    pub fn new(tx: mpsc::UnboundedSender<Fired>, runtime_token: CancellationToken) -> Self {
        Self {
            origin: Instant::now(),
            next_key: Arc::new(AtomicU64::new(0)),
            timers: Arc::new(Mutex::new(HashMap::new())),
            tx,
            runtime_token,
        }
    }

    /// Returns the number of timers that have neither fired nor been cancelled.
    pub fn pending(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<TimerKey, CancellationToken>> {
        self.timers.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Scheduler for TokioScheduler {
    fn now(&self) -> Duration {
        Instant::now().saturating_duration_since(self.origin)
    }

    fn schedule(&self, toast: ToastId, timer: Timer, after: Duration) -> TimerKey {
        let key = TimerKey(self.next_key.fetch_add(1, Ordering::Relaxed));
        let token = self.runtime_token.child_token();
        self.lock().insert(key, token.clone());

        let sleep = tokio::time::sleep(after);
        let timers = Arc::clone(&self.timers);
        let tx = self.tx.clone();

        tokio::spawn(async move {
            tokio::select! {
                _ = sleep => {
                    let still_pending = timers
                        .lock()
                        .unwrap_or_else(|poisoned| poisoned.into_inner())
                        .remove(&key)
                        .is_some();
                    if still_pending && !token.is_cancelled() {
                        let _ = tx.send(Fired { toast, timer, key });
                    }
                }
                _ = token.cancelled() => {}
            }
        });
        key
    }

    fn cancel(&self, key: TimerKey) {
        if let Some(token) = self.lock().remove(&key) {
            token.cancel();
        }
    }
}
