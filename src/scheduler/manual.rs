//! # Virtual-clock scheduler.
//!
//! [`ManualScheduler`] keeps time in a counter that only moves when
//! [`ManualScheduler::advance`] is called. Due timers are handed to a
//! dispatch closure in deadline order (ties in scheduling order), with the
//! clock set to each timer's deadline while it is dispatched.
//!
//! ```text
//! advance(800ms)
//!   ├─► pop Countdown@500  → now=500 → dispatch → controller schedules Exit@750
//!   ├─► pop Exit@750       → now=750 → dispatch → removal callback
//!   └─► now=800
//! ```

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::scheduler::{Fired, Scheduler, Timer, TimerKey};
use crate::toasts::ToastId;

#[derive(Default)]
struct State {
    now: Duration,
    next_key: u64,
    /// Pending timers ordered by `(deadline, key)`.
    pending: BTreeMap<(Duration, u64), Fired>,
}

/// Deterministic scheduler driven by explicit clock advances.
///
/// Cheap to clone; clones share the same clock and timer queue.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    state: Arc<Mutex<State>>,
}

impl ManualScheduler {
    /// Creates a scheduler with the clock at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the clock forward by `by`, dispatching every timer that falls due.
    ///
    /// Timers scheduled from inside `dispatch` are delivered in the same call
    /// if their deadline is within the window. The lock is not held while
    /// `dispatch` runs, so it may schedule or cancel freely.
    pub fn advance(&self, by: Duration, mut dispatch: impl FnMut(Fired)) {
        let target = self.lock().now.saturating_add(by);

        loop {
            let next = {
                let mut state = self.lock();
                let due = state
                    .pending
                    .first_key_value()
                    .map(|(&(deadline, key), _)| (deadline, key))
                    .filter(|(deadline, _)| *deadline <= target);

                match due {
                    Some((deadline, key)) => {
                        state.now = deadline;
                        state.pending.remove(&(deadline, key))
                    }
                    None => {
                        state.now = target;
                        None
                    }
                }
            };

            match next {
                Some(fired) => dispatch(fired),
                None => break,
            }
        }
    }

    /// Returns the number of timers still waiting.
    pub fn pending(&self) -> usize {
        self.lock().pending.len()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Scheduler for ManualScheduler {
    fn now(&self) -> Duration {
        self.lock().now
    }

    fn schedule(&self, toast: ToastId, timer: Timer, after: Duration) -> TimerKey {
        let mut state = self.lock();
        let key = TimerKey(state.next_key);
        state.next_key += 1;

        let deadline = state.now.saturating_add(after);
        state.pending.insert((deadline, key.0), Fired { toast, timer, key });
        key
    }

    fn cancel(&self, key: TimerKey) {
        self.lock().pending.retain(|&(_, k), _| k != key.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn delivers_in_deadline_order() {
        let sched = ManualScheduler::new();
        let id = ToastId::new();
        let late = sched.schedule(id, Timer::Exit, ms(300));
        let early = sched.schedule(id, Timer::Countdown, ms(100));

        let mut seen = Vec::new();
        sched.advance(ms(500), |f| seen.push((f.key, sched.now())));

        assert_eq!(seen, vec![(early, ms(100)), (late, ms(300))]);
        assert_eq!(sched.now(), ms(500));
    }

    #[test]
    fn cancelled_timer_is_never_delivered() {
        let sched = ManualScheduler::new();
        let key = sched.schedule(ToastId::new(), Timer::Countdown, ms(100));
        sched.cancel(key);

        let mut count = 0;
        sched.advance(ms(1000), |_| count += 1);
        assert_eq!(count, 0);
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn timers_outside_the_window_stay_pending() {
        let sched = ManualScheduler::new();
        sched.schedule(ToastId::new(), Timer::Countdown, ms(500));

        let mut count = 0;
        sched.advance(ms(499), |_| count += 1);
        assert_eq!(count, 0);
        assert_eq!(sched.pending(), 1);

        sched.advance(ms(1), |_| count += 1);
        assert_eq!(count, 1);
    }

    #[test]
    fn timers_scheduled_during_dispatch_fire_in_same_window() {
        let sched = ManualScheduler::new();
        let id = ToastId::new();
        sched.schedule(id, Timer::Countdown, ms(500));

        let mut seen = Vec::new();
        sched.advance(ms(800), |f| {
            seen.push((f.timer, sched.now()));
            if f.timer == Timer::Countdown {
                sched.schedule(id, Timer::Exit, ms(250));
            }
        });

        assert_eq!(seen, vec![(Timer::Countdown, ms(500)), (Timer::Exit, ms(750))]);
    }

    #[test]
    fn far_future_deadlines_saturate() {
        let sched = ManualScheduler::new();
        sched.advance(ms(1), |_| {});
        sched.schedule(ToastId::new(), Timer::Countdown, Duration::MAX);

        let mut count = 0;
        sched.advance(ms(1000), |_| count += 1);
        assert_eq!(count, 0);
        assert_eq!(sched.pending(), 1);

        sched.advance(Duration::MAX, |_| count += 1);
        assert_eq!(count, 1);
        assert_eq!(sched.now(), Duration::MAX);
    }
}
