//! # LogWriter - `tracing` renderer for toast events
//!
//! Emits one `tracing` event per toast event under the `toastvisor` target.
//! Lifecycle noise (pause/resume) goes to `debug`, list changes to `info`,
//! subscriber trouble to `warn`.
//!
//! ## Example output (fmt subscriber)
//! ```text
//! INFO toastvisor: toast added toast=3f2c… kind="success" duration_ms=3000 text="Saved"
//! DEBUG toastvisor: countdown paused toast=3f2c… remaining_ms=2100
//! INFO toastvisor: toast refreshed toast=3f2c… reset_key=1 duration_ms=3000
//! INFO toastvisor: toast removed toast=3f2c…
//! ```

use async_trait::async_trait;

use crate::events::{Event, EventKind};
use crate::subscribers::Subscribe;

/// Subscriber that forwards events to `tracing`.
#[derive(Default)]
pub struct LogWriter;

impl LogWriter {
    /// Construct a new [`LogWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Subscribe for LogWriter {
    async fn on_event(&self, e: &Event) {
        let toast = e.toast.map(|id| id.to_string()).unwrap_or_default();
        let toast = toast.as_str();
        let kind = e.toast_kind.as_ref().map(|k| k.as_str()).unwrap_or("");
        let reason = e.reason.as_deref().unwrap_or("");

        match e.kind {
            EventKind::ToastAdded => tracing::info!(
                target: "toastvisor",
                toast, kind, duration_ms = e.duration_ms, text = reason,
                "toast added"
            ),
            EventKind::ToastRefreshed => tracing::info!(
                target: "toastvisor",
                toast, kind, reset_key = e.reset_key, duration_ms = e.duration_ms,
                "toast refreshed"
            ),
            EventKind::ToastRemoved => {
                tracing::info!(target: "toastvisor", toast, "toast removed")
            }
            EventKind::CountdownPaused => tracing::debug!(
                target: "toastvisor",
                toast, remaining_ms = e.remaining_ms,
                "countdown paused"
            ),
            EventKind::CountdownResumed => tracing::debug!(
                target: "toastvisor",
                toast, remaining_ms = e.remaining_ms,
                "countdown resumed"
            ),
            EventKind::CountdownRestarted => tracing::debug!(
                target: "toastvisor",
                toast, reset_key = e.reset_key, duration_ms = e.duration_ms,
                "countdown restarted"
            ),
            EventKind::ToastExiting => {
                tracing::debug!(target: "toastvisor", toast, "toast exiting")
            }
            EventKind::ShutdownRequested => {
                tracing::info!(target: "toastvisor", "shutdown requested")
            }
            EventKind::SubscriberOverflow => {
                tracing::warn!(target: "toastvisor", reason, "subscriber overflow")
            }
            EventKind::SubscriberPanicked => {
                tracing::warn!(target: "toastvisor", reason, "subscriber panicked")
            }
        }
    }

    fn name(&self) -> &'static str {
        "log-writer"
    }
}
