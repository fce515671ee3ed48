//! # Toaster: owns the driver loop, event delivery and graceful shutdown.
//!
//! A [`Toaster`] is created by [`ToasterBuilder`](crate::ToasterBuilder). It
//! keeps two background tasks alive:
//! - the **driver**, which owns the registry and every lifecycle controller;
//! - the **listener**, which forwards bus events to the [`SubscriberSet`].
//!
//! ## Architecture
//! ```text
//! ToasterHandle ──► Driver ── publish(Event) ──► Bus ──► listener ──► SubscriberSet::emit
//!                                                                 ┌─────────┬─────────┐
//!                                                                 ▼         ▼         ▼
//!                                                          [queue S1] [queue S2] ... [queue SN]
//!
//! shutdown()
//!   ├─► Bus.publish(ShutdownRequested)
//!   ├─► runtime_token.cancel()   → driver stops, pending timers are cancelled
//!   ├─► join driver              (JoinError → RuntimeError::DriverAborted)
//!   ├─► listener_token.cancel()  → listener drains what is buffered
//!   └─► SubscriberSet::shutdown() → workers finish their queues
//! ```
//!
//! Dropping a toaster without calling [`Toaster::shutdown`] cancels both
//! tasks without waiting for subscribers.

use tokio::sync::broadcast::{self, error::RecvError, error::TryRecvError};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::core::builder::ToasterBuilder;
use crate::core::config::ToasterConfig;
use crate::core::handle::ToasterHandle;
use crate::error::RuntimeError;
use crate::events::{Bus, Event, EventKind};
use crate::subscribers::SubscriberSet;

/// Running toast runtime.
pub struct Toaster {
    cfg: ToasterConfig,
    bus: Bus,
    handle: ToasterHandle,
    runtime_token: CancellationToken,
    listener_token: CancellationToken,
    driver: Option<JoinHandle<()>>,
    listener: Option<JoinHandle<()>>,
}

impl Toaster {
    /// Starts building a toaster with the given configuration.
    pub fn builder(cfg: ToasterConfig) -> ToasterBuilder {
        ToasterBuilder::new(cfg)
    }

    pub(crate) fn new_internal(
        cfg: ToasterConfig,
        bus: Bus,
        handle: ToasterHandle,
        runtime_token: CancellationToken,
        listener_token: CancellationToken,
        driver: JoinHandle<()>,
        listener: JoinHandle<()>,
    ) -> Self {
        Self {
            cfg,
            bus,
            handle,
            runtime_token,
            listener_token,
            driver: Some(driver),
            listener: Some(listener),
        }
    }

    /// Returns a new handle to this toaster.
    pub fn handle(&self) -> ToasterHandle {
        self.handle.clone()
    }

    /// Returns the configuration the toaster was built with.
    pub fn config(&self) -> &ToasterConfig {
        &self.cfg
    }

    /// Subscribes directly to the event bus.
    pub fn events(&self) -> broadcast::Receiver<Event> {
        self.bus.subscribe()
    }

    /// Stops the driver, cancels every pending timer and flushes subscribers.
    ///
    /// Handles keep existing but every call on them returns
    /// [`ToastError::Closed`](crate::ToastError::Closed) afterwards.
    pub async fn shutdown(mut self) -> Result<(), RuntimeError> {
        self.bus.publish(Event::new(EventKind::ShutdownRequested));
        self.runtime_token.cancel();

        let driver = match self.driver.take() {
            Some(h) => h.await,
            None => Ok(()),
        };

        self.listener_token.cancel();
        if let Some(listener) = self.listener.take() {
            let _ = listener.await;
        }

        driver.map_err(|e| RuntimeError::DriverAborted {
            reason: e.to_string(),
        })
    }
}

impl Drop for Toaster {
    fn drop(&mut self) {
        self.runtime_token.cancel();
        self.listener_token.cancel();
    }
}

/// Forwards bus events to subscribers until cancelled, then drains and flushes.
pub(crate) async fn listen(
    mut rx: broadcast::Receiver<Event>,
    subs: SubscriberSet,
    token: CancellationToken,
) {
    loop {
        tokio::select! {
            biased;
            ev = rx.recv() => match ev {
                Ok(ev) => subs.emit(ev),
                Err(RecvError::Lagged(_)) => continue,
                Err(RecvError::Closed) => break,
            },
            _ = token.cancelled() => break,
        }
    }
    loop {
        match rx.try_recv() {
            Ok(ev) => subs.emit(ev),
            Err(TryRecvError::Lagged(_)) => continue,
            Err(_) => break,
        }
    }

    subs.shutdown().await;
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;
    use crate::error::ToastError;
    use crate::subscribers::Subscribe;
    use crate::toasts::{Toast, ToastSpec};

    fn config() -> ToasterConfig {
        ToasterConfig {
            default_duration: Duration::from_millis(3000),
            exit_delay: Duration::from_millis(250),
            bus_capacity: 64,
        }
    }

    async fn sleep_ms(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    async fn listed(handle: &ToasterHandle) -> Arc<[Toast]> {
        handle.snapshot().await.expect("toaster running")
    }

    fn drain(rx: &mut broadcast::Receiver<Event>) -> Vec<Event> {
        let mut out = Vec::new();
        while let Ok(ev) = rx.try_recv() {
            out.push(ev);
        }
        out
    }

    #[tokio::test(start_paused = true)]
    async fn toast_expires_after_duration_plus_exit_delay() {
        let toaster = Toaster::builder(config()).build();
        let handle = toaster.handle();

        handle.add(ToastSpec::success("Saved").with_millis(500)).unwrap();
        assert_eq!(listed(&handle).await.len(), 1);

        sleep_ms(510).await;
        assert_eq!(listed(&handle).await.len(), 1, "still exiting");

        sleep_ms(290).await;
        assert!(listed(&handle).await.is_empty());

        toaster.shutdown().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn hover_pauses_and_leave_resumes() {
        let toaster = Toaster::builder(config()).build();
        let handle = toaster.handle();

        handle.add(ToastSpec::info("Hover me").with_millis(500)).unwrap();
        let id = listed(&handle).await[0].id();

        sleep_ms(100).await;
        handle.pointer_enter(id).unwrap();
        sleep_ms(500).await;
        assert_eq!(listed(&handle).await.len(), 1, "paused toast stays");

        handle.pointer_leave(id).unwrap();
        sleep_ms(390).await;
        assert_eq!(listed(&handle).await.len(), 1);

        sleep_ms(300).await;
        assert!(listed(&handle).await.is_empty());

        toaster.shutdown().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn re_adding_restarts_the_countdown() {
        let toaster = Toaster::builder(config()).build();
        let mut events = toaster.events();
        let handle = toaster.handle();

        let spec = ToastSpec::warning("Reconnecting").with_millis(500);
        handle.add(spec.clone()).unwrap();
        let id = listed(&handle).await[0].id();

        sleep_ms(400).await;
        handle.add(spec).unwrap();

        sleep_ms(400).await;
        assert_eq!(listed(&handle).await.len(), 1, "countdown restarted at 400ms");

        sleep_ms(300).await;
        assert_eq!(listed(&handle).await.len(), 1, "exiting");

        sleep_ms(300).await;
        assert!(listed(&handle).await.is_empty());

        let removed: Vec<_> = drain(&mut events)
            .into_iter()
            .filter(|e| e.kind == EventKind::ToastRemoved)
            .collect();
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].toast, Some(id));

        toaster.shutdown().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn duplicates_collapse_and_keep_order() {
        let toaster = Toaster::builder(config()).build();
        let handle = toaster.handle();

        for _ in 0..3 {
            handle.add(ToastSpec::success("Copied")).unwrap();
        }
        let list = listed(&handle).await;
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].reset_key(), 2);

        handle.add(ToastSpec::info("A")).unwrap();
        handle.add(ToastSpec::info("B")).unwrap();
        handle.add(ToastSpec::info("A")).unwrap();
        let messages: Vec<String> = listed(&handle)
            .await
            .iter()
            .map(|t| t.message().to_string())
            .collect();
        assert_eq!(messages, vec!["Copied", "A", "B"]);

        toaster.shutdown().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn dismiss_removes_after_exit_delay() {
        let toaster = Toaster::builder(config()).build();
        let handle = toaster.handle();

        handle.add(ToastSpec::error("Failed")).unwrap();
        let id = listed(&handle).await[0].id();

        sleep_ms(100).await;
        handle.dismiss(id).unwrap();
        sleep_ms(240).await;
        assert_eq!(listed(&handle).await.len(), 1);

        sleep_ms(20).await;
        assert!(listed(&handle).await.is_empty());

        toaster.shutdown().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn remove_is_immediate_and_unknown_ids_are_ignored() {
        let toaster = Toaster::builder(config()).build();
        let handle = toaster.handle();

        handle.add(ToastSpec::info("Gone soon")).unwrap();
        let id = listed(&handle).await[0].id();

        handle.remove(id).unwrap();
        handle.remove(id).unwrap();
        handle.pointer_enter(id).unwrap();
        assert!(listed(&handle).await.is_empty());
        assert!(handle.toasts().is_empty());

        toaster.shutdown().await.unwrap();
    }

    fn kinds(events: &[Event]) -> Vec<EventKind> {
        events.iter().map(|e| e.kind).collect()
    }

    #[tokio::test(start_paused = true)]
    async fn removing_an_active_toast_cancels_its_countdown() {
        let toaster = Toaster::builder(config()).build();
        let mut events = toaster.events();
        let handle = toaster.handle();

        handle.add(ToastSpec::info("Short lived").with_millis(500)).unwrap();
        let id = listed(&handle).await[0].id();

        sleep_ms(100).await;
        handle.remove(id).unwrap();
        assert!(listed(&handle).await.is_empty());
        let before = drain(&mut events);
        assert_eq!(
            before.iter().filter(|e| e.kind == EventKind::ToastRemoved).count(),
            1
        );

        sleep_ms(1000).await;
        assert!(kinds(&drain(&mut events)).is_empty());

        toaster.shutdown().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn removing_an_exiting_toast_cancels_its_exit_timer() {
        let toaster = Toaster::builder(config()).build();
        let mut events = toaster.events();
        let handle = toaster.handle();

        handle.add(ToastSpec::error("Closing").with_millis(500)).unwrap();
        let id = listed(&handle).await[0].id();

        sleep_ms(100).await;
        handle.dismiss(id).unwrap();
        sleep_ms(100).await;
        handle.remove(id).unwrap();
        assert!(listed(&handle).await.is_empty());

        let before = kinds(&drain(&mut events));
        assert_eq!(
            before.iter().filter(|k| **k == EventKind::ToastExiting).count(),
            1
        );
        assert_eq!(
            before.iter().filter(|k| **k == EventKind::ToastRemoved).count(),
            1
        );

        sleep_ms(1000).await;
        assert!(kinds(&drain(&mut events)).is_empty());

        toaster.shutdown().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn re_adding_after_removal_starts_a_fresh_toast() {
        let toaster = Toaster::builder(config()).build();
        let mut events = toaster.events();
        let handle = toaster.handle();

        let spec = ToastSpec::success("Uploaded").with_millis(500);
        handle.add(spec.clone()).unwrap();
        let first = listed(&handle).await[0].id();

        sleep_ms(300).await;
        handle.remove(first).unwrap();
        handle.add(spec).unwrap();

        let list = listed(&handle).await;
        assert_eq!(list.len(), 1);
        assert_ne!(list[0].id(), first);
        assert_eq!(list[0].reset_key(), 0);
        let second = list[0].id();
        drain(&mut events);

        sleep_ms(490).await;
        assert_eq!(listed(&handle).await.len(), 1);
        assert!(!kinds(&drain(&mut events)).contains(&EventKind::ToastExiting));

        sleep_ms(20).await;
        let exiting: Vec<_> = drain(&mut events)
            .into_iter()
            .filter(|e| e.kind == EventKind::ToastExiting)
            .collect();
        assert_eq!(exiting.len(), 1);
        assert_eq!(exiting[0].toast, Some(second));

        sleep_ms(300).await;
        assert!(listed(&handle).await.is_empty());

        toaster.shutdown().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn re_adding_while_exiting_is_not_reported_as_refresh() {
        let toaster = Toaster::builder(config()).build();
        let mut events = toaster.events();
        let handle = toaster.handle();

        let spec = ToastSpec::warning("Offline").with_millis(500);
        handle.add(spec.clone()).unwrap();
        let id = listed(&handle).await[0].id();

        handle.dismiss(id).unwrap();
        handle.add(spec).unwrap();
        assert_eq!(listed(&handle).await.len(), 1);

        let seen = kinds(&drain(&mut events));
        assert!(!seen.contains(&EventKind::ToastRefreshed));
        assert!(!seen.contains(&EventKind::CountdownRestarted));

        sleep_ms(260).await;
        assert!(listed(&handle).await.is_empty());

        toaster.shutdown().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn handle_reports_closed_after_shutdown() {
        let toaster = Toaster::builder(config()).build();
        let handle = toaster.handle();

        toaster.shutdown().await.unwrap();

        assert!(handle.is_closed());
        assert_eq!(handle.add(ToastSpec::info("late")), Err(ToastError::Closed));
        assert_eq!(handle.snapshot().await.err(), Some(ToastError::Closed));
    }

    #[derive(Default)]
    struct Collect(Mutex<Vec<EventKind>>);

    #[async_trait]
    impl Subscribe for Collect {
        async fn on_event(&self, event: &Event) {
            self.0.lock().unwrap().push(event.kind);
        }

        fn name(&self) -> &'static str {
            "collect"
        }
    }

    #[tokio::test(start_paused = true)]
    async fn subscribers_are_flushed_on_shutdown() {
        let collect = Arc::new(Collect::default());
        let subs: Vec<Arc<dyn Subscribe>> = vec![collect.clone()];
        let toaster = Toaster::builder(config()).with_subscribers(subs).build();
        let handle = toaster.handle();

        handle.add(ToastSpec::success("Hi")).unwrap();
        listed(&handle).await;
        toaster.shutdown().await.unwrap();

        let seen = collect.0.lock().unwrap().clone();
        assert!(seen.contains(&EventKind::ToastAdded));
        assert!(seen.contains(&EventKind::ShutdownRequested));
    }
}
