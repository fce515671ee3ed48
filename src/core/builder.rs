use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio_util::sync::CancellationToken;

use crate::{
    core::ToasterConfig,
    events::Bus,
    scheduler::TokioScheduler,
    subscribers::{Subscribe, SubscriberSet},
    toasts::Toast,
};
use super::{
    driver::Driver,
    handle::ToasterHandle,
    toaster::{self, Toaster},
};

/// Builder for constructing a [`Toaster`].
pub struct ToasterBuilder {
    cfg: ToasterConfig,
    subscribers: Vec<Arc<dyn Subscribe>>,
}

impl ToasterBuilder {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: ToasterConfig) -> Self {
        Self {
            cfg,
            subscribers: Vec::new(),
        }
    }

    /// Sets event subscribers for observability.
    ///
    /// Subscribers receive toast events (added, paused, exiting, removed, ...)
    /// through dedicated workers with bounded queues.
    pub fn with_subscribers(mut self, subscribers: Vec<Arc<dyn Subscribe>>) -> Self {
        self.subscribers = subscribers;
        self
    }

    /// Builds the toaster and spawns its driver and listener tasks.
    ///
    /// Must be called from within a tokio runtime.
    pub fn build(self) -> Toaster {
        let bus = Bus::new(self.cfg.bus_capacity_clamped());
        let subs = SubscriberSet::new(self.subscribers, bus.clone());
        let runtime_token = CancellationToken::new();
        let listener_token = CancellationToken::new();

        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (fired_tx, fired_rx) = mpsc::unbounded_channel();
        let empty: Arc<[Toast]> = Arc::from(Vec::new());
        let (list_tx, list_rx) = watch::channel(empty);

        let scheduler = TokioScheduler::new(fired_tx, runtime_token.child_token());
        let driver = Driver::new(&self.cfg, bus.clone(), scheduler, list_tx, cmd_tx.clone());

        let listener = tokio::spawn(toaster::listen(
            bus.subscribe(),
            subs,
            listener_token.clone(),
        ));
        let driver = tokio::spawn(driver.run(cmd_rx, fired_rx, runtime_token.clone()));

        Toaster::new_internal(
            self.cfg,
            bus,
            ToasterHandle::new(cmd_tx, list_rx),
            runtime_token,
            listener_token,
            driver,
            listener,
        )
    }
}
