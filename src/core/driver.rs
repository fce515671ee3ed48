//! # Driver: the toaster's single event loop.
//!
//! The driver owns the [`ToastRegistry`] and one [`ToastLifecycle`] per listed
//! toast. Handle commands and fired timers are processed strictly one at a
//! time, so no two transitions of a toast ever overlap.
//!
//! ## Architecture
//! ```text
//! ToasterHandle ── Command ──┐
//!                            ├──► Driver::run() ──► ToastRegistry (add/remove)
//! TokioScheduler ── Fired ───┘          │
//!                                       ├──► ToastLifecycle per id (pointer, dismiss, timers)
//!                                       ├──► Bus.publish(Event)
//!                                       └──► watch::Sender<Arc<[Toast]>> (list snapshot)
//!
//! ToastLifecycle ── on_remove(id) ──► Command::Remove(id) ──► (next iteration)
//! ```
//!
//! ## Rules
//! - After every list change controllers are reconciled against the list:
//!   new ids get a controller, listed ids are synced (reset signal),
//!   vanished ids are dropped (which cancels their timers)
//! - Commands for ids that are not listed are no-ops
//! - Re-adding a toast that is already exiting publishes no `ToastRefreshed`
//! - On cancellation every controller is dropped before the loop returns

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot, watch};
use tokio_util::sync::CancellationToken;

use crate::core::config::ToasterConfig;
use crate::core::lifecycle::{Phase, ToastLifecycle, Transition};
use crate::core::registry::{Added, ToastRegistry};
use crate::events::{Bus, Event, EventKind};
use crate::scheduler::{Fired, TokioScheduler};
use crate::toasts::{Toast, ToastId, ToastSpec};

/// Requests accepted by the driver loop.
pub(crate) enum Command {
    Add(ToastSpec),
    Remove(ToastId),
    PointerEnter(ToastId),
    PointerLeave(ToastId),
    Dismiss(ToastId),
    Snapshot(oneshot::Sender<Arc<[Toast]>>),
}

type Lifecycle = ToastLifecycle<TokioScheduler>;

pub(crate) struct Driver {
    registry: ToastRegistry,
    controllers: HashMap<ToastId, Lifecycle>,
    scheduler: TokioScheduler,
    exit_delay: Duration,
    bus: Bus,
    list: watch::Sender<Arc<[Toast]>>,
    /// Loop-back sender handed to removal callbacks.
    commands: mpsc::UnboundedSender<Command>,
}

impl Driver {
    pub(crate) fn new(
        cfg: &ToasterConfig,
        bus: Bus,
        scheduler: TokioScheduler,
        list: watch::Sender<Arc<[Toast]>>,
        commands: mpsc::UnboundedSender<Command>,
    ) -> Self {
        Self {
            registry: ToastRegistry::new(cfg.default_duration),
            controllers: HashMap::new(),
            scheduler,
            exit_delay: cfg.exit_delay,
            bus,
            list,
            commands,
        }
    }

    /// Processes commands and fired timers until `token` is cancelled.
    pub(crate) async fn run(
        mut self,
        mut commands: mpsc::UnboundedReceiver<Command>,
        mut fired: mpsc::UnboundedReceiver<Fired>,
        token: CancellationToken,
    ) {
        loop {
            tokio::select! {
                _ = token.cancelled() => break,
                Some(cmd) = commands.recv() => self.handle_command(cmd),
                Some(f) = fired.recv() => self.handle_fired(f),
                else => break,
            }
        }
        self.controllers.clear();
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Add(spec) => self.add(spec),
            Command::Remove(id) => self.remove(&id),
            Command::PointerEnter(id) => self.forward(id, Lifecycle::pointer_enter),
            Command::PointerLeave(id) => self.forward(id, Lifecycle::pointer_leave),
            Command::Dismiss(id) => self.forward(id, Lifecycle::dismiss),
            Command::Snapshot(reply) => {
                let _ = reply.send(self.registry.toasts().into());
            }
        }
    }

    fn handle_fired(&mut self, fired: Fired) {
        self.forward(fired.toast, |c| c.on_timer(fired));
    }

    fn add(&mut self, spec: ToastSpec) {
        let added = self.registry.add(spec);
        // A toast already on its way out is not revived.
        let leaving = self.is_leaving(&added.id());

        if let Some(toast) = self.registry.get(&added.id()) {
            let ev = match added {
                Added::Inserted(_) => {
                    Some(Event::new(EventKind::ToastAdded).with_reason(toast.message()))
                }
                Added::Refreshed { .. } if leaving => None,
                Added::Refreshed { reset_key, .. } => {
                    Some(Event::new(EventKind::ToastRefreshed).with_reset_key(reset_key))
                }
            };
            if let Some(ev) = ev {
                self.bus.publish(
                    ev.with_toast(toast.id())
                        .with_toast_kind(toast.kind().clone())
                        .with_duration(toast.duration()),
                );
            }
        }
        self.reconcile();
    }

    fn remove(&mut self, id: &ToastId) {
        if self.registry.remove(id).is_some() {
            self.bus.publish(Event::new(EventKind::ToastRemoved).with_toast(*id));
            self.reconcile();
        }
    }

    fn is_leaving(&self, id: &ToastId) -> bool {
        self.controllers
            .get(id)
            .is_some_and(|c| matches!(c.phase(), Phase::Exiting | Phase::Removed))
    }

    fn forward(&mut self, id: ToastId, op: impl FnOnce(&mut Lifecycle) -> Option<Transition>) {
        if let Some(transition) = self.controllers.get_mut(&id).and_then(op) {
            publish_transition(&self.bus, id, transition);
        }
    }

    /// Brings controllers in line with the list and publishes the snapshot.
    fn reconcile(&mut self) {
        let registry = &self.registry;
        self.controllers.retain(|id, _| registry.contains(id));

        for toast in self.registry.toasts() {
            match self.controllers.entry(toast.id()) {
                Entry::Occupied(mut entry) => {
                    if let Some(transition) = entry.get_mut().sync(toast) {
                        publish_transition(&self.bus, toast.id(), transition);
                    }
                }
                Entry::Vacant(entry) => {
                    let commands = self.commands.clone();
                    entry.insert(ToastLifecycle::new(
                        toast,
                        self.exit_delay,
                        self.scheduler.clone(),
                        move |id| {
                            let _ = commands.send(Command::Remove(id));
                        },
                    ));
                }
            }
        }

        self.list.send_replace(self.registry.toasts().into());
    }
}

fn publish_transition(bus: &Bus, id: ToastId, transition: Transition) {
    let ev = match transition {
        Transition::Paused { remaining } => {
            Event::new(EventKind::CountdownPaused).with_remaining(remaining)
        }
        Transition::Resumed { remaining } => {
            Event::new(EventKind::CountdownResumed).with_remaining(remaining)
        }
        Transition::Restarted {
            duration,
            reset_key,
        } => Event::new(EventKind::CountdownRestarted)
            .with_duration(duration)
            .with_reset_key(reset_key),
        Transition::Exiting => Event::new(EventKind::ToastExiting),
        // Reported as ToastRemoved once the registry drops the record.
        Transition::Removed => return,
    };
    bus.publish(ev.with_toast(id));
}
