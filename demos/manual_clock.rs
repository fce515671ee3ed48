//! # Example: manual_clock
//!
//! Drives a [`ToastRegistry`] and its [`ToastLifecycle`] controllers by hand
//! on a [`ManualScheduler`], without any async runtime. This is how a host
//! with its own frame loop (or a test) would embed the engine.
//!
//! ## Flow
//! ```text
//! registry.add(spec) ─► ToastLifecycle::new(toast, scheduler, on_remove)
//! scheduler.advance(dt, |fired| controller.on_timer(fired))
//!     └─► on_remove(id) ─► queued ─► registry.remove(id)
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example manual_clock
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use toastvisor::{ManualScheduler, Scheduler, ToastId, ToastLifecycle, ToastRegistry, ToastSpec};

type Removals = Arc<Mutex<Vec<ToastId>>>;

struct Host {
    registry: ToastRegistry,
    controllers: HashMap<ToastId, ToastLifecycle<ManualScheduler>>,
    scheduler: ManualScheduler,
    removals: Removals,
}

impl Host {
    fn new() -> Self {
        Self {
            registry: ToastRegistry::new(Duration::from_millis(1000)),
            controllers: HashMap::new(),
            scheduler: ManualScheduler::new(),
            removals: Arc::default(),
        }
    }

    fn add(&mut self, spec: ToastSpec) -> ToastId {
        let id = self.registry.add(spec).id();
        let Some(toast) = self.registry.get(&id) else {
            return id;
        };

        match self.controllers.get_mut(&id) {
            Some(controller) => {
                if let Some(t) = controller.sync(toast) {
                    println!("{:>6?}  {id}: {t:?}", self.scheduler.now());
                }
            }
            None => {
                let removals = Arc::clone(&self.removals);
                let controller = ToastLifecycle::new(
                    toast,
                    Duration::from_millis(250),
                    self.scheduler.clone(),
                    move |id| removals.lock().unwrap().push(id),
                );
                self.controllers.insert(id, controller);
            }
        }
        id
    }

    fn advance(&mut self, ms: u64) {
        let controllers = &mut self.controllers;
        let scheduler = &self.scheduler;
        scheduler.advance(Duration::from_millis(ms), |fired| {
            if let Some(t) = controllers
                .get_mut(&fired.toast)
                .and_then(|c| c.on_timer(fired))
            {
                println!("{:>6?}  {}: {t:?}", scheduler.now(), fired.toast);
            }
        });

        for id in self.removals.lock().unwrap().drain(..) {
            self.controllers.remove(&id);
            self.registry.remove(&id);
        }
    }

    fn show(&self) {
        let listed: Vec<&str> = self.registry.toasts().iter().map(|t| t.message()).collect();
        println!("{:>6?}  listed: {listed:?}", self.scheduler.now());
    }
}

fn main() {
    let mut host = Host::new();

    let saved = host.add(ToastSpec::success("Saved").with_millis(500));
    host.add(ToastSpec::info("Sync finished"));
    host.show();

    host.advance(100);
    if let Some(c) = host.controllers.get_mut(&saved) {
        println!("{:>6?}  {saved}: {:?}", host.scheduler.now(), c.pointer_enter());
    }

    host.advance(600);
    host.show();

    if let Some(c) = host.controllers.get_mut(&saved) {
        println!("{:>6?}  {saved}: {:?}", host.scheduler.now(), c.pointer_leave());
    }
    host.add(ToastSpec::success("Saved").with_millis(500));

    host.advance(2000);
    host.show();
}
