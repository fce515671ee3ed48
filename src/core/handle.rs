//! # Cloneable front door to a running [`Toaster`](crate::Toaster).
//!
//! Every mutating call enqueues a command for the driver loop and returns
//! immediately; effects become visible in [`ToasterHandle::toasts`] once the
//! driver has processed them. Calls after shutdown fail with
//! [`ToastError::Closed`].

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot, watch};

use crate::core::driver::Command;
use crate::error::ToastError;
use crate::toasts::{Toast, ToastId, ToastSpec};

/// Handle for adding toasts and forwarding pointer/dismiss interactions.
#[derive(Clone)]
pub struct ToasterHandle {
    tx: mpsc::UnboundedSender<Command>,
    list: watch::Receiver<Arc<[Toast]>>,
}

impl ToasterHandle {
    pub(crate) fn new(
        tx: mpsc::UnboundedSender<Command>,
        list: watch::Receiver<Arc<[Toast]>>,
    ) -> Self {
        Self { tx, list }
    }

    /// Shows a toast, or restarts the countdown of the equivalent one.
    pub fn add(&self, spec: ToastSpec) -> Result<(), ToastError> {
        self.send(Command::Add(spec))
    }

    /// Removes a toast immediately, skipping the exit phase.
    pub fn remove(&self, id: ToastId) -> Result<(), ToastError> {
        self.send(Command::Remove(id))
    }

    /// Pauses the toast's countdown.
    pub fn pointer_enter(&self, id: ToastId) -> Result<(), ToastError> {
        self.send(Command::PointerEnter(id))
    }

    /// Resumes the toast's countdown with whatever time was left.
    pub fn pointer_leave(&self, id: ToastId) -> Result<(), ToastError> {
        self.send(Command::PointerLeave(id))
    }

    /// Starts the exit phase; the toast is removed after the exit delay.
    pub fn dismiss(&self, id: ToastId) -> Result<(), ToastError> {
        self.send(Command::Dismiss(id))
    }

    /// Returns the most recently published list, in display order.
    pub fn toasts(&self) -> Arc<[Toast]> {
        Arc::clone(&self.list.borrow())
    }

    /// Returns a receiver notified on every list change.
    pub fn subscribe(&self) -> watch::Receiver<Arc<[Toast]>> {
        self.list.clone()
    }

    /// Returns the list after every previously sent command was applied.
    pub async fn snapshot(&self) -> Result<Arc<[Toast]>, ToastError> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::Snapshot(reply))?;
        rx.await.map_err(|_| ToastError::Closed)
    }

    /// Returns true once the driver loop has stopped.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }

    fn send(&self, cmd: Command) -> Result<(), ToastError> {
        self.tx.send(cmd).map_err(|_| ToastError::Closed)
    }
}
