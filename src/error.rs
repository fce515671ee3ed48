//! Error types used by the toast runtime.
//!
//! This module defines two error enums:
//!
//! - [`ToastError`] - misuse of a [`ToasterHandle`](crate::ToasterHandle).
//! - [`RuntimeError`] - failures of the runtime itself, reported on shutdown.
//!
//! Everything else in the crate is total: malformed durations fall back to
//! the default, unknown ids and double removals are no-ops.

use thiserror::Error;

/// # Errors produced by handle operations.
///
/// Raised synchronously when a handle is used after its toaster stopped
/// (or before one was ever running). This signals a wiring mistake in the
/// host, not a condition worth retrying.
#[non_exhaustive]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastError {
    /// The toaster behind this handle is not running.
    #[error("toaster is not running; handle used outside an active toaster")]
    Closed,
}

impl ToastError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use toastvisor::ToastError;
    ///
    /// assert_eq!(ToastError::Closed.as_label(), "toaster_closed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            ToastError::Closed => "toaster_closed",
        }
    }

    /// Returns a human-readable message.
    pub fn as_message(&self) -> String {
        match self {
            ToastError::Closed => "toaster closed".to_string(),
        }
    }
}

/// # Errors produced by the toast runtime.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// The driver task ended abnormally (panic or abort).
    #[error("toast driver aborted: {reason}")]
    DriverAborted {
        /// Panic message or abort cause.
        reason: String,
    },
}

impl RuntimeError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use toastvisor::RuntimeError;
    ///
    /// let err = RuntimeError::DriverAborted { reason: "boom".into() };
    /// assert_eq!(err.as_label(), "runtime_driver_aborted");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            RuntimeError::DriverAborted { .. } => "runtime_driver_aborted",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            RuntimeError::DriverAborted { reason } => format!("driver aborted: {reason}"),
        }
    }
}
