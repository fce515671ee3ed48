//! # Toast request.
//!
//! Defines [`ToastSpec`] the input of `add`: what to show and, optionally,
//! for how long.
//!
//! A spec can be created:
//! - **Explicitly** with [`ToastSpec::new`]
//! - **Per kind** with [`ToastSpec::success`], [`ToastSpec::error`], ...
//!
//! ## Rules
//! - A missing or zero duration means "use the configured default".
//! - `(message, kind)` is the deduplication key; the duration is not part of it.

use std::time::Duration;

use crate::toasts::ToastKind;

/// Request to show a toast.
///
/// ## Example
/// ```rust
/// use std::time::Duration;
/// use toastvisor::{ToastKind, ToastSpec};
///
/// let spec = ToastSpec::new("Saved", ToastKind::Success)
///     .with_duration(Duration::from_millis(1500));
/// assert_eq!(spec.duration(), Some(Duration::from_millis(1500)));
///
/// // Non-positive millisecond values fall back to the default.
/// let spec = ToastSpec::error("Upload failed").with_millis(-5);
/// assert!(spec.duration().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastSpec {
    message: String,
    kind: ToastKind,
    duration: Option<Duration>,
}

impl ToastSpec {
    /// Creates a spec with the default duration.
    pub fn new(message: impl Into<String>, kind: impl Into<ToastKind>) -> Self {
        Self {
            message: message.into(),
            kind: kind.into(),
            duration: None,
        }
    }

    /// Creates a success toast.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Success)
    }

    /// Creates an error toast.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Error)
    }

    /// Creates an info toast.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Info)
    }

    /// Creates a warning toast.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Warning)
    }

    /// Returns a new spec with an explicit display duration.
    ///
    /// `Duration::ZERO` is accepted and treated as "default" on resolution.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Returns a new spec with a duration in milliseconds.
    ///
    /// Non-positive values clear the duration so the default applies.
    pub fn with_millis(mut self, millis: i64) -> Self {
        self.duration = u64::try_from(millis)
            .ok()
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis);
        self
    }

    /// Returns the message text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the kind.
    pub fn kind(&self) -> &ToastKind {
        &self.kind
    }

    /// Returns the requested duration, if any.
    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    /// Resolves the requested duration against `default`.
    ///
    /// `None` and `Duration::ZERO` both resolve to `default`.
    pub fn resolve_duration(&self, default: Duration) -> Duration {
        self.duration.filter(|d| !d.is_zero()).unwrap_or(default)
    }

    pub(crate) fn into_parts(self) -> (String, ToastKind) {
        (self.message, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT: Duration = Duration::from_millis(3000);

    #[test]
    fn missing_duration_resolves_to_default() {
        assert_eq!(ToastSpec::info("hi").resolve_duration(DEFAULT), DEFAULT);
    }

    #[test]
    fn zero_duration_resolves_to_default() {
        let spec = ToastSpec::info("hi").with_duration(Duration::ZERO);
        assert_eq!(spec.resolve_duration(DEFAULT), DEFAULT);
    }

    #[test]
    fn explicit_duration_is_kept() {
        let spec = ToastSpec::info("hi").with_millis(500);
        assert_eq!(spec.resolve_duration(DEFAULT), Duration::from_millis(500));
    }

    #[test]
    fn non_positive_millis_clear_the_duration() {
        assert!(ToastSpec::info("hi").with_millis(0).duration().is_none());
        assert!(ToastSpec::info("hi").with_millis(-1).duration().is_none());
        assert!(
            ToastSpec::info("hi")
                .with_millis(200)
                .with_millis(-1)
                .duration()
                .is_none()
        );
    }

    #[test]
    fn kind_accepts_strings() {
        assert_eq!(ToastSpec::new("x", "warning").kind(), &ToastKind::Warning);
    }
}
