//! # Toaster configuration.
//!
//! Provides [`ToasterConfig`] the settings shared by the registry, every
//! lifecycle controller and the event bus.
//!
//! ## Sentinel values
//! - `bus_capacity = 0` → clamped to 1 by the bus

use std::time::Duration;

/// Global configuration for a [`Toaster`](crate::Toaster).
///
/// ## Field semantics
/// - `default_duration`: display time for specs without a positive duration
/// - `exit_delay`: time between starting the exit animation and removal
/// - `bus_capacity`: event bus ring buffer size (min 1)
#[derive(Clone, Debug)]
pub struct ToasterConfig {
    /// Display time used when a spec carries no (or a zero) duration.
    pub default_duration: Duration,

    /// Length of the exit animation.
    ///
    /// Renderers should play their exit transition for this long; the toast
    /// stays listed (in `Exiting`) until it elapses.
    pub exit_delay: Duration,

    /// Capacity of the event bus broadcast channel.
    ///
    /// Receivers lagging more than this many events observe `Lagged`.
    pub bus_capacity: usize,
}

impl ToasterConfig {
    /// Returns a bus capacity clamped to a minimum of 1.
    #[inline]
    pub fn bus_capacity_clamped(&self) -> usize {
        self.bus_capacity.max(1)
    }
}

impl Default for ToasterConfig {
    /// Default configuration:
    ///
    /// - `default_duration = 3000ms`
    /// - `exit_delay = 250ms`
    /// - `bus_capacity = 1024`
    fn default() -> Self {
        Self {
            default_duration: Duration::from_millis(3000),
            exit_delay: Duration::from_millis(250),
            bus_capacity: 1024,
        }
    }
}
