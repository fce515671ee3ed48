//! # Toast registry - ordered, deduplicating collection of visible toasts.
//!
//! The registry is the single source of truth for what is on screen:
//! - `add(spec)` → insert a new toast **or** refresh the matching one
//! - `remove(id)` → drop the toast (no-op when already gone)
//!
//! ## Architecture
//! ```text
//! add(spec)
//!   ├─► duration = spec.duration or default (absent/zero)
//!   ├─► match (message, kind)?
//!   │     ├─ yes ─► duration = resolved, reset_key += 1 (position kept) ─► Refreshed
//!   │     └─ no  ─► id = fresh, reset_key = 0, push back              ─► Inserted
//! remove(id)
//!   └─► retain everything else (absent id is fine)
//! ```
//!
//! ## Rules
//! - At most one toast per `(message, kind)` and per `id`
//! - List order is insertion order; deduplication never moves an entry
//! - Removal is only requested by lifecycle controllers, never by `add`
//! - Both operations are idempotent-safe under racing timers

use std::time::Duration;

use crate::toasts::{Toast, ToastId, ToastSpec};

/// Outcome of [`ToastRegistry::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Added {
    /// A new toast was appended.
    Inserted(ToastId),
    /// An equivalent toast already existed and its `reset_key` was bumped.
    ///
    /// Its controller restarts the countdown unless the exit already began.
    Refreshed {
        /// Id of the existing toast.
        id: ToastId,
        /// Its new reset key.
        reset_key: u64,
    },
}

impl Added {
    /// Returns the id of the inserted or refreshed toast.
    pub fn id(&self) -> ToastId {
        match self {
            Added::Inserted(id) | Added::Refreshed { id, .. } => *id,
        }
    }
}

/// Ordered list of active toasts with `(message, kind)` deduplication.
#[derive(Debug, Clone)]
pub struct ToastRegistry {
    toasts: Vec<Toast>,
    default_duration: Duration,
}

impl ToastRegistry {
    /// Creates an empty registry.
    ///
    /// `default_duration` applies to specs without a (positive) duration.
    pub fn new(default_duration: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            default_duration,
        }
    }

    /// Adds a toast or refreshes the equivalent one already listed.
    pub fn add(&mut self, spec: ToastSpec) -> Added {
        let duration = spec.resolve_duration(self.default_duration);

        if let Some(existing) = self
            .toasts
            .iter_mut()
            .find(|t| t.matches(spec.message(), spec.kind()))
        {
            let reset_key = existing.refresh(duration);
            return Added::Refreshed {
                id: existing.id(),
                reset_key,
            };
        }

        let id = ToastId::new();
        let (message, kind) = spec.into_parts();
        self.toasts.push(Toast::new(id, message, kind, duration));
        Added::Inserted(id)
    }

    /// Removes the toast with `id`, returning it if it was listed.
    pub fn remove(&mut self, id: &ToastId) -> Option<Toast> {
        let pos = self.toasts.iter().position(|t| &t.id() == id)?;
        Some(self.toasts.remove(pos))
    }

    /// Returns the current list in display order.
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Returns the toast with `id`, if listed.
    pub fn get(&self, id: &ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|t| &t.id() == id)
    }

    /// Returns true if a toast with `id` is listed.
    pub fn contains(&self, id: &ToastId) -> bool {
        self.get(id).is_some()
    }

    /// Returns the number of listed toasts.
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Returns true if nothing is listed.
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Returns the duration used when a spec carries none.
    pub fn default_duration(&self) -> Duration {
        self.default_duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toasts::ToastKind;

    const DEFAULT: Duration = Duration::from_millis(3000);

    fn registry() -> ToastRegistry {
        ToastRegistry::new(DEFAULT)
    }

    fn messages(reg: &ToastRegistry) -> Vec<&str> {
        reg.toasts().iter().map(Toast::message).collect()
    }

    #[test]
    fn add_inserts_with_defaults() {
        let mut reg = registry();
        let added = reg.add(ToastSpec::success("Saved"));

        let Added::Inserted(id) = added else {
            panic!("expected insertion, got {added:?}");
        };
        let toast = reg.get(&id).expect("toast listed");
        assert_eq!(toast.message(), "Saved");
        assert_eq!(toast.kind(), &ToastKind::Success);
        assert_eq!(toast.duration(), DEFAULT);
        assert_eq!(toast.reset_key(), 0);
    }

    #[test]
    fn repeated_adds_collapse_into_one_toast() {
        let mut reg = registry();
        let spec = ToastSpec::new("Duplicate", ToastKind::Success).with_millis(2000);

        let first = reg.add(spec.clone());
        let second = reg.add(spec.clone());
        let third = reg.add(spec);

        assert_eq!(reg.len(), 1);
        assert_eq!(
            second,
            Added::Refreshed {
                id: first.id(),
                reset_key: 1
            }
        );
        assert_eq!(
            third,
            Added::Refreshed {
                id: first.id(),
                reset_key: 2
            }
        );
        assert_eq!(reg.toasts()[0].reset_key(), 2);
    }

    #[test]
    fn same_message_different_kind_is_distinct() {
        let mut reg = registry();
        reg.add(ToastSpec::success("Done"));
        reg.add(ToastSpec::error("Done"));
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn refresh_replaces_duration() {
        let mut reg = registry();
        let id = reg.add(ToastSpec::info("Syncing").with_millis(500)).id();

        reg.add(ToastSpec::info("Syncing").with_millis(1200));
        assert_eq!(reg.get(&id).map(Toast::duration), Some(Duration::from_millis(1200)));

        reg.add(ToastSpec::info("Syncing"));
        assert_eq!(reg.get(&id).map(Toast::duration), Some(DEFAULT));
    }

    #[test]
    fn dedup_keeps_list_order() {
        let mut reg = registry();
        reg.add(ToastSpec::info("A"));
        reg.add(ToastSpec::info("B"));
        reg.add(ToastSpec::info("A"));

        assert_eq!(messages(&reg), vec!["A", "B"]);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut reg = registry();
        let id = reg.add(ToastSpec::warning("Low disk")).id();

        assert!(reg.remove(&id).is_some());
        assert!(reg.remove(&id).is_none());
        assert!(reg.remove(&ToastId::new()).is_none());
        assert!(reg.is_empty());
    }

    #[test]
    fn re_adding_after_removal_creates_new_identity() {
        let mut reg = registry();
        let first = reg.add(ToastSpec::info("Hello")).id();
        reg.remove(&first);

        let added = reg.add(ToastSpec::info("Hello"));
        assert!(matches!(added, Added::Inserted(id) if id != first));
        assert_eq!(reg.toasts()[0].reset_key(), 0);
    }

    #[test]
    fn remove_keeps_remaining_order() {
        let mut reg = registry();
        reg.add(ToastSpec::info("A"));
        let b = reg.add(ToastSpec::info("B")).id();
        reg.add(ToastSpec::info("C"));

        reg.remove(&b);
        assert_eq!(messages(&reg), vec!["A", "C"]);
    }
}
