use std::fmt;

use uuid::Uuid;

/// Identity of a toast in the registry.
///
/// Assigned once on insertion and stable for the toast's lifetime.
/// Backed by a random (v4) UUID, so ids are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(Uuid);

impl ToastId {
    /// Generates a fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for ToastId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
