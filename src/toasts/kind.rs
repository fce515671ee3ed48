//! # Toast kinds.
//!
//! [`ToastKind`] classifies a toast for styling and, together with the
//! message text, forms the deduplication key used by the registry.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Category of a toast.
///
/// The four well-known kinds cover the usual feedback cases. Hosts with
/// their own categories use [`ToastKind::Custom`]; two custom kinds are the
/// same kind when their names are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ToastKind {
    /// Operation completed successfully.
    #[default]
    Success,
    /// Operation failed.
    Error,
    /// Neutral information.
    Info,
    /// Something needs attention but nothing failed.
    Warning,
    /// Host-defined category.
    Custom(Arc<str>),
}

impl ToastKind {
    /// Returns the lowercase name used in markup and logs.
    pub fn as_str(&self) -> &str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Info => "info",
            ToastKind::Warning => "warning",
            ToastKind::Custom(name) => name,
        }
    }

    /// Returns the accessibility role a renderer should expose.
    ///
    /// Errors and warnings interrupt (`alert`); everything else is polite
    /// (`status`).
    pub fn aria_role(&self) -> &'static str {
        match self {
            ToastKind::Error | ToastKind::Warning => "alert",
            _ => "status",
        }
    }
}

impl FromStr for ToastKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "success" => ToastKind::Success,
            "error" => ToastKind::Error,
            "info" => ToastKind::Info,
            "warning" => ToastKind::Warning,
            other => ToastKind::Custom(other.into()),
        })
    }
}

impl From<&str> for ToastKind {
    fn from(value: &str) -> Self {
        match value.parse() {
            Ok(kind) => kind,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
