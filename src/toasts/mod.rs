//! # Toast data model.
//!
//! This module provides the plain records exchanged between the registry,
//! the lifecycle controllers and the host UI:
//! - [`ToastId`] - unique, never reused identity of a listed toast
//! - [`ToastKind`] - severity/category, half of the deduplication key
//! - [`ToastSpec`] - request passed to `add`
//! - [`Toast`] - record held by the registry and rendered by the host

mod id;
mod kind;
mod spec;
mod toast;

pub use id::ToastId;
pub use kind::ToastKind;
pub use spec::ToastSpec;
pub use toast::Toast;
