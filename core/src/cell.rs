//! Type-erased backing storage.
//!
//! A [`BackingCell`] owns exactly one value and is never mutated after it is
//! built. It is shared between `Variant`s as `Arc<dyn ErasedValue>`; the
//! trait object exposes nothing but type identity, checked access through
//! `&dyn Any`, erased equality and `Debug` formatting.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use sharedvar_common::TypeInfo;
use tracing::trace;

use crate::traits::Holdable;

/// Uniform interface over a backing cell of unknown concrete type.
pub(crate) trait ErasedValue: Send + Sync {
    /// The concrete type of the stored value.
    fn type_info(&self) -> TypeInfo;

    /// The stored value, for checked downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Equality against another cell. False whenever the concrete types
    /// differ; no conversion is attempted.
    fn eq_erased(&self, other: &dyn ErasedValue) -> bool;

    /// Format the stored value with its `Debug` impl.
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Immutable owner of a single `T`.
pub(crate) struct BackingCell<T: Holdable> {
    value: T,
}

impl<T: Holdable> BackingCell<T> {
    /// Move `value` into a fresh shared cell.
    pub(crate) fn share(value: T) -> Arc<dyn ErasedValue> {
        trace!("Allocating backing cell for {}", std::any::type_name::<T>());
        Arc::new(Self { value })
    }
}

impl<T: Holdable> ErasedValue for BackingCell<T> {
    fn type_info(&self) -> TypeInfo {
        TypeInfo::of::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        &self.value
    }

    fn eq_erased(&self, other: &dyn ErasedValue) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self.value == *other)
    }

    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.value, f)
    }
}
