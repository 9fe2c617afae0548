//! The type-erased, shared, immutable value container.
//!
//! A [`Variant`] is either empty or points at a backing cell holding one value
//! of some [`Holdable`] type. Cloning shares the cell; assigning a new value
//! allocates a new cell and leaves every other clone untouched.
//!
//! # Soft extraction
//!
//! [`Variant::cast`], [`Variant::cast_or`] and [`Variant::cast_or_else`] are
//! total: when the variant is empty or holds another type they return a
//! default instead of failing. A default is indistinguishable from a stored
//! value that happens to equal it, so check [`Variant::is`] first, or use
//! [`Variant::try_cast`] / [`Variant::try_downcast_ref`], when the difference
//! matters.

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

use sharedvar_common::{Result, TypeInfo, VariantError};
use tracing::debug;

use crate::cell::{BackingCell, ErasedValue};
use crate::null::Null;
use crate::traits::Holdable;
use crate::wide::WideString;

/// Type-erased value with shared, immutable backing storage.
///
/// ```
/// use sharedvar_core::{Null, Variant};
///
/// let v = Variant::from(42);
/// assert!(v.is::<i32>());
/// assert_eq!(v.cast::<i32>(), 42);
/// assert_eq!(v.cast_or(0.5f64), 0.5);
///
/// let copy = v.clone();
/// assert!(copy.ptr_eq(&v));
///
/// let empty = Variant::from(Null);
/// assert_eq!(empty, Null);
/// assert_eq!(empty, Variant::new());
/// ```
#[derive(Clone, Default)]
pub struct Variant {
    cell: Option<Arc<dyn ErasedValue>>,
}

impl Variant {
    /// Create an empty variant.
    pub const fn new() -> Self {
        Self { cell: None }
    }

    /// Create an empty variant. Same as [`Variant::new`].
    pub const fn null() -> Self {
        Self::new()
    }

    /// Replace the held value with `value` in a freshly allocated cell.
    ///
    /// Other variants sharing the previous cell keep seeing the old value.
    pub fn set<T: Holdable>(&mut self, value: T) {
        self.cell = Some(BackingCell::share(value));
    }

    /// Replace the held value with an owned copy of `s`.
    pub fn set_str(&mut self, s: &str) {
        self.set(s.to_owned());
    }

    /// Replace the held value with an owned wide string copied from `units`.
    pub fn set_wide(&mut self, units: &[u16]) {
        self.set(WideString::from(units));
    }

    /// Drop the held cell reference, leaving the variant empty.
    pub fn clear(&mut self) {
        self.cell = None;
    }

    /// Move the held cell out, leaving this variant empty.
    pub fn take(&mut self) -> Variant {
        std::mem::take(self)
    }

    /// Check whether no value is held.
    pub fn is_empty(&self) -> bool {
        self.cell.is_none()
    }

    /// Check whether the held value is exactly of type `T`.
    ///
    /// `is::<Null>()` is true iff the variant is empty. References are
    /// distinct types here, so `is::<&i32>()` is false for a held `i32`; ask
    /// for the owned type instead.
    pub fn is<T: Any>(&self) -> bool {
        if TypeId::of::<T>() == TypeId::of::<Null>() {
            return self.is_empty();
        }
        self.type_info().is_some_and(|info| info.is::<T>())
    }

    /// Get the type of the held value, if any.
    pub fn type_info(&self) -> Option<TypeInfo> {
        self.cell.as_ref().map(|cell| cell.type_info())
    }

    /// Get the diagnostic name of the held value's type, if any.
    pub fn type_name(&self) -> Option<&'static str> {
        self.type_info().map(|info| info.name())
    }

    /// Check whether both variants share the same backing cell. Two empty
    /// variants are considered to share.
    pub fn ptr_eq(&self, other: &Variant) -> bool {
        match (&self.cell, &other.cell) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Number of variants sharing the backing cell, or 0 when empty.
    pub fn ref_count(&self) -> usize {
        self.cell.as_ref().map_or(0, Arc::strong_count)
    }

    /// Borrow the held value if it is exactly of type `T`.
    pub fn downcast_ref<T: Holdable>(&self) -> Option<&T> {
        self.cell.as_deref()?.as_any().downcast_ref::<T>()
    }

    /// Borrow the held value, reporting why it is unavailable otherwise.
    pub fn try_downcast_ref<T: Holdable>(&self) -> Result<&T> {
        let Some(cell) = self.cell.as_deref() else {
            return Err(VariantError::empty(TypeInfo::of::<T>()));
        };
        cell.as_any()
            .downcast_ref::<T>()
            .ok_or_else(|| VariantError::type_mismatch(TypeInfo::of::<T>(), cell.type_info()))
    }

    /// Clone out the held value, reporting why it is unavailable otherwise.
    pub fn try_cast<T: Holdable + Clone>(&self) -> Result<T> {
        self.try_downcast_ref::<T>().cloned()
    }

    /// Clone out the held value, or return `T::default()` when the variant is
    /// empty or holds another type.
    pub fn cast<T: Holdable + Clone + Default>(&self) -> T {
        self.cast_or_else(T::default)
    }

    /// Clone out the held value, or return `default` when the variant is
    /// empty or holds another type.
    pub fn cast_or<T: Holdable + Clone>(&self, default: T) -> T {
        self.cast_or_else(|| default)
    }

    /// Clone out the held value, or compute a fallback when the variant is
    /// empty or holds another type.
    pub fn cast_or_else<T, F>(&self, fallback: F) -> T
    where
        T: Holdable + Clone,
        F: FnOnce() -> T,
    {
        match self.downcast_ref::<T>() {
            Some(value) => value.clone(),
            None => {
                if let Some(found) = self.type_info() {
                    debug!(
                        "Variant holds {}, falling back to default {}",
                        found,
                        std::any::type_name::<T>()
                    );
                }
                fallback()
            }
        }
    }
}

impl<T: Holdable> From<T> for Variant {
    fn from(value: T) -> Self {
        Self {
            cell: Some(BackingCell::share(value)),
        }
    }
}

impl From<Null> for Variant {
    fn from(_: Null) -> Self {
        Self::new()
    }
}

impl From<&str> for Variant {
    fn from(s: &str) -> Self {
        Self::from(s.to_owned())
    }
}

impl From<&[u16]> for Variant {
    fn from(units: &[u16]) -> Self {
        Self::from(WideString::from(units))
    }
}

impl<const N: usize> From<&[u16; N]> for Variant {
    fn from(units: &[u16; N]) -> Self {
        Self::from(&units[..])
    }
}

impl PartialEq for Variant {
    fn eq(&self, other: &Self) -> bool {
        match (&self.cell, &other.cell) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b) || a.eq_erased(b.as_ref()),
            _ => false,
        }
    }
}

impl<T: Holdable> PartialEq<T> for Variant {
    fn eq(&self, other: &T) -> bool {
        self.downcast_ref::<T>().is_some_and(|value| value == other)
    }
}

impl PartialEq<Null> for Variant {
    fn eq(&self, _: &Null) -> bool {
        self.is_empty()
    }
}

impl PartialEq<Variant> for Null {
    fn eq(&self, other: &Variant) -> bool {
        other.is_empty()
    }
}

impl PartialEq<str> for Variant {
    fn eq(&self, other: &str) -> bool {
        self.downcast_ref::<String>()
            .is_some_and(|value| value == other)
    }
}

impl PartialEq<&str> for Variant {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl PartialEq<Variant> for str {
    fn eq(&self, other: &Variant) -> bool {
        *other == *self
    }
}

impl PartialEq<Variant> for &str {
    fn eq(&self, other: &Variant) -> bool {
        *other == **self
    }
}

impl PartialEq<[u16]> for Variant {
    fn eq(&self, other: &[u16]) -> bool {
        self.downcast_ref::<WideString>()
            .is_some_and(|value| *value == *other)
    }
}

impl PartialEq<&[u16]> for Variant {
    fn eq(&self, other: &&[u16]) -> bool {
        *self == **other
    }
}

impl PartialEq<Variant> for [u16] {
    fn eq(&self, other: &Variant) -> bool {
        *other == *self
    }
}

impl PartialEq<Variant> for &[u16] {
    fn eq(&self, other: &Variant) -> bool {
        *other == **self
    }
}

impl fmt::Debug for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cell {
            None => f.write_str("Variant(Empty)"),
            Some(cell) => {
                write!(f, "Variant({}: ", cell.type_info())?;
                cell.fmt_value(f)?;
                f.write_str(")")
            }
        }
    }
}
