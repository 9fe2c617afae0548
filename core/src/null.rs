//! The null marker.

/// Explicit "no value".
///
/// Building a `Variant` from `Null` gives the same empty state as
/// `Variant::new()`, and an empty `Variant` compares equal to `Null`.
/// `Null` is deliberately not [`Holdable`](crate::Holdable): it can never be
/// stored as a value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Null;
