//! Sharedvar Core - type-erased, immutable, shared-ownership values
//!
//! A [`Variant`] stores one value of any [`Holdable`] type behind a shared,
//! immutable backing cell. Clones are O(1) and alias the same cell, values can
//! be compared across the erasure boundary (only when the concrete types
//! match), and the stored type can be checked and recovered at runtime.

mod cell;
pub mod null;
pub mod traits;
pub mod variant;
pub mod wide;

pub use null::Null;
pub use traits::Holdable;
pub use variant::Variant;
pub use wide::WideString;

pub use sharedvar_common::{Result, TypeInfo, VariantError};
