//! Common test utilities and helpers for integration tests

use sharedvar_core::{Holdable, Null, Variant, holdable};

/// A user-defined value type opted into storage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// A second user type, used to check that distinct types never compare equal.
#[allow(dead_code)] // Used in variant_tests.rs only
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pixel {
    pub x: i32,
    pub y: i32,
}

holdable!(Point, Pixel);

/// Create one variant per supported shape: empty, scalar, string, collection
/// and user type.
#[allow(dead_code)]
pub fn create_test_variants() -> Vec<Variant> {
    vec![
        Variant::new(),
        Variant::from(Null),
        Variant::from(42),
        Variant::from(3.5f64),
        Variant::from(true),
        Variant::from("hello"),
        Variant::from(vec![true, false, true]),
        Variant::from(Point { x: 1, y: 2 }),
    ]
}

/// Assert the core round-trip properties for a freshly constructed variant.
#[allow(dead_code)]
pub fn assert_holds<T: Holdable + Clone + Default>(value: T) {
    let variant = Variant::from(value.clone());
    assert!(variant.is::<T>(), "expected {:?} to hold its own type", variant);
    assert!(!variant.is_empty());
    assert!(!variant.is::<Null>());
    assert_eq!(variant.cast::<T>(), value);
    assert_eq!(variant.downcast_ref::<T>(), Some(&value));
}

/// Assert that a clone is indistinguishable from its source.
#[allow(dead_code)]
pub fn assert_clone_matches(variant: &Variant) {
    let copy = variant.clone();
    assert_eq!(copy, *variant);
    assert!(copy.ptr_eq(variant));
    assert_eq!(copy.type_info(), variant.type_info());
    assert_eq!(copy.is::<i32>(), variant.is::<i32>());
    assert_eq!(copy.is::<String>(), variant.is::<String>());
    assert_eq!(copy.is::<Null>(), variant.is::<Null>());
    assert_eq!(copy.is::<Point>(), variant.is::<Point>());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_helpers() {
        let variants = create_test_variants();
        assert_eq!(variants.len(), 8);
        assert!(variants[0].is_empty());
        assert!(variants[1].is_empty());
        assert!(variants[7].is::<Point>());
    }
}
