//! Eligibility of types for storage in a `Variant`.
//!
//! A type may be held only if it implements [`Holdable`]. The trait is opt-in
//! and this crate implements it only for owned value types, so references, raw
//! pointers, arrays, slices, smart pointers, the [`Null`](crate::Null) marker
//! and `Variant` itself are rejected at compile time unless someone opts them
//! in. `Null` and `Variant` cannot be opted in downstream; pointer-like types
//! wrapping a local type (`&'static Mine`, `Box<Mine>`) can, and doing so
//! breaks the value-type contract: the variant then holds the pointer, and
//! `is::<Mine>()` is false for it.
//!
//! Every type marked with [`holdable!`](crate::holdable) can also sit on the
//! left of `==` against a `Variant`, as can the generic containers below.

use std::any::Any;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;
use std::time::Duration;

use crate::variant::Variant;
use crate::wide::WideString;

/// A value type that can be erased into a `Variant`.
///
/// The supertraits are what the backing cell needs: `Any` for checked
/// downcasting, `Send + Sync` so shared cells can cross threads, `PartialEq`
/// for erased equality and `Debug` for formatting.
///
/// Implement it for your own types with [`holdable!`](crate::holdable) or
/// by hand:
///
/// ```
/// use sharedvar_core::{Holdable, Variant};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl Holdable for Point {}
///
/// let v = Variant::from(Point { x: 1, y: 2 });
/// assert!(v.is::<Point>());
/// ```
pub trait Holdable: Any + Send + Sync + PartialEq + Debug {}

/// Mark one or more types as [`Holdable`], and allow them on the left-hand
/// side of a comparison with a `Variant`.
///
/// ```
/// use sharedvar_core::{holdable, Variant};
///
/// #[derive(Debug, Clone, Default, PartialEq)]
/// struct Celsius(f64);
///
/// #[derive(Debug, Clone, PartialEq)]
/// enum Mode {
///     Fast,
///     Safe,
/// }
///
/// holdable!(Celsius, Mode);
///
/// let v = Variant::from(Mode::Safe);
/// assert_eq!(v, Mode::Safe);
/// assert!(Mode::Safe == v);
/// assert!(Mode::Fast != v);
/// assert_eq!(v.cast::<Celsius>(), Celsius(0.0));
/// ```
#[macro_export]
macro_rules! holdable {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Holdable for $ty {}

            impl ::core::cmp::PartialEq<$crate::Variant> for $ty {
                fn eq(&self, other: &$crate::Variant) -> bool {
                    *other == *self
                }
            }
        )+
    };
}

holdable!(
    bool, char, (), i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    String, WideString, Duration,
);

macro_rules! holdable_generic {
    ($(impl<$($param:ident: $first:ident $(+ $bound:ident)*),+> for $ty:ty;)+) => {
        $(
            impl<$($param: $first $(+ $bound)*),+> Holdable for $ty {}

            impl<$($param: $first $(+ $bound)*),+> PartialEq<Variant> for $ty {
                fn eq(&self, other: &Variant) -> bool {
                    *other == *self
                }
            }
        )+
    };
}

holdable_generic! {
    impl<T: Holdable> for Option<T>;
    impl<T: Holdable> for Vec<T>;
    impl<T: Holdable> for VecDeque<T>;
    impl<T: Holdable + Eq + Hash> for HashSet<T>;
    impl<T: Holdable + Ord> for BTreeSet<T>;
    impl<K: Holdable + Eq + Hash, V: Holdable> for HashMap<K, V>;
    impl<K: Holdable + Ord, V: Holdable> for BTreeMap<K, V>;
}

macro_rules! holdable_tuple {
    ($($name:ident),+) => {
        impl<$($name: Holdable),+> Holdable for ($($name,)+) {}

        impl<$($name: Holdable),+> PartialEq<Variant> for ($($name,)+) {
            fn eq(&self, other: &Variant) -> bool {
                *other == *self
            }
        }
    };
}

holdable_tuple!(A);
holdable_tuple!(A, B);
holdable_tuple!(A, B, C);
holdable_tuple!(A, B, C, D);
holdable_tuple!(A, B, C, D, E);
holdable_tuple!(A, B, C, D, E, F);

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_holdable<T: Holdable>() {}

    #[derive(Debug, PartialEq)]
    struct Custom(u8);

    holdable!(Custom);

    #[test]
    fn test_primitives_are_holdable() {
        assert_holdable::<bool>();
        assert_holdable::<i32>();
        assert_holdable::<u128>();
        assert_holdable::<f64>();
        assert_holdable::<char>();
        assert_holdable::<()>();
    }

    #[test]
    fn test_owned_collections_are_holdable() {
        assert_holdable::<String>();
        assert_holdable::<WideString>();
        assert_holdable::<Vec<bool>>();
        assert_holdable::<Option<Vec<String>>>();
        assert_holdable::<HashMap<String, Vec<i64>>>();
        assert_holdable::<BTreeMap<i32, (String, f32)>>();
        assert_holdable::<HashSet<u8>>();
        assert_holdable::<VecDeque<char>>();
        assert_holdable::<(i32, String, bool, u8, i8, Duration)>();
    }

    #[test]
    fn test_macro_marks_user_types() {
        assert_holdable::<Custom>();
        assert_holdable::<Vec<Custom>>();
    }

    #[test]
    fn test_values_compare_from_the_left() {
        let x = Variant::from(20);
        assert!(20 == x);
        assert!(21 != x);
        assert!(20i64 != x);

        let custom = Variant::from(Custom(3));
        assert!(Custom(3) == custom);
        assert!(Custom(4) != custom);

        let text = Variant::from(String::from("hi"));
        assert!(String::from("hi") == text);
        assert!(WideString::from("hi") != text);

        assert!(vec![true, false] == Variant::from(vec![true, false]));
        assert!(Some(1u8) == Variant::from(Some(1u8)));
        assert!((1, String::from("a")) == Variant::from((1, String::from("a"))));
        assert!(Duration::from_secs(1) != Variant::new());
    }

    #[test]
    fn test_pointer_opt_in_is_a_distinct_type() {
        impl Holdable for Box<Custom> {}

        let boxed = Variant::from(Box::new(Custom(1)));
        assert!(boxed.is::<Box<Custom>>());
        assert!(!boxed.is::<Custom>());
        assert_ne!(boxed, Custom(1));
    }
}
