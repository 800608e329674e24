//! Conversions between flat Rust tuples and the inductive [`Cons`](crate::Cons)/[`Nil`](crate::Nil)
//! lists.
//!
//! Flat tuples are what people write; lists are what the trait solver can recurse over. Every
//! flat tuple of up to 64 elements converts into the equivalent list and back again:
//!
//! ```
//! use htuple::prelude::*;
//! use static_assertions::assert_type_eq_all;
//!
//! assert_type_eq_all!(<(u8, bool) as Tuple>::AsList, Tuple![u8, bool]);
//! assert_type_eq_all!(<Tuple![u8, bool] as List>::AsTuple, (u8, bool));
//!
//! let list = (1, 'a', "b").into_list();
//! assert_eq!(list, tuple![1, 'a', "b"]);
//! assert_eq!(list.into_tuple(), (1, 'a', "b"));
//! ```

/// A flat tuple, which can be converted into an inductive list.
pub trait Tuple: Sized {
    /// The equivalent list of this tuple's elements.
    type AsList: List<AsTuple = Self>;

    /// Move this tuple's elements into the equivalent list.
    fn into_list(self) -> Self::AsList;
}

/// An inductive list built of [`Cons`](crate::Cons) and [`Nil`](crate::Nil), which can be
/// converted into a flat tuple.
pub trait List: Sized {
    /// The equivalent flat tuple of this list's elements.
    type AsTuple: Tuple<AsList = Self>;

    /// Move this list's elements into the equivalent flat tuple.
    fn into_tuple(self) -> Self::AsTuple;
}

htuple_macro::impl_tuples!(64);
