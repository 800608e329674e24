//! Construction helpers: ignoring slots, tying variables together, and forwarding arguments.

use crate::concat::IntoProduct;
use crate::tuple::{List, Tuple};
use crate::{Cons, Nil};

/// A placeholder which accepts, and discards, an assignment of any type.
///
/// In a [`tie!`](crate::tie) it takes the place of an element to be skipped, and is what a `_`
/// expands to.
///
/// # Examples
///
/// ```
/// use htuple::prelude::*;
/// use htuple::helpers::Sink;
///
/// IGNORE.sink(5);
/// IGNORE.sink("anything at all");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Ignore;

/// The [`Ignore`] placeholder.
pub const IGNORE: Ignore = Ignore;

/// Something which can receive one value of type `V` during an assignment.
pub trait Sink<V> {
    /// Receive the value.
    fn sink(self, value: V);
}

impl<'a, T> Sink<T> for &'a mut T {
    #[inline]
    fn sink(self, value: T) {
        *self = value;
    }
}

impl<V> Sink<V> for Ignore {
    #[inline]
    fn sink(self, _: V) {}
}

/// A list of [`Sink`]s which can receive, slot by slot, the elements of the list `Src`.
///
/// The two lists must be the same size.
pub trait AssignFrom<Src> {
    /// Give each element of `src` to the corresponding sink.
    fn assign_from(self, src: Src);
}

impl AssignFrom<Nil> for Nil {
    #[inline]
    fn assign_from(self, _: Nil) {}
}

impl<H, T, V, Rest> AssignFrom<Cons<V, Rest>> for Cons<H, T>
where
    H: Sink<V>,
    T: AssignFrom<Rest>,
{
    #[inline]
    fn assign_from(self, src: Cons<V, Rest>) {
        self.head.sink(src.head);
        self.tail.assign_from(src.tail);
    }
}

/// Assignment of a whole container through a list of sinks, usually made by [`tie!`](crate::tie).
///
/// Each element of the source must have exactly the type of the variable it's assigned to: no
/// conversions are applied, so convert the source first (e.g. `i32` elements into `i64` variables).
///
/// # Examples
///
/// ```
/// use htuple::prelude::*;
///
/// let (mut name, mut count) = (String::new(), 0);
/// tie!(name, count).assign((String::from("apples"), 3));
/// assert_eq!(name, "apples");
/// assert_eq!(count, 3);
///
/// // Any container of the same size can be the source
/// tie!(count, _, name).assign(tuple![4, 'x', String::from("pears")]);
/// assert_eq!((name.as_str(), count), ("pears", 4));
/// ```
///
/// Sources of a different size are rejected:
///
/// ```compile_fail
/// use htuple::prelude::*;
///
/// let (mut a, mut b) = (0, 0);
/// tie!(a, b).assign((1, 2, 3));
/// ```
///
/// So are elements of a different type, even when they would convert:
///
/// ```compile_fail
/// use htuple::prelude::*;
///
/// let (mut a, mut b) = (0i64, 0i64);
/// tie!(a, b).assign((1i32, 2i32));
/// ```
///
/// ```
/// use htuple::prelude::*;
///
/// let (mut a, mut b) = (0i64, 0i64);
/// let (x, y) = (1i32, 2i32);
/// tie!(a, b).assign((i64::from(x), i64::from(y)));
/// assert_eq!((a, b), (1, 2));
/// ```
pub trait Assign: List {
    /// Give each element of `src` to the corresponding sink in `self`.
    #[inline]
    fn assign<Src>(self, src: Src)
    where
        Src: IntoProduct,
        Self: AssignFrom<Src::Product>,
    {
        self.assign_from(src.into_product())
    }
}

impl<L: List> Assign for L {}

/// Call a function with the elements of a list as its arguments, in order.
///
/// Implemented for every list of up to 64 elements.
///
/// # Examples
///
/// ```
/// use htuple::prelude::*;
///
/// let sum = tuple![1, 2, 3].apply(|a: i32, b: i32, c: i32| a + b + c);
/// assert_eq!(sum, 6);
/// assert_eq!(tuple![].apply(|| "nothing"), "nothing");
/// ```
pub trait Apply<F> {
    /// The return type of the function.
    type Output;

    /// Call `f` with the elements of `self`.
    fn apply(self, f: F) -> Self::Output;
}

/// Forward a flat tuple of arguments as a list, moving each argument into its slot unchanged.
///
/// Borrows stay borrows and owned values stay owned, so the list has exactly the categories the
/// arguments had. A list holding borrows cannot outlive the values it borrows from.
///
/// # Examples
///
/// ```
/// use htuple::prelude::*;
///
/// let greeting = String::from("hello");
/// let mut count = 0;
/// let args = htuple::forward_as_tuple((&greeting, &mut count, 'x'));
/// args.apply(|g: &String, c: &mut i32, x: char| {
///     *c = g.len() as i32;
///     assert_eq!(x, 'x');
/// });
/// assert_eq!(count, 5);
/// ```
///
/// ```compile_fail
/// use htuple::prelude::*;
///
/// let args = {
///     let local = String::from("dropped too soon");
///     htuple::forward_as_tuple((&local,))
/// };
/// let _ = args;
/// ```
#[inline]
pub fn forward_as_tuple<Ts: Tuple>(args: Ts) -> Ts::AsList {
    args.into_list()
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::{assert_impl_all, assert_not_impl_any};

    assert_impl_all!(Ignore: Sink<u8>, Sink<String>, Copy, Send, Sync);
    assert_impl_all!(Cons<&'static mut u8, Cons<Ignore, Nil>>: AssignFrom<Cons<u8, Cons<char, Nil>>>);
    assert_not_impl_any!(Cons<&'static mut u8, Nil>: AssignFrom<Cons<u8, Cons<u8, Nil>>>);
    assert_not_impl_any!(Cons<&'static mut i64, Nil>: AssignFrom<Cons<i32, Nil>>);

    #[test]
    fn tie_assigns_from_a_pair() {
        let (mut a, mut b) = (0u8, 'a');
        Cons::new(&mut a, Cons::new(&mut b, Nil)).assign((7u8, 'z'));
        assert_eq!((a, b), (7, 'z'));
    }

    #[test]
    fn ignored_slots_are_untouched() {
        let (mut a, mut c) = (1, 3);
        Cons::new(&mut a, Cons::new(IGNORE, Cons::new(&mut c, Nil))).assign([10, 20, 30]);
        assert_eq!((a, c), (10, 30));
    }

    #[test]
    fn apply_passes_elements_in_order() {
        let list = Cons::new('a', Cons::new(String::from("b"), Cons::new(3, Nil)));
        let joined = list.apply(|a: char, b: String, c: i32| format!("{}{}{}", a, b, c));
        assert_eq!(joined, "ab3");
    }

    #[test]
    fn forwarded_borrows_write_through() {
        let mut n = 1;
        forward_as_tuple((&mut n,)).apply(|n: &mut i32| *n += 1);
        assert_eq!(n, 2);
    }
}
