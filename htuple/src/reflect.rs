//! Compile-time reflection over containers: how many slots they have, and what type is in each.
//!
//! Three kinds of container are understood: the product containers [`Nil`] and [`Cons`], flat
//! Rust tuples (of which the pair `(A, B)` is the one with element reflection), and arrays
//! `[T; N]`. Both queries also see through shared and mutable borrows of a container, and the
//! borrow carries over to the element: the element type of `&'a C` is `&'a C::Output`, the Rust
//! counterpart of `const`-qualifying the element of a `const` container.

use crate::unary::{LessThan, Number, ToUnary, Unary, UnaryOf, S, Z};
use crate::{Cons, Nil};

/// The number of slots in a container, known at compile time.
///
/// # Examples
///
/// ```
/// use htuple::prelude::*;
/// use htuple::reflect::{size_of, Size};
///
/// assert_eq!(size_of::<Tuple![]>(), 0);
/// assert_eq!(size_of::<Tuple![u8, String, bool]>(), 3);
/// assert_eq!(size_of::<(u8, char)>(), 2);
/// assert_eq!(size_of::<[i32; 7]>(), 7);
/// assert_eq!(<&[i32; 7] as Size>::SIZE, 7);
/// ```
pub trait Size {
    /// The number of slots, as a unary number.
    type Len: Unary;

    /// The number of slots, as a `usize`.
    const SIZE: usize = <Self::Len as Unary>::VALUE;
}

impl Size for Nil {
    type Len = Z;
    const SIZE: usize = 0;
}

impl<H, T: Size> Size for Cons<H, T> {
    type Len = S<T::Len>;
    const SIZE: usize = T::SIZE + 1;
}

impl<T, const N: usize> Size for [T; N]
where
    Number<N>: ToUnary,
{
    type Len = UnaryOf<N>;
    const SIZE: usize = N;
}

impl<'a, C: Size + ?Sized> Size for &'a C {
    type Len = C::Len;
    const SIZE: usize = C::SIZE;
}

impl<'a, C: Size + ?Sized> Size for &'a mut C {
    type Len = C::Len;
    const SIZE: usize = C::SIZE;
}

/// The number of slots of the container `C`.
#[inline]
pub const fn size_of<C: Size + ?Sized>() -> usize {
    C::SIZE
}

/// The number of slots of the container `C`, as a unary number.
pub type SizeOf<C> = <C as Size>::Len;

/// The type of the slot at index `N` of a container.
///
/// There is no implementation for an index which is out of range, so naming such an element is a
/// compile error rather than something to check at runtime.
///
/// # Examples
///
/// ```
/// use htuple::prelude::*;
/// use htuple::reflect::ElementOf;
/// use static_assertions::assert_type_eq_all;
///
/// type T = Tuple![u8, String, bool];
/// assert_type_eq_all!(ElementOf<0, T>, u8);
/// assert_type_eq_all!(ElementOf<2, T>, bool);
/// assert_type_eq_all!(ElementOf<1, &T>, &String);
/// assert_type_eq_all!(ElementOf<1, &mut T>, &mut String);
///
/// assert_type_eq_all!(ElementOf<0, (u8, char)>, u8);
/// assert_type_eq_all!(ElementOf<1, (u8, char)>, char);
/// assert_type_eq_all!(ElementOf<5, [i32; 6]>, i32);
/// ```
///
/// Out-of-range indices are rejected:
///
/// ```compile_fail
/// use htuple::prelude::*;
/// use htuple::reflect::ElementOf;
///
/// let _: ElementOf<3, Tuple![u8, String, bool]> = unimplemented!();
/// ```
///
/// ```compile_fail
/// use htuple::reflect::ElementOf;
///
/// let _: ElementOf<2, (u8, char)> = unimplemented!();
/// ```
///
/// ```compile_fail
/// use htuple::reflect::ElementOf;
///
/// let _: ElementOf<6, [i32; 6]> = unimplemented!();
/// ```
pub trait Element<N: Unary> {
    /// The type of the slot.
    type Output;
}

impl<H, T> Element<Z> for Cons<H, T> {
    type Output = H;
}

impl<N: Unary, H, T: Element<N>> Element<S<N>> for Cons<H, T> {
    type Output = T::Output;
}

impl<A, B> Element<Z> for (A, B) {
    type Output = A;
}

impl<A, B> Element<S<Z>> for (A, B) {
    type Output = B;
}

impl<N: Unary, T, const M: usize> Element<N> for [T; M]
where
    Number<M>: ToUnary,
    N: LessThan<UnaryOf<M>>,
{
    type Output = T;
}

impl<'a, N: Unary, C: Element<N> + ?Sized> Element<N> for &'a C
where
    C::Output: 'a,
{
    type Output = &'a C::Output;
}

impl<'a, N: Unary, C: Element<N> + ?Sized> Element<N> for &'a mut C
where
    C::Output: 'a,
{
    type Output = &'a mut C::Output;
}

/// The type of the slot at index `I` of the container `C`.
pub type ElementOf<const I: usize, C> = <C as Element<UnaryOf<I>>>::Output;

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all};

    type Three = Cons<u8, Cons<String, Cons<bool, Nil>>>;

    assert_type_eq_all!(SizeOf<Three>, UnaryOf<3>);
    assert_type_eq_all!(SizeOf<&Three>, UnaryOf<3>);
    assert_type_eq_all!(SizeOf<[u8; 0]>, Z);
    assert_type_eq_all!(ElementOf<1, Three>, String);
    assert_type_eq_all!(ElementOf<1, &&Three>, &&String);
    assert_not_impl_any!(Three: Element<UnaryOf<3>>);
    assert_not_impl_any!(Nil: Element<Z>);
    assert_not_impl_any!([u8; 0]: Element<Z>);
    assert_impl_all!((u8, u16): Element<Z>, Element<S<Z>>, Size);

    #[test]
    fn sizes() {
        assert_eq!(size_of::<Nil>(), 0);
        assert_eq!(size_of::<Three>(), 3);
        assert_eq!(size_of::<&mut Three>(), 3);
        assert_eq!(size_of::<()>(), 0);
        assert_eq!(size_of::<(u8,)>(), 1);
        assert_eq!(size_of::<(u8, u16, u32, u64)>(), 4);
        assert_eq!(size_of::<[(); 256]>(), 256);
    }
}
