//! Concatenation of any number of containers into one.
//!
//! The inputs to [`concat()`] are given as a flat tuple (or a list) of containers, each of which
//! may be a product container, a flat tuple, or an array. The result is a single [`Cons`] list of
//! every input's elements, in order:
//!
//! ```
//! use htuple::prelude::*;
//! use htuple::reflect::{size_of, Size};
//! use htuple::Nil;
//!
//! let joined = htuple::concat((tuple![1, 2], (3,), [4, 5]));
//! assert_eq!(joined, tuple![1, 2, 3, 4, 5]);
//!
//! fn size<C: Size>(_: &C) -> usize {
//!     size_of::<C>()
//! }
//! assert_eq!(size(&joined), 5);
//!
//! // Empty inputs contribute nothing
//! let joined = htuple::concat(((), tuple!['a'], [0u8; 0], ("b", 'c')));
//! assert_eq!(joined, tuple!['a', "b", 'c']);
//! assert_eq!(htuple::concat(()), Nil);
//! ```
//!
//! The position of any element of the result can also be found without building it: [`locate`]
//! walks the inputs, skipping whole inputs while the index is at least as large as their length,
//! and then indexes into the input where it lands.

use crate::access::Get;
use crate::reflect::Size;
use crate::tuple::List;
use crate::unary::{Add, Compare, Number, Sub, ToUnary, Unary, UnaryOf, Z};
use crate::{Cons, Nil};

/// A container which can be converted into a product container with the same elements.
///
/// This is implemented for [`Nil`] and [`Cons`] (as the identity), for every flat tuple of up to
/// 64 elements, and for every array of up to 64 elements.
pub trait IntoProduct {
    /// The product container with the same elements, in the same order.
    type Product: List;

    /// Move the elements into a product container.
    fn into_product(self) -> Self::Product;
}

impl IntoProduct for Nil {
    type Product = Nil;

    #[inline]
    fn into_product(self) -> Nil {
        self
    }
}

impl<H, T> IntoProduct for Cons<H, T>
where
    Cons<H, T>: List,
{
    type Product = Self;

    #[inline]
    fn into_product(self) -> Self {
        self
    }
}

/// Append one list to the end of another.
///
/// # Examples
///
/// ```
/// use htuple::prelude::*;
///
/// assert_eq!(tuple![1, 2].append(tuple!['3']), tuple![1, 2, '3']);
/// assert_eq!(tuple![].append(tuple![1]), tuple![1]);
/// ```
pub trait Append<Rhs> {
    /// The combined list.
    type Output;

    /// Put the elements of `rhs` after the elements of `self`.
    fn append(self, rhs: Rhs) -> Self::Output;
}

impl<Rhs> Append<Rhs> for Nil {
    type Output = Rhs;

    #[inline]
    fn append(self, rhs: Rhs) -> Rhs {
        rhs
    }
}

impl<H, T: Append<Rhs>, Rhs> Append<Rhs> for Cons<H, T> {
    type Output = Cons<H, T::Output>;

    #[inline]
    fn append(self, rhs: Rhs) -> Self::Output {
        Cons::new(self.head, self.tail.append(rhs))
    }
}

/// A list of containers which can be concatenated into one product container.
pub trait Concat {
    /// The concatenation of all the containers.
    type Output;

    /// Concatenate all the containers, in order.
    fn concat(self) -> Self::Output;
}

impl Concat for Nil {
    type Output = Nil;

    #[inline]
    fn concat(self) -> Nil {
        Nil
    }
}

impl<H: IntoProduct, T: Concat> Concat for Cons<H, T>
where
    H::Product: Append<T::Output>,
{
    type Output = <H::Product as Append<T::Output>>::Output;

    #[inline]
    fn concat(self) -> Self::Output {
        self.head.into_product().append(self.tail.concat())
    }
}

/// Concatenate a flat tuple (or list, or array) of containers into a single product container.
///
/// Concatenating no containers at all gives [`Nil`].
#[inline]
pub fn concat<Ts>(inputs: Ts) -> <Ts::Product as Concat>::Output
where
    Ts: IntoProduct,
    Ts::Product: Concat,
{
    inputs.into_product().concat()
}

/// The type of the concatenation of a list of containers.
pub type Concatenated<L> = <L as Concat>::Output;

/// The sum of the sizes of a list of containers, at the type level.
///
/// This is always the size of their concatenation.
///
/// # Examples
///
/// ```
/// use htuple::prelude::*;
/// use htuple::concat::TotalSize;
/// use htuple::unary::UnaryOf;
/// use static_assertions::assert_type_eq_all;
///
/// type Inputs = Tuple![Tuple![u8, u8], [char; 3], Tuple![], (bool,)];
/// assert_type_eq_all!(<Inputs as TotalSize>::Len, UnaryOf<6>);
/// ```
pub trait TotalSize {
    /// The total size.
    type Len: Unary;
}

impl TotalSize for Nil {
    type Len = Z;
}

impl<H: Size, T: TotalSize> TotalSize for Cons<H, T>
where
    (H::Len, T::Len): Add,
{
    type Len = <(H::Len, T::Len) as Add>::Result;
}

/// The index `N` falls inside the first container of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Here;

/// The index `N` falls after the first container of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct There;

/// [`Here`] if the index `N` is less than the size of `H`, otherwise [`There`].
type Branch<N, H> = <(N, <H as Size>::Len) as Compare<Here, There, There>>::Result;

/// Access to the element at index `N` of the concatenation of a list of containers, without
/// performing the concatenation.
///
/// The containers in the list must themselves support [`Get`]: product containers, pairs and
/// arrays do.
///
/// # Examples
///
/// ```
/// use htuple::prelude::*;
///
/// let inputs = tuple![tuple![1u8, 2u8], tuple![], ['c', 'd'], ("e", 6.0)];
/// assert_eq!(*htuple::locate::<0, _>(&inputs), 1);
/// assert_eq!(*htuple::locate::<3, _>(&inputs), 'd');
/// assert_eq!(*htuple::locate::<4, _>(&inputs), "e");
/// ```
///
/// Indices past the total size are rejected:
///
/// ```compile_fail
/// use htuple::prelude::*;
///
/// let inputs = tuple![tuple![1u8, 2u8], ['c', 'd']];
/// let _ = htuple::locate::<4, _>(&inputs);
/// ```
pub trait Locate<N: Unary> {
    /// The type of the element.
    type Output;

    /// Borrow the element.
    fn locate(&self) -> &Self::Output;

    /// Mutably borrow the element.
    fn locate_mut(&mut self) -> &mut Self::Output;
}

/// One step of [`Locate`], after deciding whether the index falls in the first container.
pub trait LocateIn<N: Unary, Where> {
    /// The type of the element.
    type Output;

    /// Borrow the element.
    fn locate_in(&self) -> &Self::Output;

    /// Mutably borrow the element.
    fn locate_in_mut(&mut self) -> &mut Self::Output;
}

impl<N: Unary, H: Get<N>, T> LocateIn<N, Here> for Cons<H, T> {
    type Output = H::Output;

    #[inline]
    fn locate_in(&self) -> &H::Output {
        self.head.slot()
    }

    #[inline]
    fn locate_in_mut(&mut self) -> &mut H::Output {
        self.head.slot_mut()
    }
}

impl<N: Unary, H: Size, T> LocateIn<N, There> for Cons<H, T>
where
    (N, H::Len): Sub,
    T: Locate<<(N, H::Len) as Sub>::Result>,
{
    type Output = T::Output;

    #[inline]
    fn locate_in(&self) -> &T::Output {
        self.tail.locate()
    }

    #[inline]
    fn locate_in_mut(&mut self) -> &mut T::Output {
        self.tail.locate_mut()
    }
}

impl<N: Unary, H: Size, T> Locate<N> for Cons<H, T>
where
    (N, H::Len): Compare<Here, There, There>,
    Self: LocateIn<N, Branch<N, H>>,
{
    type Output = <Self as LocateIn<N, Branch<N, H>>>::Output;

    #[inline]
    fn locate(&self) -> &Self::Output {
        <Self as LocateIn<N, Branch<N, H>>>::locate_in(self)
    }

    #[inline]
    fn locate_mut(&mut self) -> &mut Self::Output {
        <Self as LocateIn<N, Branch<N, H>>>::locate_in_mut(self)
    }
}

/// The type of the element at index `I` of the concatenation of the list of containers `L`.
pub type ConcatElementOf<const I: usize, L> = <L as Locate<UnaryOf<I>>>::Output;

/// Borrow the element at index `I` of the concatenation of a list of containers, without
/// performing the concatenation.
#[inline]
pub fn locate<const I: usize, L>(inputs: &L) -> &ConcatElementOf<I, L>
where
    Number<I>: ToUnary,
    L: Locate<UnaryOf<I>>,
{
    inputs.locate()
}

/// Mutably borrow the element at index `I` of the concatenation of a list of containers, without
/// performing the concatenation.
#[inline]
pub fn locate_mut<const I: usize, L>(inputs: &mut L) -> &mut ConcatElementOf<I, L>
where
    Number<I>: ToUnary,
    L: Locate<UnaryOf<I>>,
{
    inputs.locate_mut()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflect::{ElementOf, SizeOf};
    use crate::Access;
    use static_assertions::assert_type_eq_all;

    type Inputs = Cons<
        Cons<u8, Cons<u16, Nil>>,
        Cons<Nil, Cons<[char; 2], Cons<(bool, &'static str), Nil>>>,
    >;

    assert_type_eq_all!(SizeOf<Concatenated<Inputs>>, <Inputs as TotalSize>::Len);
    assert_type_eq_all!(ConcatElementOf<0, Inputs>, ElementOf<0, Concatenated<Inputs>>);
    assert_type_eq_all!(ConcatElementOf<2, Inputs>, char);
    assert_type_eq_all!(ConcatElementOf<3, Inputs>, ElementOf<3, Concatenated<Inputs>>);
    assert_type_eq_all!(ConcatElementOf<5, Inputs>, &'static str);
    assert_type_eq_all!(Concatenated<Nil>, Nil);
    assert_type_eq_all!(Concatenated<Cons<Nil, Cons<(), Nil>>>, Nil);

    fn inputs() -> Inputs {
        Cons::new(
            Cons::new(1, Cons::new(2, Nil)),
            Cons::new(Nil, Cons::new(['c', 'd'], Cons::new((true, "f"), Nil))),
        )
    }

    #[test]
    fn concatenation_preserves_order() {
        let joined = inputs().concat();
        assert_eq!(*joined.at::<0>(), 1);
        assert_eq!(*joined.at::<1>(), 2);
        assert_eq!(*joined.at::<2>(), 'c');
        assert_eq!(*joined.at::<3>(), 'd');
        assert!(*joined.at::<4>());
        assert_eq!(*joined.at::<5>(), "f");
    }

    #[test]
    fn locate_agrees_with_concat() {
        let inputs = inputs();
        let joined = inputs.concat();
        assert_eq!(locate::<0, _>(&inputs), joined.at::<0>());
        assert_eq!(locate::<1, _>(&inputs), joined.at::<1>());
        assert_eq!(locate::<2, _>(&inputs), joined.at::<2>());
        assert_eq!(locate::<3, _>(&inputs), joined.at::<3>());
        assert_eq!(locate::<4, _>(&inputs), joined.at::<4>());
        assert_eq!(locate::<5, _>(&inputs), joined.at::<5>());
    }

    #[test]
    fn locate_mut_writes_into_the_input() {
        let mut inputs = inputs();
        *locate_mut::<3, _>(&mut inputs) = 'z';
        assert_eq!(inputs.tail.tail.head, ['c', 'z']);
    }

    #[test]
    fn concatenating_nothing() {
        assert_eq!(concat(()), Nil);
        assert_eq!(concat(((), Nil, [0u8; 0])), Nil);
    }
}
