//! Reading and writing individual slots by a statically known index.
//!
//! [`Get`] is the per-container protocol, expressed over unary indices so it can recurse through a
//! [`Cons`] list. Day to day, use the [`Access`] methods or the free functions [`get`],
//! [`get_mut`] and [`take`], which take the index as a `const` generic:
//!
//! ```
//! use htuple::prelude::*;
//!
//! let mut t = tuple![1u8, String::from("two"), 3.0];
//! assert_eq!(*t.at::<0>(), 1);
//! t.at_mut::<1>().push('!');
//! assert_eq!(t.at::<1>(), "two!");
//!
//! // Moving out of one slot consumes the container
//! let two: String = t.take::<1>();
//! assert_eq!(two, "two!");
//! ```
//!
//! An index that is out of range for the container is a compile error:
//!
//! ```compile_fail
//! use htuple::prelude::*;
//!
//! let t = tuple![1u8, 2u16];
//! let _ = t.at::<2>();
//! ```
//!
//! ```compile_fail
//! let a = [1, 2, 3];
//! let _ = htuple::get::<3, _>(&a);
//! ```
//!
//! The category of the container is carried through to the slot: a shared borrow of the container
//! gives a shared borrow of the slot, a mutable borrow gives a mutable borrow, and an owned
//! container gives the owned slot. [`GetBy`] expresses this choice as a type parameter, using the
//! calling conventions [`Val`], [`Ref`] and [`Mut`] from [`call_by`].

use call_by::{By, Convention, Mut, Ref, Val};

use crate::reflect::{Element, ElementOf, Size};
use crate::unary::{LessThan, Number, ToUnary, Unary, UnaryOf, S, Z};
use crate::Cons;

/// Access to the slot at index `N` of a container.
pub trait Get<N: Unary>: Element<N> {
    /// Borrow the slot.
    fn slot(&self) -> &Self::Output;

    /// Mutably borrow the slot.
    fn slot_mut(&mut self) -> &mut Self::Output;

    /// Move the slot out, dropping the rest of the container.
    fn into_slot(self) -> Self::Output
    where
        Self: Sized;
}

impl<H, T> Get<Z> for Cons<H, T> {
    #[inline]
    fn slot(&self) -> &H {
        &self.head
    }

    #[inline]
    fn slot_mut(&mut self) -> &mut H {
        &mut self.head
    }

    #[inline]
    fn into_slot(self) -> H {
        self.head
    }
}

impl<N: Unary, H, T: Get<N>> Get<S<N>> for Cons<H, T> {
    #[inline]
    fn slot(&self) -> &T::Output {
        self.tail.slot()
    }

    #[inline]
    fn slot_mut(&mut self) -> &mut T::Output {
        self.tail.slot_mut()
    }

    #[inline]
    fn into_slot(self) -> T::Output {
        self.tail.into_slot()
    }
}

impl<A, B> Get<Z> for (A, B) {
    #[inline]
    fn slot(&self) -> &A {
        &self.0
    }

    #[inline]
    fn slot_mut(&mut self) -> &mut A {
        &mut self.0
    }

    #[inline]
    fn into_slot(self) -> A {
        self.0
    }
}

impl<A, B> Get<S<Z>> for (A, B) {
    #[inline]
    fn slot(&self) -> &B {
        &self.1
    }

    #[inline]
    fn slot_mut(&mut self) -> &mut B {
        &mut self.1
    }

    #[inline]
    fn into_slot(self) -> B {
        self.1
    }
}

impl<N: Unary, T, const M: usize> Get<N> for [T; M]
where
    Number<M>: ToUnary,
    N: LessThan<UnaryOf<M>>,
{
    #[inline]
    fn slot(&self) -> &T {
        &self[N::VALUE]
    }

    #[inline]
    fn slot_mut(&mut self) -> &mut T {
        &mut self[N::VALUE]
    }

    #[inline]
    fn into_slot(self) -> T {
        IntoIterator::into_iter(self)
            .nth(N::VALUE)
            .expect("index is statically less than the array length")
    }
}

/// Index-based access to the slots of any container, with the index as a `const` generic.
///
/// This is implemented for every type with a [`Size`], and the methods are available whenever
/// the index is in range for the container.
pub trait Access: Size {
    /// Borrow the slot at index `I`.
    #[inline]
    fn at<const I: usize>(&self) -> &ElementOf<I, Self>
    where
        Number<I>: ToUnary,
        Self: Get<UnaryOf<I>>,
    {
        self.slot()
    }

    /// Mutably borrow the slot at index `I`.
    #[inline]
    fn at_mut<const I: usize>(&mut self) -> &mut ElementOf<I, Self>
    where
        Number<I>: ToUnary,
        Self: Get<UnaryOf<I>>,
    {
        self.slot_mut()
    }

    /// Move the slot at index `I` out of the container.
    #[inline]
    fn take<const I: usize>(self) -> ElementOf<I, Self>
    where
        Number<I>: ToUnary,
        Self: Get<UnaryOf<I>> + Sized,
    {
        self.into_slot()
    }
}

impl<C: Size + ?Sized> Access for C {}

/// Borrow the slot at index `I` of a container.
///
/// # Examples
///
/// ```
/// use htuple::prelude::*;
///
/// let t = tuple![1, "two"];
/// assert_eq!(*htuple::get::<1, _>(&t), "two");
///
/// let pair = (1, 'b');
/// assert_eq!(*htuple::get::<1, _>(&pair), 'b');
///
/// let array = [10, 20, 30];
/// assert_eq!(*htuple::get::<2, _>(&array), 30);
/// ```
#[inline]
pub fn get<const I: usize, C>(container: &C) -> &ElementOf<I, C>
where
    Number<I>: ToUnary,
    C: Get<UnaryOf<I>> + ?Sized,
{
    container.slot()
}

/// Mutably borrow the slot at index `I` of a container.
///
/// # Examples
///
/// ```
/// use htuple::prelude::*;
///
/// let mut t = tuple![1, "two"];
/// *htuple::get_mut::<0, _>(&mut t) += 1;
/// assert_eq!(t, tuple![2, "two"]);
/// ```
#[inline]
pub fn get_mut<const I: usize, C>(container: &mut C) -> &mut ElementOf<I, C>
where
    Number<I>: ToUnary,
    C: Get<UnaryOf<I>> + ?Sized,
{
    container.slot_mut()
}

/// Move the slot at index `I` out of a container, dropping the others.
///
/// # Examples
///
/// ```
/// use htuple::prelude::*;
///
/// let t = tuple![Box::new(1), Box::new(2)];
/// let second: Box<i32> = htuple::take::<1, _>(t);
/// assert_eq!(*second, 2);
/// ```
#[inline]
pub fn take<const I: usize, C>(container: C) -> ElementOf<I, C>
where
    Number<I>: ToUnary,
    C: Get<UnaryOf<I>>,
{
    container.into_slot()
}

/// Access to the slot at index `N` of a container, where the container is passed by the calling
/// convention `C` and the slot is returned by the same convention.
///
/// # Examples
///
/// ```
/// use call_by::{Mut, Ref, Val};
/// use htuple::prelude::*;
///
/// type T = Tuple![u8, String];
/// let mut t: T = tuple![1, String::from("two")];
///
/// let r: &String = htuple::get_by::<1, Ref, T>(&t);
/// assert_eq!(r, "two");
///
/// let m: &mut u8 = htuple::get_by::<0, Mut, T>(&mut t);
/// *m = 10;
///
/// let v: String = htuple::get_by::<1, Val, T>(t);
/// assert_eq!(v, "two");
/// ```
pub trait GetBy<'a, N: Unary, C: Convention>: By<'a, C> {
    /// The type of the slot.
    type Element: By<'a, C>;

    /// Get the slot at index `N`, by the calling convention `C`.
    fn get_by(this: <Self as By<'a, C>>::Type) -> <Self::Element as By<'a, C>>::Type;
}

impl<'a, N: Unary, L> GetBy<'a, N, Val> for L
where
    L: Get<N> + 'a,
    L::Output: 'a,
{
    type Element = L::Output;

    #[inline]
    fn get_by(this: L) -> L::Output {
        this.into_slot()
    }
}

impl<'a, N: Unary, L> GetBy<'a, N, Ref> for L
where
    L: Get<N> + 'a,
    L::Output: 'a,
{
    type Element = L::Output;

    #[inline]
    fn get_by(this: &'a L) -> &'a L::Output {
        this.slot()
    }
}

impl<'a, N: Unary, L> GetBy<'a, N, Mut> for L
where
    L: Get<N> + 'a,
    L::Output: 'a,
{
    type Element = L::Output;

    #[inline]
    fn get_by(this: &'a mut L) -> &'a mut L::Output {
        this.slot_mut()
    }
}

/// Get the slot at index `I` of the container `L`, passing the container by the calling
/// convention `C` and receiving the slot by the same convention.
#[inline]
pub fn get_by<'a, const I: usize, C, L>(
    this: <L as By<'a, C>>::Type,
) -> <<L as GetBy<'a, UnaryOf<I>, C>>::Element as By<'a, C>>::Type
where
    Number<I>: ToUnary,
    C: Convention,
    L: GetBy<'a, UnaryOf<I>, C>,
{
    L::get_by(this)
}
